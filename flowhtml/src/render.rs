//! Eager rendering: the whole tree is materialized into one string.

use futures::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::attribute::open_tag_chunks;
use crate::Node;

/// Error raised by the eager renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The cancellation signal was observed mid-traversal. All partial output
    /// is discarded.
    #[error("render operation cancelled")]
    Cancelled,
}

/// A unit of pending work on the traversal stack.
///
/// `Close` carries only the tag name, since by the time a closing tag is
/// written the element's attributes and children are already consumed.
enum Frame {
    Open(Node),
    Close(String),
}

/// Render a node tree to a single string.
///
/// Equivalent to [`render_cancellable`] with a token that never fires.
pub async fn render(root: Node) -> Result<String, RenderError> {
    render_cancellable(root, &CancellationToken::new()).await
}

/// Render a node tree to a single string, aborting with
/// [`RenderError::Cancelled`] once `cancel` fires.
///
/// The traversal is driven by an explicit work stack rather than recursion, so
/// host stack depth stays constant regardless of tree depth. The cancellation
/// token is polled once before every stack pop, which bounds the response
/// latency to one node-processing step; draining a [`Node::FragmentStream`]
/// counts as a single step. On cancellation no partial string is returned.
pub async fn render_cancellable(
    root: Node,
    cancel: &CancellationToken,
) -> Result<String, RenderError> {
    let mut out = String::new();
    let mut stack = vec![Frame::Open(root)];

    loop {
        if cancel.is_cancelled() {
            return Err(RenderError::Cancelled);
        }
        let Some(frame) = stack.pop() else { break };

        match frame {
            Frame::Close(tag) => {
                out.push_str("</");
                out.push_str(&tag);
                out.push('>');
            }
            Frame::Open(node) => match node {
                Node::Element {
                    tag,
                    attributes,
                    children,
                } => {
                    for chunk in open_tag_chunks(&tag, attributes) {
                        out.push_str(&chunk);
                    }
                    stack.push(Frame::Close(tag));
                    // Children go on in reverse so that popping restores
                    // document order.
                    for child in children.into_iter().rev() {
                        stack.push(Frame::Open(child));
                    }
                }
                Node::Text { content, encoded } => {
                    if encoded {
                        out.push_str(&html_escape::encode_text(&content));
                    } else {
                        out.push_str(&content);
                    }
                }
                Node::Comment { content } => {
                    out.push_str("<!--");
                    out.push_str(&html_escape::encode_text(&content));
                    out.push_str("-->");
                }
                Node::Fragment { nodes } => {
                    for node in nodes.into_iter().rev() {
                        stack.push(Frame::Open(node));
                    }
                }
                Node::FragmentStream { nodes } => {
                    // The whole sequence is drained here, awaiting whatever
                    // suspension points the producer has, before any of it is
                    // rendered. Source order is preserved.
                    let buffer: Vec<Node> = nodes.collect().await;
                    trace!(drained = buffer.len(), "buffered fragment stream");
                    for node in buffer.into_iter().rev() {
                        stack.push(Frame::Open(node));
                    }
                }
                Node::Deferred { resolve } => {
                    stack.push(Frame::Open(resolve().await));
                }
            },
        }
    }

    trace!(bytes = out.len(), "render complete");
    Ok(out)
}
