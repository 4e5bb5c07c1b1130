//! Streaming rendering: output chunks are produced as early as structurally
//! possible, without buffering the whole document.

use async_stream::stream;
use futures::stream::BoxStream;
use futures::StreamExt;

use crate::attribute::open_tag_chunks;
use crate::Node;

/// Render a node tree as a lazy stream of string chunks.
///
/// Chunks are emitted as soon as they are known: an element's opening tag is
/// yielded before its children are evaluated, and each member of a
/// [`Node::FragmentStream`] is rendered as it arrives. Output chunk order
/// always matches document order; slow producers delay output but never
/// reorder it. Raw text is emitted verbatim, exactly as the eager renderer
/// does, so the two renderers agree byte for byte.
///
/// The stream is single-pass; rendering again means rebuilding the root. There
/// is no explicit cancellation: the consumer stops polling, and nothing past
/// the last suspension point is ever produced.
///
/// Known limitation: the traversal recurses structurally, so host stack usage
/// grows with tree depth and pathologically deep trees can exhaust the call
/// stack. Use [`crate::render`] for trees of unbounded depth.
pub fn render_stream(root: Node) -> BoxStream<'static, String> {
    Box::pin(stream! {
        match root {
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                for chunk in open_tag_chunks(&tag, attributes) {
                    yield chunk;
                }
                for child in children {
                    let mut chunks = render_stream(child);
                    while let Some(chunk) = chunks.next().await {
                        yield chunk;
                    }
                }
                yield format!("</{tag}>");
            }
            Node::Text { content, encoded } => {
                if encoded {
                    yield html_escape::encode_text(&content).into_owned();
                } else {
                    yield content;
                }
            }
            Node::Comment { content } => {
                yield "<!--".to_string();
                yield html_escape::encode_text(&content).into_owned();
                yield "-->".to_string();
            }
            Node::Fragment { nodes } => {
                for node in nodes {
                    let mut chunks = render_stream(node);
                    while let Some(chunk) = chunks.next().await {
                        yield chunk;
                    }
                }
            }
            Node::FragmentStream { mut nodes } => {
                while let Some(node) = nodes.next().await {
                    let mut chunks = render_stream(node);
                    while let Some(chunk) = chunks.next().await {
                        yield chunk;
                    }
                }
            }
            Node::Deferred { resolve } => {
                let mut chunks = render_stream(resolve().await);
                while let Some(chunk) = chunks.next().await {
                    yield chunk;
                }
            }
        }
    })
}
