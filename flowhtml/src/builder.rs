//! Free-function DSL for building node trees.
//!
//! # Example
//!
//! ```
//! use flowhtml::builder::{el, el_attrs, text, ul, li};
//!
//! let root = el_attrs(
//!     "article",
//!     [("id", "post")],
//!     [ul((0..2).map(|i| li([text(format!("item {i}"))])))],
//! );
//! let html = futures::executor::block_on(flowhtml::render(root)).unwrap();
//! assert_eq!(
//!     html,
//!     "<article id=\"post\"><ul><li>item 0</li><li>item 1</li></ul></article>"
//! );
//! ```

use std::future::Future;

use futures::{FutureExt, Stream, StreamExt};

use crate::{Attribute, Node};

/// Create a text node whose content is escaped at render time.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text {
        content: content.into(),
        encoded: true,
    }
}

/// Create a raw text node, emitted verbatim at render time.
///
/// The caller is responsible for the safety of the content.
pub fn raw(content: impl Into<String>) -> Node {
    Node::Text {
        content: content.into(),
        encoded: false,
    }
}

/// Create a comment node. The content is escaped at render time.
pub fn comment(content: impl Into<String>) -> Node {
    Node::Comment {
        content: content.into(),
    }
}

/// Group nodes into a fragment, materialized immediately.
pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Node {
    Node::Fragment {
        nodes: nodes.into_iter().collect(),
    }
}

/// Group nodes arriving via a lazy stream into a fragment.
///
/// The stream is pulled at render time, honoring its own suspension points,
/// and is consumed exactly once.
pub fn fragment_stream(nodes: impl Stream<Item = Node> + Send + 'static) -> Node {
    Node::FragmentStream {
        nodes: nodes.boxed(),
    }
}

/// Create a deferred node from a future-producing closure.
///
/// The closure runs only when a renderer visits the node; a render cancelled
/// beforehand never runs it.
pub fn deferred<F, Fut>(resolve: F) -> Node
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Node> + Send + 'static,
{
    Node::Deferred {
        resolve: Box::new(move || resolve().boxed()),
    }
}

/// Create an element with the given tag and children.
pub fn el(tag: impl Into<String>, children: impl IntoIterator<Item = Node>) -> Node {
    Node::Element {
        tag: tag.into(),
        attributes: Vec::new(),
        children: children.into_iter().collect(),
    }
}

/// Create an element with the given tag, attributes, and children.
///
/// Attribute order is preserved as given.
pub fn el_attrs<A>(
    tag: impl Into<String>,
    attributes: A,
    children: impl IntoIterator<Item = Node>,
) -> Node
where
    A: IntoIterator,
    A::Item: Into<Attribute>,
{
    Node::Element {
        tag: tag.into(),
        attributes: attributes.into_iter().map(Into::into).collect(),
        children: children.into_iter().collect(),
    }
}

/// Create an element whose children are encoded text nodes, one per string.
///
/// Convenience for the common all-text case:
///
/// ```
/// use flowhtml::builder::{el, el_text};
///
/// let root = el("ul", [el_text("li", ["a"]), el_text("li", ["b"])]);
/// let html = futures::executor::block_on(flowhtml::render(root)).unwrap();
/// assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
/// ```
pub fn el_text<I>(tag: impl Into<String>, children: I) -> Node
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    Node::Element {
        tag: tag.into(),
        attributes: Vec::new(),
        children: children.into_iter().map(|s| text(s)).collect(),
    }
}

/// Create an element whose single child is a deferred node.
pub fn el_deferred<F, Fut>(tag: impl Into<String>, resolve: F) -> Node
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Node> + Send + 'static,
{
    Node::Element {
        tag: tag.into(),
        attributes: Vec::new(),
        children: vec![deferred(resolve)],
    }
}

macro_rules! tag_builders {
    ($($tag_ident:ident),* $(,)?) => {
        $(
            #[doc = concat!("Create an element with the tag name `", stringify!($tag_ident), "` and the given children.")]
            pub fn $tag_ident(children: impl IntoIterator<Item = Node>) -> Node {
                el(stringify!($tag_ident), children)
            }
        )*
    };
}
tag_builders! {
    html, head, body, main, header, footer, nav, article, section, aside,
    div, p, pre, code, blockquote, span, strong, em, small, a, q, s,
    ol, ul, li, table, tr, td, th, thead, tbody, tfoot,
    h1, h2, h3, h4, h5, h6, title, label, sup, sub,
}
