#![deny(missing_docs)]
//! A crate for building HTML node trees at runtime and rendering them either
//! eagerly to a single string or lazily as a stream of chunks.
//!
//! Trees are assembled from the constructors in [builder] and combined with
//! the `+` operators (node + node, node + attribute). Two renderers consume a
//! tree by value: [render] walks it iteratively with an explicit work stack
//! and supports cancellation through a [CancellationToken], while
//! [render_stream] yields output chunks as early as structurally possible.
//!
//! Nodes may suspend: a [Node::FragmentStream] pulls its members from a lazy,
//! possibly time-delayed stream, and a [Node::Deferred] runs a
//! future-producing closure only when a renderer reaches it. Output order
//! always matches document order regardless of when nodes arrive.
//!
//! # Example
//!
//! ```
//! use flowhtml::builder::{el, text};
//!
//! let root = el("ul", (0..2).map(|i| el("li", [text(format!("item {i}"))])));
//! let html = futures::executor::block_on(flowhtml::render(root)).unwrap();
//! assert_eq!(html, "<ul><li>item 0</li><li>item 1</li></ul>");
//! ```

pub mod builder;

mod attribute;
pub use attribute::Attribute;

mod node;
pub use node::{DeferredNode, Node, NodeStream};

mod compose;

mod render;
pub use render::{render, render_cancellable, RenderError};

mod stream;
pub use stream::render_stream;

// Re-export the cancellation primitive for convenience.
pub use tokio_util::sync::CancellationToken;
