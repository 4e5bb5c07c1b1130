use std::fmt;

use futures::future::BoxFuture;
use futures::stream::BoxStream;

use crate::Attribute;

/// A lazy, single-pass sequence of nodes.
///
/// The sequence may suspend between items (for example when nodes arrive over
/// time from another task) and is consumed at most once per render call.
pub type NodeStream = BoxStream<'static, Node>;

/// A suspendable computation producing a node.
///
/// The thunk is invoked only when a renderer visits the owning [`Node::Deferred`],
/// and its result is never cached. Cancelling a render before the thunk runs
/// means it never runs at all.
pub type DeferredNode = Box<dyn FnOnce() -> BoxFuture<'static, Node> + Send>;

/// A node in an HTML document tree.
///
/// Nodes are immutable once constructed: the combination operators in this
/// crate always build new nodes rather than mutating in place, and renderers
/// consume the tree by value. Streaming and deferred payloads are one-shot,
/// so `Node` is deliberately not `Clone`.
pub enum Node {
    /// A tag element with attributes and ordered children.
    Element {
        /// The name of the tag. Not validated against any HTML grammar.
        tag: String,
        /// The attributes of the tag, in authoring order.
        attributes: Vec<Attribute>,
        /// The children of the tag, in rendering order.
        children: Vec<Node>,
    },
    /// A text node.
    Text {
        /// The text content.
        content: String,
        /// When `true`, the content is HTML-escaped at render time. When
        /// `false`, it is emitted verbatim and safety is the caller's
        /// responsibility.
        encoded: bool,
    },
    /// A comment node. The content is always escaped at render time.
    Comment {
        /// The comment content.
        content: String,
    },
    /// A tagless grouping of nodes, fully materialized at construction time.
    Fragment {
        /// The grouped nodes, in rendering order.
        nodes: Vec<Node>,
    },
    /// A tagless grouping whose member nodes arrive via a lazy sequence.
    FragmentStream {
        /// The lazy sequence of member nodes. Single consumer, single pass.
        nodes: NodeStream,
    },
    /// A node produced by a suspendable computation, evaluated at render time.
    Deferred {
        /// The computation producing the node.
        resolve: DeferredNode,
    },
}

impl Node {
    /// Get the tag name of the node if it is an [`Element`].
    ///
    /// [`Element`]: Node::Element
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Get the attributes of the node if it is an [`Element`].
    ///
    /// [`Element`]: Node::Element
    pub fn attrs(&self) -> Option<&[Attribute]> {
        match self {
            Node::Element { attributes, .. } => Some(attributes.as_slice()),
            _ => None,
        }
    }

    /// Returns `true` if the node is an [`Element`].
    ///
    /// [`Element`]: Node::Element
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    /// Returns `true` if the node is a [`Text`].
    ///
    /// [`Text`]: Node::Text
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Returns `true` if the node is a [`Fragment`].
    ///
    /// [`Fragment`]: Node::Fragment
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment { .. })
    }

    /// Returns `true` if the node is a [`Deferred`].
    ///
    /// [`Deferred`]: Node::Deferred
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element {
                tag,
                attributes,
                children,
            } => f
                .debug_struct("Element")
                .field("tag", tag)
                .field("attributes", attributes)
                .field("children", children)
                .finish(),
            Node::Text { content, encoded } => f
                .debug_struct("Text")
                .field("content", content)
                .field("encoded", encoded)
                .finish(),
            Node::Comment { content } => {
                f.debug_struct("Comment").field("content", content).finish()
            }
            Node::Fragment { nodes } => f.debug_struct("Fragment").field("nodes", nodes).finish(),
            Node::FragmentStream { .. } => f.write_str("FragmentStream { .. }"),
            Node::Deferred { .. } => f.write_str("Deferred { .. }"),
        }
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text {
            content: s.to_string(),
            encoded: true,
        }
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text {
            content: s,
            encoded: true,
        }
    }
}
