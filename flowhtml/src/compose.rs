//! The node-combination algebra.
//!
//! Both operators are total: a pairing with no merge rule falls back to
//! returning the left operand unchanged rather than failing, which keeps
//! composition predictable at the cost of silently discarding the right
//! operand. Combining through a [`Node::Fragment`] is one such pairing and is
//! left that way on purpose.

use std::ops::Add;

use futures::{future, stream, FutureExt, StreamExt};

use crate::{Attribute, Node};

impl Add<Node> for Node {
    type Output = Node;

    /// Combine two nodes into one. First match wins:
    ///
    /// - `Element + any` appends the right node to the element's children.
    /// - `Text + Text` with the same `encoded` flag concatenates contents.
    /// - `Comment + Comment` concatenates contents.
    /// - `FragmentStream + FragmentStream` replays left then right.
    /// - `FragmentStream + any` replays left then yields the right node once.
    /// - `Deferred + Deferred` defers resolving left, then right, combining
    ///   the results with this operator.
    /// - `Deferred + any` defers resolving left and combining with right.
    /// - Any other pairing returns the left operand unchanged.
    fn add(self, rhs: Node) -> Node {
        match (self, rhs) {
            (
                Node::Element {
                    tag,
                    attributes,
                    mut children,
                },
                rhs,
            ) => {
                children.push(rhs);
                Node::Element {
                    tag,
                    attributes,
                    children,
                }
            }
            (
                Node::Text {
                    content: left,
                    encoded: left_encoded,
                },
                Node::Text {
                    content: right,
                    encoded: right_encoded,
                },
            ) if left_encoded == right_encoded => Node::Text {
                content: left + &right,
                encoded: left_encoded,
            },
            (Node::Comment { content: left }, Node::Comment { content: right }) => Node::Comment {
                content: left + &right,
            },
            (Node::FragmentStream { nodes: left }, Node::FragmentStream { nodes: right }) => {
                Node::FragmentStream {
                    nodes: left.chain(right).boxed(),
                }
            }
            (Node::FragmentStream { nodes: left }, rhs) => Node::FragmentStream {
                nodes: left.chain(stream::once(future::ready(rhs))).boxed(),
            },
            (Node::Deferred { resolve: left }, Node::Deferred { resolve: right }) => {
                Node::Deferred {
                    resolve: Box::new(move || async move { left().await + right().await }.boxed()),
                }
            }
            (Node::Deferred { resolve: left }, rhs) => Node::Deferred {
                resolve: Box::new(move || async move { left().await + rhs }.boxed()),
            },
            (left, _) => left,
        }
    }
}

impl Add<Attribute> for Node {
    type Output = Node;

    /// Attach an attribute to a node.
    ///
    /// Elements get the attribute appended to their attribute list. A deferred
    /// node wraps the attachment so it applies once resolution produces an
    /// element. Attributes are meaningless on every other variant, which is
    /// returned unchanged.
    fn add(self, attribute: Attribute) -> Node {
        match self {
            Node::Element {
                tag,
                mut attributes,
                children,
            } => {
                attributes.push(attribute);
                Node::Element {
                    tag,
                    attributes,
                    children,
                }
            }
            Node::Deferred { resolve } => Node::Deferred {
                resolve: Box::new(move || {
                    async move {
                        match resolve().await {
                            Node::Element {
                                tag,
                                mut attributes,
                                children,
                            } => {
                                attributes.push(attribute);
                                Node::Element {
                                    tag,
                                    attributes,
                                    children,
                                }
                            }
                            other => other,
                        }
                    }
                    .boxed()
                }),
            },
            other => other,
        }
    }
}

impl Node {
    /// Attach an attribute to this node; sugar for `self + attribute.into()`.
    ///
    /// ```
    /// use flowhtml::builder::el;
    ///
    /// let node = el("div", []).with_attr(("id", "main")).with_attr("hidden");
    /// assert_eq!(node.attrs().unwrap().len(), 2);
    /// ```
    pub fn with_attr(self, attribute: impl Into<Attribute>) -> Node {
        self + attribute.into()
    }
}
