//! Node type definitions.
//!
//! The `Node` enum is the whole document model: a closed set of six node
//! kinds, one of which (`Element`) owns a child node and one of which
//! (`Fragment`) owns a sequence of siblings. Ownership is strictly
//! hierarchical, so a tree is acyclic by construction.

use super::Attribute;

/// A node of a markup document tree.
///
/// Trees are built bottom-up and never mutated afterwards. Transformations
/// such as [`Node::map_text`] produce a new tree.
///
/// Dropping a tree takes it apart with a heap-allocated stack, so trees of
/// any depth can be dropped. The derived `Clone`, `PartialEq` and `Debug`
/// impls and the rebuilding transformations still recurse once per nesting
/// level and can overflow the thread's stack on trees hundreds of thousands
/// of levels deep. Because `Node` implements `Drop`, its fields cannot be
/// moved out by destructuring; use [`std::mem::take`] on a mutable
/// reference instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "value", rename_all = "snake_case")
)]
pub enum Node {
    /// A comment, e.g. `<!--note-->`. Holds the text between the delimiters.
    Comment(String),

    /// A document type declaration, e.g. `<!DOCTYPE html>`. Holds the text
    /// after `<!DOCTYPE `.
    Doctype(String),

    /// An element with its attributes and content.
    Element {
        /// The tag name, emitted as given.
        tag: String,
        /// Attributes in emission order. Keys may repeat.
        #[cfg_attr(feature = "serde", serde(default))]
        attributes: Vec<Attribute>,
        /// The element content. Usually a [`Node::Fragment`].
        #[cfg_attr(feature = "serde", serde(default = "Node::boxed_empty_fragment"))]
        children: Box<Node>,
    },

    /// A sequence of sibling nodes rendered without any wrapping tag.
    Fragment(Vec<Node>),

    /// Text emitted verbatim, without escaping.
    ///
    /// This is the escape hatch for content that has already been
    /// sanitized. Nothing stops a `Raw` node from breaking the document.
    Raw(String),

    /// Character data, escaped on output.
    Text(String),
}

impl Drop for Node {
    fn drop(&mut self) {
        let mut pending = match self {
            Node::Element { children, .. } if children.has_children() => {
                vec![std::mem::take(&mut **children)]
            }
            Node::Fragment(children) if children.iter().any(Node::has_children) => {
                std::mem::take(children)
            }
            _ => return,
        };
        // Each popped node has its own children detached before it is
        // dropped, so nested drops never go more than one level deep.
        while let Some(mut node) = pending.pop() {
            match &mut node {
                Node::Element { children, .. } => pending.push(std::mem::take(&mut **children)),
                Node::Fragment(children) => pending.append(children),
                _ => {}
            }
        }
    }
}

impl Node {
    fn has_children(&self) -> bool {
        match self {
            Node::Element { .. } => true,
            Node::Fragment(children) => !children.is_empty(),
            _ => false,
        }
    }

    #[cfg(feature = "serde")]
    fn boxed_empty_fragment() -> Box<Node> {
        Box::new(Node::Fragment(Vec::new()))
    }
}
