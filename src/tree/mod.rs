//! Immutable markup document tree.
//!
//! A document is a plain owned value: a [`Node`] enum whose `Element`
//! variant boxes its content and whose `Fragment` variant holds a `Vec` of
//! siblings. There is no arena, no parent links and no interior mutability.
//! Trees are built bottom-up by collaborator code, handed to the
//! serializer, and dropped.
//!
//! # Architecture
//!
//! Constructors here are purely structural. Nothing is validated when a
//! node is built: an `<img>` element with children is a perfectly good
//! value, and it is the serializer that decides to drop those children
//! under HTML dialects.
//!
//! Read-only walks (`is_empty`, `node_count`, `flatten`) use an explicit
//! work stack so that very deep trees cannot overflow the call stack.
//! Rebuilding walks (`map_text`, `redact`) recurse, since they construct
//! the result bottom-up anyway.

#[cfg(feature = "serde")]
pub mod json;
mod node;

pub use node::Node;

/// An attribute on an element.
///
/// The value has three states that render differently:
///
/// - `None` (absent): the attribute is omitted entirely.
/// - `Some("")` (present but empty): the key is emitted alone, as in
///   `<input checked>`.
/// - `Some(v)`: the key is emitted with `="v"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// The attribute name, emitted as given.
    pub key: String,
    /// The attribute value, or `None` when the attribute is absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<String>,
}

impl Attribute {
    /// Creates an attribute with a present value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a boolean attribute (present, empty value).
    #[must_use]
    pub fn boolean(key: impl Into<String>) -> Self {
        Self::new(key, String::new())
    }

    /// Creates an absent attribute, which renders as nothing.
    #[must_use]
    pub fn absent(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    /// Creates an attribute that is present only when `value` is `Some`.
    #[must_use]
    pub fn optional(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }

    /// Returns `true` if this attribute produces any output.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.value.is_some()
    }
}

impl Node {
    /// Creates a text node.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Creates a raw (unescaped) node.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Node::Raw(content.into())
    }

    /// Creates a comment node.
    #[must_use]
    pub fn comment(content: impl Into<String>) -> Self {
        Node::Comment(content.into())
    }

    /// Creates a doctype node. `Node::doctype("html")` renders as
    /// `<!DOCTYPE html>`.
    #[must_use]
    pub fn doctype(content: impl Into<String>) -> Self {
        Node::Doctype(content.into())
    }

    /// Creates an element.
    ///
    /// # Examples
    ///
    /// ```
    /// use marktree::{Attribute, Node};
    ///
    /// let link = Node::element("a", vec![Attribute::new("href", "/")], "home");
    /// assert_eq!(link.to_string(), "<a href=\"/\">home</a>");
    /// ```
    #[must_use]
    pub fn element(
        tag: impl Into<String>,
        attributes: Vec<Attribute>,
        children: impl Into<Node>,
    ) -> Self {
        Node::Element {
            tag: tag.into(),
            attributes,
            children: Box::new(children.into()),
        }
    }

    /// Creates an element whose content is an empty fragment.
    #[must_use]
    pub fn empty_element(tag: impl Into<String>, attributes: Vec<Attribute>) -> Self {
        Self::element(tag, attributes, Node::Fragment(Vec::new()))
    }

    /// Creates a fragment from a sequence of nodes.
    #[must_use]
    pub fn fragment(children: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(children.into_iter().collect())
    }

    /// Returns `true` if rendering this node would produce no content.
    ///
    /// Leaf nodes are empty when their string is empty. An element is never
    /// empty, since its tags are always written. A fragment is empty when
    /// every child is empty, so `Fragment([])` is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Comment(s) | Node::Doctype(s) | Node::Raw(s) | Node::Text(s) => {
                    if !s.is_empty() {
                        return false;
                    }
                }
                Node::Element { .. } => return false,
                Node::Fragment(children) => stack.extend(children.iter()),
            }
        }
        true
    }

    /// Returns the number of nodes in this tree, fragments included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            match node {
                Node::Element { children, .. } => stack.push(children),
                Node::Fragment(children) => stack.extend(children.iter()),
                _ => {}
            }
        }
        count
    }

    /// Returns the sibling sequence this node stands for, with every
    /// fragment expanded in place.
    ///
    /// A non-fragment node flattens to a one-item vector holding a clone of
    /// itself. Element content is not flattened.
    #[must_use]
    pub fn flatten(&self) -> Vec<Node> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                Node::Fragment(children) => stack.extend(children.iter().rev()),
                other => out.push(other.clone()),
            }
        }
        out
    }

    /// Returns a copy of this tree with every `Text` payload passed through
    /// `f`. Structure, attributes and all other node kinds are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use marktree::Node;
    ///
    /// let doc = Node::element("p", vec![], "hello");
    /// let shouted = doc.map_text(|s| s.to_uppercase());
    /// assert_eq!(shouted.to_string(), "<p>HELLO</p>");
    /// ```
    #[must_use]
    pub fn map_text<F>(&self, f: F) -> Node
    where
        F: Fn(&str) -> String,
    {
        self.rebuild(&|node| match node {
            Node::Text(s) => Some(Node::Text(f(s))),
            _ => None,
        })
    }

    /// Returns a copy of this tree with its readable content removed.
    ///
    /// Every non-empty `Text` node is replaced by `placeholder` and every
    /// comment loses its content. `Raw`, `Doctype` and attribute values are
    /// kept as they are.
    #[must_use]
    pub fn redact(&self, placeholder: &str) -> Node {
        self.rebuild(&|node| match node {
            Node::Text(s) if !s.is_empty() => Some(Node::Text(placeholder.to_string())),
            Node::Comment(_) => Some(Node::Comment(String::new())),
            _ => None,
        })
    }

    /// Rebuilds the tree bottom-up. `leaf` may replace any non-container
    /// node; returning `None` keeps a clone of the original.
    fn rebuild(&self, leaf: &dyn Fn(&Node) -> Option<Node>) -> Node {
        match self {
            Node::Element {
                tag,
                attributes,
                children,
            } => Node::Element {
                tag: tag.clone(),
                attributes: attributes.clone(),
                children: Box::new(children.rebuild(leaf)),
            },
            Node::Fragment(children) => {
                Node::Fragment(children.iter().map(|c| c.rebuild(leaf)).collect())
            }
            other => leaf(other).unwrap_or_else(|| other.clone()),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::Fragment(Vec::new())
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(children: Vec<Node>) -> Self {
        Node::Fragment(children)
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Fragment(iter.into_iter().collect())
    }
}
