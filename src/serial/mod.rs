//! Markup serialization.
//!
//! This module turns a [`Node`] tree into text under one of three
//! [`Dialect`]s. All dialects share one traversal; they differ in whether
//! the HTML void-element registry is consulted and whether whitespace is
//! added for readability.
//!
//! Serialization is total: every tree renders, and the only error that can
//! surface is one reported by a caller-supplied [`fmt::Write`] sink.

pub mod escape;
mod pretty;
mod serializer;

use std::fmt;

use crate::tree::Node;
use serializer::Serializer;

/// The output dialect.
///
/// # Examples
///
/// ```
/// use marktree::serial::{render, Dialect};
/// use marktree::Node;
///
/// let br = Node::empty_element("br", vec![]);
/// assert_eq!(render(&br, &Dialect::CompactHtml), "<br>");
/// assert_eq!(render(&br, &Dialect::Xml), "<br></br>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialect {
    /// HTML without added whitespace. Void elements have no closing tag.
    #[default]
    CompactHtml,
    /// Indented HTML. Every tag, comment, doctype and text block goes on its
    /// own line.
    PrettyHtml {
        /// The string written once per nesting level. Defaults to two spaces.
        indent: String,
        /// The line terminator. Defaults to `"\n"`.
        newline: String,
    },
    /// XML without added whitespace. Every element gets a closing tag.
    Xml,
}

impl Dialect {
    /// Returns the pretty HTML dialect with two-space indentation and `\n`
    /// line endings.
    #[must_use]
    pub fn pretty() -> Self {
        Self::pretty_with("  ", "\n")
    }

    /// Returns the pretty HTML dialect with the given indent unit and line
    /// terminator.
    #[must_use]
    pub fn pretty_with(indent: impl Into<String>, newline: impl Into<String>) -> Self {
        Self::PrettyHtml {
            indent: indent.into(),
            newline: newline.into(),
        }
    }

    /// Returns `true` if void elements are rendered without content or a
    /// closing tag.
    #[must_use]
    pub fn honors_void_elements(&self) -> bool {
        !matches!(self, Self::Xml)
    }

    /// Returns `true` if the dialect adds indentation and line breaks.
    #[must_use]
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::PrettyHtml { .. })
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompactHtml => write!(f, "compact-html"),
            Self::PrettyHtml { .. } => write!(f, "pretty-html"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

/// Renders a node to a string.
///
/// # Examples
///
/// ```
/// use marktree::serial::{render, Dialect};
/// use marktree::Node;
///
/// let div = Node::element("div", vec![], "a<b");
/// assert_eq!(render(&div, &Dialect::CompactHtml), "<div>a&lt;b</div>");
/// ```
#[must_use]
pub fn render(node: &Node, dialect: &Dialect) -> String {
    render_all(std::slice::from_ref(node), dialect)
}

/// Renders a sequence of nodes to a string, concatenating their output
/// without a separator.
#[must_use]
pub fn render_all(nodes: &[Node], dialect: &Dialect) -> String {
    let mut out = String::new();
    for node in nodes {
        // Writing into a String cannot fail.
        let _ = render_to(&mut out, node, dialect);
    }
    tracing::debug!(
        %dialect,
        nodes = nodes.len(),
        bytes = out.len(),
        "rendered document"
    );
    out
}

/// Renders a node into an existing sink.
///
/// # Errors
///
/// Returns an error only if the sink itself fails.
pub fn render_to<W: fmt::Write>(out: &mut W, node: &Node, dialect: &Dialect) -> fmt::Result {
    tracing::trace!(%dialect, "rendering node");
    Serializer::new(out, dialect).write_node(node)
}

/// Formats the node as compact HTML.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_to(f, self, &Dialect::CompactHtml)
    }
}
