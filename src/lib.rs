//! # marktree
//!
//! An immutable markup document tree and a deterministic serializer for it.
//! One tree renders as compact HTML, indented HTML, or XML; the dialects
//! differ only in whitespace and in whether HTML void elements (`<br>`,
//! `<img>`, ...) get a closing tag.
//!
//! ## Quick Start
//!
//! ```
//! use marktree::serial::{render, Dialect};
//! use marktree::{Attribute, Node};
//!
//! let page = Node::fragment([
//!     Node::doctype("html"),
//!     Node::element(
//!         "p",
//!         vec![Attribute::new("class", "lead")],
//!         Node::fragment([Node::text("1 < 2"), Node::empty_element("br", vec![])]),
//!     ),
//! ]);
//! assert_eq!(
//!     render(&page, &Dialect::CompactHtml),
//!     "<!DOCTYPE html><p class=\"lead\">1 &lt; 2<br></p>"
//! );
//! assert_eq!(
//!     render(&page, &Dialect::Xml),
//!     "<!DOCTYPE html><p class=\"lead\">1 &lt; 2<br></br></p>"
//! );
//! ```
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for the tree types and the
//!   JSON document format in [`tree::json`].
//! - `cli`: the `marktree` command-line renderer. Install it with
//!   `cargo install marktree --features cli`.

#[cfg(feature = "serde")]
pub mod error;
pub mod html;
pub mod serial;
pub mod tree;

// Re-export primary types at the crate root for convenience.
pub use serial::{render, render_all, Dialect};
pub use tree::{Attribute, Node};
