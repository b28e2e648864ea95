//! JSON form of a document tree.
//!
//! A node is written as `{"kind": ..., "value": ...}` with snake_case kind
//! names. Element values are objects with `tag`, `attributes` and
//! `children` fields; attributes are `{"key": ..., "value": ...}` objects
//! where a missing or `null` value means the attribute is absent.
//!
//! ```json
//! [
//!   {"kind": "doctype", "value": "html"},
//!   {"kind": "element", "value": {
//!     "tag": "p",
//!     "attributes": [{"key": "class", "value": "lead"}],
//!     "children": {"kind": "text", "value": "Hello"}
//!   }}
//! ]
//! ```
//!
//! A document is either a single node or an array of nodes.
//!
//! Nesting depth is not limited: deeply nested documents are decoded on a
//! stack that grows on the heap as needed.

use std::io::Read;

use serde::Deserialize;

use super::Node;
use crate::error::LoadError;

/// Decodes a tree document from a JSON string.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if the input is not a valid tree document.
pub fn from_str(input: &str) -> Result<Vec<Node>, LoadError> {
    from_slice(input.as_bytes())
}

/// Decodes a tree document from a reader.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if reading fails and [`LoadError::Json`] if
/// the input is not a valid tree document.
pub fn from_reader(mut reader: impl Read) -> Result<Vec<Node>, LoadError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input)?;
    from_slice(&input)
}

/// Encodes a sequence of nodes as a JSON array.
///
/// # Errors
///
/// Returns [`LoadError::Json`] if encoding fails, which does not happen for
/// trees built from this crate's types.
pub fn to_string(nodes: &[Node]) -> Result<String, LoadError> {
    Ok(serde_json::to_string(nodes)?)
}

/// Decodes either document shape, chosen by the first significant byte so
/// that errors inside a node are reported as serde_json found them.
fn from_slice(input: &[u8]) -> Result<Vec<Node>, LoadError> {
    let is_array = input
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|&b| b == b'[');

    let mut de = serde_json::Deserializer::from_slice(input);
    de.disable_recursion_limit();
    let nodes = {
        let de = serde_stacker::Deserializer::new(&mut de);
        if is_array {
            Vec::<Node>::deserialize(de)?
        } else {
            vec![Node::deserialize(de)?]
        }
    };
    de.end()?;
    Ok(nodes)
}
