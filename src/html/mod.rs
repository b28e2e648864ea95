//! HTML element registry.
//!
//! HTML defines a small set of *void elements* that have no content and no
//! end tag. The HTML serializers consult this registry; the XML serializer
//! does not.

/// Tag names of the HTML void elements, in alphabetical order.
pub const VOID_ELEMENTS: [&str; 14] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Returns true if `tag` is an HTML void element.
///
/// The comparison is exact: tag names are emitted as given, so `BR` is not
/// treated as void.
///
/// # Examples
///
/// ```
/// use marktree::html::is_void_element;
///
/// assert!(is_void_element("br"));
/// assert!(!is_void_element("div"));
/// ```
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}
