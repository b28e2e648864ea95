//! Line-wrapping of multi-valued attributes in pretty output.
//!
//! `class` values break between whitespace-separated class names and
//! `style` values break after each `;`-terminated declaration. Other
//! attributes are never wrapped. A value that splits into a single token
//! is written unchanged.

/// How an attribute value is split across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WrapRule {
    ClassList,
    Declarations,
}

fn wrap_rule(key: &str) -> Option<WrapRule> {
    match key {
        "class" => Some(WrapRule::ClassList),
        "style" => Some(WrapRule::Declarations),
        _ => None,
    }
}

/// Splits an attribute value into the pieces that go on separate lines.
///
/// Returns `None` when the value stays on one line, either because the key
/// is not wrapped or because there is only one piece. Pieces borrow from
/// `value`; only the whitespace between them is dropped.
pub(super) fn wrap_value<'a>(key: &str, value: &'a str) -> Option<Vec<&'a str>> {
    let pieces: Vec<&str> = match wrap_rule(key)? {
        WrapRule::ClassList => value.split_whitespace().collect(),
        WrapRule::Declarations => value
            .split_inclusive(';')
            .map(str::trim)
            .filter(|decl| !decl.is_empty())
            .collect(),
    };
    (pieces.len() > 1).then_some(pieces)
}
