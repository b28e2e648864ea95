//! Escaping rules, one per syntactic position.
//!
//! Each rule is a total string transform. The `escape_*` functions borrow
//! the input when nothing needs replacing.
//!
//! | Position        | Replaced                         |
//! |-----------------|----------------------------------|
//! | text            | `&` → `&amp;`, `<` → `&lt;`      |
//! | attribute value | `"` → `&quot;`                   |
//! | comment         | `-->` → `--&gt;`                 |
//! | doctype         | `>` → `&gt;`                     |
//!
//! `>` is deliberately left alone in text, and attribute values only have
//! their delimiter escaped. Callers that put untrusted data into attribute
//! values are responsible for what they put there.

use std::borrow::Cow;

/// Escapes character data.
///
/// `&` is replaced before `<` so the `&` of a freshly written `&lt;` is
/// never escaped again. Applying this twice is not idempotent: `&amp;`
/// becomes `&amp;amp;`.
///
/// # Examples
///
/// ```
/// use marktree::serial::escape::escape_text;
///
/// assert_eq!(escape_text("a<b && c>d"), "a&lt;b &amp;&amp; c>d");
/// ```
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escapes an attribute value for use inside double quotes.
#[must_use]
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if value.contains('"') {
        Cow::Owned(value.replace('"', "&quot;"))
    } else {
        Cow::Borrowed(value)
    }
}

/// Escapes comment content so it cannot terminate the comment early.
#[must_use]
pub fn escape_comment(content: &str) -> Cow<'_, str> {
    if content.contains("-->") {
        Cow::Owned(content.replace("-->", "--&gt;"))
    } else {
        Cow::Borrowed(content)
    }
}

/// Escapes the text of a doctype declaration.
#[must_use]
pub fn escape_doctype(content: &str) -> Cow<'_, str> {
    if content.contains('>') {
        Cow::Owned(content.replace('>', "&gt;"))
    } else {
        Cow::Borrowed(content)
    }
}
