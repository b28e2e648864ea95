//! The traversal shared by every dialect.
//!
//! The tree is walked with an explicit work stack rather than native
//! recursion, so output depth is bounded by heap memory instead of the
//! thread's stack size. Each element pushes a `Close` step for its end tag
//! below the `Visit` step for its content.

use std::fmt::{self, Write};

use super::escape::{escape_attr, escape_comment, escape_doctype, escape_text};
use super::pretty::wrap_value;
use super::Dialect;
use crate::html::is_void_element;
use crate::tree::{Attribute, Node};

/// Indentation settings of the pretty dialect.
#[derive(Debug, Clone, Copy)]
struct Layout<'a> {
    indent: &'a str,
    newline: &'a str,
}

enum Step<'n> {
    Visit(&'n Node, usize),
    Close(&'n str, usize),
}

pub(super) struct Serializer<'a, W: Write> {
    out: &'a mut W,
    void_elements: bool,
    /// `None` for the compact dialects.
    layout: Option<Layout<'a>>,
}

impl<'a, W: Write> Serializer<'a, W> {
    pub(super) fn new(out: &'a mut W, dialect: &'a Dialect) -> Self {
        let layout = match dialect {
            Dialect::PrettyHtml { indent, newline } => Some(Layout { indent, newline }),
            Dialect::CompactHtml | Dialect::Xml => None,
        };
        Self {
            out,
            void_elements: dialect.honors_void_elements(),
            layout,
        }
    }

    pub(super) fn write_node(&mut self, root: &Node) -> fmt::Result {
        let mut stack = vec![Step::Visit(root, 0)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Visit(node, depth) => self.visit(node, depth, &mut stack)?,
                Step::Close(tag, depth) => {
                    self.start_line(depth)?;
                    self.write_close_tag(tag)?;
                    self.end_line()?;
                }
            }
        }
        Ok(())
    }

    fn visit<'n>(&mut self, node: &'n Node, depth: usize, stack: &mut Vec<Step<'n>>) -> fmt::Result {
        match node {
            Node::Comment(content) => {
                self.start_line(depth)?;
                let (open, close) = if self.layout.is_some() {
                    ("<!-- ", " -->")
                } else {
                    ("<!--", "-->")
                };
                self.out.write_str(open)?;
                self.out.write_str(&escape_comment(content))?;
                self.out.write_str(close)?;
                self.end_line()
            }
            Node::Doctype(content) => {
                self.start_line(depth)?;
                self.out.write_str("<!DOCTYPE ")?;
                self.out.write_str(&escape_doctype(content))?;
                self.out.write_char('>')?;
                self.end_line()
            }
            Node::Raw(content) => self.write_block(content, depth),
            Node::Text(content) => self.write_block(&escape_text(content), depth),
            Node::Fragment(children) => {
                stack.extend(children.iter().rev().map(|child| Step::Visit(child, depth)));
                Ok(())
            }
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                self.start_line(depth)?;
                self.write_open_tag(tag, attributes, depth)?;

                // Void elements drop their content and have no end tag.
                if self.void_elements && is_void_element(tag) {
                    return self.end_line();
                }

                if self.layout.is_some() && renders_nothing(children) {
                    self.write_close_tag(tag)?;
                    return self.end_line();
                }

                self.end_line()?;
                stack.push(Step::Close(tag, depth));
                stack.push(Step::Visit(children, depth + 1));
                Ok(())
            }
        }
    }

    /// Writes an already escaped text or raw block. Empty blocks produce no
    /// line in pretty output.
    fn write_block(&mut self, content: &str, depth: usize) -> fmt::Result {
        if content.is_empty() {
            return Ok(());
        }
        self.start_line(depth)?;
        self.out.write_str(content)?;
        self.end_line()
    }

    fn write_open_tag(&mut self, tag: &str, attributes: &[Attribute], depth: usize) -> fmt::Result {
        self.out.write_char('<')?;
        self.out.write_str(tag)?;
        for attr in attributes {
            let Some(value) = attr.value.as_deref() else {
                continue;
            };
            self.out.write_char(' ')?;
            self.out.write_str(&attr.key)?;
            // Present but empty: boolean attribute form.
            if value.is_empty() {
                continue;
            }
            self.out.write_str("=\"")?;
            self.write_attr_value(&attr.key, value, depth)?;
            self.out.write_char('"')?;
        }
        self.out.write_char('>')
    }

    fn write_attr_value(&mut self, key: &str, value: &str, depth: usize) -> fmt::Result {
        let pieces = if self.layout.is_some() {
            wrap_value(key, value)
        } else {
            None
        };
        let Some(pieces) = pieces else {
            return self.out.write_str(&escape_attr(value));
        };
        for (i, piece) in pieces.iter().enumerate() {
            if i > 0 {
                self.end_line()?;
                self.start_line(depth + 1)?;
            }
            self.out.write_str(&escape_attr(piece))?;
        }
        Ok(())
    }

    fn write_close_tag(&mut self, tag: &str) -> fmt::Result {
        self.out.write_str("</")?;
        self.out.write_str(tag)?;
        self.out.write_char('>')
    }

    fn start_line(&mut self, depth: usize) -> fmt::Result {
        if let Some(layout) = self.layout {
            for _ in 0..depth {
                self.out.write_str(layout.indent)?;
            }
        }
        Ok(())
    }

    fn end_line(&mut self) -> fmt::Result {
        if let Some(layout) = self.layout {
            self.out.write_str(layout.newline)?;
        }
        Ok(())
    }
}

/// Returns `true` if `node` writes nothing under the pretty dialect.
///
/// Unlike [`Node::is_empty`], empty comments and doctypes count as content
/// here, since their delimiters are still written.
fn renders_nothing(node: &Node) -> bool {
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        match node {
            Node::Raw(s) | Node::Text(s) => {
                if !s.is_empty() {
                    return false;
                }
            }
            Node::Comment(_) | Node::Doctype(_) | Node::Element { .. } => return false,
            Node::Fragment(children) => stack.extend(children.iter()),
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::super::render;
    use super::*;

    fn el(tag: &str, attributes: Vec<Attribute>, children: impl Into<Node>) -> Node {
        Node::element(tag, attributes, children)
    }

    // -- Compact HTML --------------------------------------------------------

    #[test]
    fn test_text_in_element() {
        let node = el("div", vec![], "a<b");
        assert_eq!(render(&node, &Dialect::CompactHtml), "<div>a&lt;b</div>");
    }

    #[test]
    fn test_void_element() {
        let node = Node::empty_element("br", vec![]);
        assert_eq!(render(&node, &Dialect::CompactHtml), "<br>");
    }

    #[test]
    fn test_boolean_attribute() {
        let node = Node::empty_element("input", vec![Attribute::boolean("checked")]);
        assert_eq!(render(&node, &Dialect::CompactHtml), "<input checked>");
    }

    #[test]
    fn test_absent_attribute_omitted() {
        let node = el("a", vec![Attribute::absent("href")], "x");
        assert_eq!(render(&node, &Dialect::CompactHtml), "<a>x</a>");
    }

    #[test]
    fn test_comment_escaped() {
        let node = Node::comment("a-->b");
        assert_eq!(render(&node, &Dialect::CompactHtml), "<!--a--&gt;b-->");
    }

    #[test]
    fn test_doctype() {
        assert_eq!(
            render(&Node::doctype("html"), &Dialect::CompactHtml),
            "<!DOCTYPE html>"
        );
        assert_eq!(
            render(&Node::doctype("x>y"), &Dialect::CompactHtml),
            "<!DOCTYPE x&gt;y>"
        );
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node = el("script", vec![], Node::raw("if (a < b && c) {}"));
        assert_eq!(
            render(&node, &Dialect::CompactHtml),
            "<script>if (a < b && c) {}</script>"
        );
    }

    #[test]
    fn test_void_element_drops_children() {
        let node = el(
            "img",
            vec![Attribute::new("src", "x.png")],
            Node::fragment([Node::text("alt text"), el("b", vec![], "bold")]),
        );
        assert_eq!(render(&node, &Dialect::CompactHtml), r#"<img src="x.png">"#);
    }

    #[test]
    fn test_duplicate_attribute_keys_kept_in_order() {
        let node = Node::empty_element(
            "div",
            vec![
                Attribute::new("class", "a"),
                Attribute::new("id", "x"),
                Attribute::new("class", "b"),
            ],
        );
        assert_eq!(
            render(&node, &Dialect::CompactHtml),
            r#"<div class="a" id="x" class="b"></div>"#
        );
    }

    #[test]
    fn test_attribute_value_escaping() {
        let node = Node::empty_element("p", vec![Attribute::new("title", r#"<"&">"#)]);
        assert_eq!(
            render(&node, &Dialect::CompactHtml),
            r#"<p title="<&quot;&&quot;>"></p>"#
        );
    }

    #[test]
    fn test_compact_never_wraps_attributes() {
        let node = Node::empty_element(
            "div",
            vec![
                Attribute::new("class", "a b c"),
                Attribute::new("style", "color: red; margin: 0"),
            ],
        );
        assert_eq!(
            render(&node, &Dialect::CompactHtml),
            r#"<div class="a b c" style="color: red; margin: 0"></div>"#
        );
    }

    #[test]
    fn test_comment_keeps_whitespace_as_given() {
        assert_eq!(
            render(&Node::comment(" note "), &Dialect::CompactHtml),
            "<!-- note -->"
        );
    }

    // -- XML -----------------------------------------------------------------

    #[test]
    fn test_xml_closes_void_elements() {
        let node = Node::empty_element("br", vec![]);
        assert_eq!(render(&node, &Dialect::Xml), "<br></br>");
    }

    #[test]
    fn test_xml_keeps_void_element_children() {
        let node = el("source", vec![Attribute::new("src", "a.ogg")], "fallback");
        assert_eq!(
            render(&node, &Dialect::Xml),
            r#"<source src="a.ogg">fallback</source>"#
        );
    }

    #[test]
    fn test_xml_uses_same_escaping() {
        let node = el(
            "note",
            vec![Attribute::new("by", r#"a "b""#), Attribute::boolean("draft")],
            Node::fragment([Node::text("1 < 2 & 3 > 2"), Node::comment("x-->y")]),
        );
        assert_eq!(
            render(&node, &Dialect::Xml),
            r#"<note by="a &quot;b&quot;" draft>1 &lt; 2 &amp; 3 > 2<!--x--&gt;y--></note>"#
        );
    }

    // -- Pretty HTML ---------------------------------------------------------

    #[test]
    fn test_pretty_nested_elements() {
        let node = el(
            "ul",
            vec![],
            Node::fragment([el("li", vec![], "one"), el("li", vec![], "two")]),
        );
        assert_eq!(
            render(&node, &Dialect::pretty()),
            "<ul>\n  <li>\n    one\n  </li>\n  <li>\n    two\n  </li>\n</ul>\n"
        );
    }

    #[test]
    fn test_pretty_empty_element_on_one_line() {
        let node = el("div", vec![Attribute::new("id", "x")], Node::fragment([]));
        assert_eq!(render(&node, &Dialect::pretty()), "<div id=\"x\"></div>\n");
        let node = el("p", vec![], Node::text(""));
        assert_eq!(render(&node, &Dialect::pretty()), "<p></p>\n");
    }

    #[test]
    fn test_pretty_keeps_empty_comment_and_doctype_content() {
        let node = el("p", vec![], Node::comment(""));
        assert_eq!(render(&node, &Dialect::CompactHtml), "<p><!----></p>");
        assert_eq!(render(&node, &Dialect::pretty()), "<p>\n  <!--  -->\n</p>\n");

        let node = el("div", vec![], Node::fragment([Node::text(""), Node::doctype("")]));
        assert_eq!(render(&node, &Dialect::pretty()), "<div>\n  <!DOCTYPE >\n</div>\n");
    }

    #[test]
    fn test_pretty_keeps_redacted_comments() {
        let node = el("p", vec![], Node::comment("secret")).redact("***");
        assert_eq!(render(&node, &Dialect::pretty()), "<p>\n  <!--  -->\n</p>\n");
    }

    #[test]
    fn test_pretty_void_element() {
        let node = el("div", vec![], Node::empty_element("hr", vec![]));
        assert_eq!(render(&node, &Dialect::pretty()), "<div>\n  <hr>\n</div>\n");
    }

    #[test]
    fn test_pretty_comment_and_doctype() {
        let node = Node::fragment([
            Node::doctype("html"),
            el("body", vec![], Node::comment("a-->b")),
        ]);
        assert_eq!(
            render(&node, &Dialect::pretty()),
            "<!DOCTYPE html>\n<body>\n  <!-- a--&gt;b -->\n</body>\n"
        );
    }

    #[test]
    fn test_pretty_fragment_does_not_indent() {
        let inner = Node::fragment([Node::text("a"), Node::fragment([Node::raw("<b>")])]);
        let node = el("p", vec![], Node::fragment([inner]));
        assert_eq!(render(&node, &Dialect::pretty()), "<p>\n  a\n  <b>\n</p>\n");
    }

    #[test]
    fn test_pretty_skips_empty_text() {
        let node = el(
            "p",
            vec![],
            Node::fragment([Node::text(""), Node::text("x"), Node::raw("")]),
        );
        assert_eq!(render(&node, &Dialect::pretty()), "<p>\n  x\n</p>\n");
    }

    #[test]
    fn test_pretty_class_wrapping() {
        let node = el(
            "div",
            vec![Attribute::new("class", "card shadow wide")],
            el("span", vec![Attribute::new("class", "label")], "hi"),
        );
        assert_eq!(
            render(&node, &Dialect::pretty()),
            "<div class=\"card\n  shadow\n  wide\">\n  <span class=\"label\">\n    hi\n  </span>\n</div>\n"
        );
    }

    #[test]
    fn test_pretty_style_wrapping_at_depth() {
        let node = el(
            "section",
            vec![],
            Node::empty_element(
                "p",
                vec![
                    Attribute::new("style", "color: red; font: \"x\""),
                    Attribute::new("title", "a b; c"),
                ],
            ),
        );
        assert_eq!(
            render(&node, &Dialect::pretty()),
            "<section>\n  <p style=\"color: red;\n    font: &quot;x&quot;\" title=\"a b; c\"></p>\n</section>\n"
        );
    }

    #[test]
    fn test_pretty_custom_indent_and_newline() {
        let node = el("ol", vec![], el("li", vec![], "x"));
        assert_eq!(
            render(&node, &Dialect::pretty_with("\t", "\r\n")),
            "<ol>\r\n\t<li>\r\n\t\tx\r\n\t</li>\r\n</ol>\r\n"
        );
    }

    #[test]
    fn test_pretty_void_element_drops_children() {
        let node = el("input", vec![Attribute::boolean("disabled")], "ignored");
        assert_eq!(render(&node, &Dialect::pretty()), "<input disabled>\n");
    }
}
