//! Builds a small page and prints it in every dialect.
//!
//! Run with: `cargo run --example render_page`

use marktree::serial::{render, Dialect};
use marktree::{Attribute, Node};

fn main() {
    let page = Node::fragment([
        Node::doctype("html"),
        Node::element(
            "html",
            vec![Attribute::new("lang", "en")],
            Node::fragment([
                Node::element(
                    "head",
                    vec![],
                    Node::fragment([
                        Node::empty_element("meta", vec![Attribute::new("charset", "utf-8")]),
                        Node::element("title", vec![], "Fish & Chips"),
                    ]),
                ),
                Node::element(
                    "body",
                    vec![Attribute::new("class", "menu dark")],
                    Node::fragment([
                        Node::comment("generated -- do not edit"),
                        Node::element(
                            "p",
                            vec![Attribute::new("style", "color: teal; margin: 0")],
                            "Prices < 10 today",
                        ),
                        Node::empty_element(
                            "input",
                            vec![
                                Attribute::new("type", "checkbox"),
                                Attribute::boolean("checked"),
                                Attribute::absent("disabled"),
                            ],
                        ),
                    ]),
                ),
            ]),
        ),
    ]);

    println!("=== Compact HTML ===");
    println!("{}", render(&page, &Dialect::CompactHtml));

    println!("\n=== Pretty HTML ===");
    print!("{}", render(&page, &Dialect::pretty()));

    println!("\n=== XML ===");
    println!("{}", render(&page, &Dialect::Xml));

    println!("\n=== Redacted ===");
    print!("{}", render(&page.redact("[redacted]"), &Dialect::pretty()));
}
