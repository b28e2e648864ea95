#![no_main]
use libfuzzer_sys::fuzz_target;
use marktree::serial::{render, Dialect};
use marktree::{Attribute, Node};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Text never yields a tag opener, comments never close early.
        let text = render(&Node::text(s), &Dialect::CompactHtml);
        assert!(!text.contains('<'));

        let comment = render(&Node::comment(s), &Dialect::CompactHtml);
        let body = &comment["<!--".len()..];
        assert_eq!(body.find("-->"), Some(body.len() - 3));

        // Build a small tree out of the input and render it everywhere.
        let tree = Node::element(
            "div",
            vec![Attribute::new("class", s), Attribute::new("style", s)],
            Node::fragment([
                Node::text(s),
                Node::element("br", vec![], Node::raw(s)),
                Node::doctype(s),
            ]),
        );
        for dialect in [Dialect::CompactHtml, Dialect::pretty(), Dialect::Xml] {
            let _ = render(&tree, &dialect);
        }
    }
});
