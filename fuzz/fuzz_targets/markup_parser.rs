#![no_main]
use libfuzzer_sys::fuzz_target;
use tagtree::{MarkupParser, Node};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut parser) = MarkupParser::new(s) {
            if let Ok(doc) = parser.parse_document() {
                // Every child must point back at the node that lists it
                for (id, _, node) in doc.descendants() {
                    for &child in node.children() {
                        assert_eq!(doc.get(child).and_then(Node::parent), Some(id));
                    }
                }
            }
        }
    }
});
