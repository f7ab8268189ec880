//! One-line-per-node dump of a parsed tree.
//!
//! Depth is shown as indentation. Elements print as `<name>`, text runs as a
//! quoted, whitespace-collapsed and possibly truncated label. This is for
//! inspection only; the output is not markup.

use std::fmt::Write;

use crate::tree::{Document, NodeKind};

/// Configuration options for the outline
#[derive(Debug, Clone)]
pub struct OutlineConfig {
    /// Number of spaces per nesting level
    pub indent_spaces: usize,
    /// Text labels longer than this many characters are cut and end in `...`
    pub max_text_chars: usize,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            indent_spaces: 2,
            max_text_chars: 40,
        }
    }
}

pub fn to_outline(doc: &Document, config: &OutlineConfig) -> String {
    let mut out = String::new();
    for (_, depth, node) in doc.descendants() {
        let indent = " ".repeat(depth * config.indent_spaces);
        let _ = match node.kind() {
            NodeKind::Document => writeln!(out, "{indent}#document"),
            NodeKind::Element { name } => writeln!(out, "{indent}<{name}>"),
            NodeKind::Text { value } => {
                writeln!(out, "{indent}\"{}\"", text_label(value, config.max_text_chars))
            }
        };
    }
    out
}

fn text_label(value: &str, max_chars: usize) -> String {
    let collapsed = value.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() > max_chars {
        let mut truncated = collapsed.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        collapsed
    }
}
