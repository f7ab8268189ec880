//! tagtree: a minimal markup parser producing a typed document tree
//!
//! This crate provides functionality to:
//! - Parse markup into a tree of document, element and text nodes
//! - Walk the tree through parent and child links
//! - Bound nesting depth and input size
//! - Print a tree outline for inspection
//!
//! # Examples
//! ```
//! use tagtree::{parse_str, Result};
//!
//! fn example() -> Result<()> {
//!     let doc = parse_str("<p>hello</p>")?;
//!     let p = doc.document_element().unwrap_or(doc.root());
//!     assert_eq!(doc.text_content(p), "hello");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use tracing::{debug, info, instrument};

pub mod error;
pub mod intern;
pub mod outline;
pub mod parser;
pub mod test_utils;
pub mod tree;

// Re-exports
pub use error::{IOError, ParseError, ParseErrorKind, Result, SecurityError, SyntaxError};
pub use intern::{InternedName, NameInterner};
pub use outline::{to_outline, OutlineConfig};
pub use parser::{
    MarkupParser, ParserConfig, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, MAX_DEPTH_LIMIT,
};
pub use tree::{Document, Node, NodeId, NodeKind};

/// Parse markup with the default limits
pub fn parse_str(input: &str) -> Result<Document> {
    MarkupParser::new(input)?.parse_document()
}

/// Parse markup with custom limits
pub fn parse_str_with_config(input: &str, config: ParserConfig) -> Result<Document> {
    MarkupParser::with_config(input, config)?.parse_document()
}

/// Read a file and parse its contents
#[instrument(skip(config))]
pub fn parse_file(path: &str, config: ParserConfig) -> Result<Document> {
    debug!("Starting to parse file: {}", path);

    let content = std::fs::read_to_string(path).map_err(|e| {
        let kind = match e.kind() {
            std::io::ErrorKind::NotFound => IOError::FileNotFound(path.to_string()),
            _ => IOError::ReadError(e.to_string()),
        };
        ParseError::new(ParseErrorKind::IO(kind)).with_source(e)
    })?;

    info!("File read successfully, {} bytes", content.len());

    let result = parse_str_with_config(&content, config)
        .map_err(|e| e.with_context(format!("while parsing {path}")));

    debug!("Parsing completed");
    result
}
