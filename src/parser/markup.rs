//! Markup parser implementation.
//!
//! A recursive descent parser with one character of lookahead:
//! - `<` starts an element, anything else starts a text run
//! - an element's children end at the first `</`
//! - the closing tag must repeat the opening tag's text exactly
//!
//! Attributes, entities and self-closing tags are not recognised. The text
//! between `<` and `>` is the element name, verbatim.

use std::sync::Arc;

use tracing::{debug, instrument, trace};

use super::config::{ParserConfig, ParsingContext};
use super::cursor::{Cursor, Pos};
use crate::error::{ParseError, Result, SyntaxError};
use crate::intern::NameInterner;
use crate::tree::{Document, NodeId, NodeKind};

/// Characters of an unclosed tag kept for the error message
const FRAGMENT_CHARS: usize = 32;

/// Parser for markup documents
pub struct MarkupParser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
    context: ParsingContext,
    interner: Arc<NameInterner>,
    document: Document,
}

impl<'a> MarkupParser<'a> {
    /// Creates a parser with the default limits
    pub fn new(input: &'a str) -> Result<Self> {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a parser with custom limits. Oversized input is rejected here,
    /// before any parsing.
    pub fn with_config(input: &'a str, config: ParserConfig) -> Result<Self> {
        config.validate_size(input)?;
        Ok(Self {
            cursor: Cursor::new(input),
            config,
            context: ParsingContext::new(),
            interner: Arc::new(NameInterner::new()),
            document: Document::new(),
        })
    }

    /// Store element names in a shared interner instead of a private one
    pub fn with_interner(mut self, interner: Arc<NameInterner>) -> Self {
        self.interner = interner;
        self
    }

    /// Unconsumed input. After a successful parse this is empty unless the
    /// document ended on a stray closing tag.
    pub fn remaining(&self) -> &'a str {
        self.cursor.remaining()
    }

    /// Parses the whole input into a document
    /// # Returns
    /// - Ok(Document) whose root holds the top-level nodes
    /// - Err on the first unclosed or unmatched tag, or on a limit violation
    #[instrument(level = "debug", skip_all, fields(len = self.cursor.remaining().len()))]
    pub fn parse_document(&mut self) -> Result<Document> {
        self.parse_nodes(NodeId::ROOT)?;

        if !self.cursor.is_eof() {
            debug!(
                "Stopped at stray closing tag, {} bytes left",
                self.cursor.remaining().len()
            );
        }

        let document = std::mem::take(&mut self.document);
        debug!("Parsed {} nodes", document.len());
        Ok(document)
    }

    fn parse_nodes(&mut self, parent: NodeId) -> Result<()> {
        while !self.cursor.is_eof() && !self.cursor.starts_with("</") {
            if let Some(node) = self.parse_node()? {
                self.document.append_child(parent, node);
            }
        }
        Ok(())
    }

    /// `None` when the node was a whitespace-only text run
    fn parse_node(&mut self) -> Result<Option<NodeId>> {
        if self.cursor.peek() == Some('<') {
            self.parse_element_node().map(Some)
        } else {
            Ok(self.parse_text_node())
        }
    }

    fn parse_element_node(&mut self) -> Result<NodeId> {
        let open = self.cursor.position();
        self.context
            .enter_nested(&self.config)
            .map_err(|e| located(e, open))?;

        // Consume '<'
        let _ = self.cursor.advance(1);

        let Some(end) = self.cursor.find('>') else {
            let fragment = self.cursor.remaining().chars().take(FRAGMENT_CHARS).collect();
            return Err(located(
                ParseError::syntax(SyntaxError::UnclosedTag { fragment }),
                open,
            ));
        };
        let name = self.interner.intern(self.cursor.advance(end));
        // Consume '>'
        let _ = self.cursor.advance(1);
        trace!("Opened <{}> at line {}", name, open.line);

        let node = self.document.alloc(NodeKind::Element { name: name.clone() });
        self.parse_nodes(node)?;

        let expected = format!("</{name}>");
        if !self.cursor.starts_with(&expected) {
            return Err(located(
                ParseError::syntax(SyntaxError::UnmatchedTag {
                    expected: name.to_string(),
                    found: self.closing_tag_here(),
                }),
                open,
            ));
        }
        let _ = self.cursor.advance(expected.len());

        self.context.exit_nested();
        Ok(node)
    }

    fn parse_text_node(&mut self) -> Option<NodeId> {
        // Everything up to the next '<' is text, or the rest of the input
        let end = self
            .cursor
            .find('<')
            .unwrap_or(self.cursor.remaining().len());
        let value = self.cursor.advance(end);

        if is_blank(value) {
            return None;
        }
        Some(self.document.alloc(NodeKind::Text {
            value: value.to_string(),
        }))
    }

    /// Name inside the `</...>` at the cursor, for error reporting
    fn closing_tag_here(&self) -> Option<String> {
        let rest = self.cursor.remaining().strip_prefix("</")?;
        let name = match rest.find('>') {
            Some(end) => rest.get(..end).unwrap_or(rest),
            None => rest,
        };
        Some(name.chars().take(FRAGMENT_CHARS).collect())
    }
}

/// Whitespace-only run, using the ECMAScript `String.prototype.trim` set:
/// Unicode `White_Space` minus U+0085, plus U+FEFF. A leading byte order
/// mark therefore never becomes a text node, while a NEL run does.
fn is_blank(value: &str) -> bool {
    value
        .chars()
        .all(|c| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

fn located(err: ParseError, pos: Pos) -> ParseError {
    err.with_location(pos.line, pos.column)
}
