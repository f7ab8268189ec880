//! Error handling types for the parser
//!
//! Every failure aborts the parse. The parser never resynchronizes, so a
//! [`ParseError`] always means that no tree was produced.

use std::{error::Error, fmt};
use thiserror::Error;

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    IO(IOError),
    Security(SecurityError),
    Syntax(SyntaxError),
}

/// Malformed markup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// A `<` with no `>` anywhere after it
    #[error("Unclosed tag '<{fragment}'")]
    UnclosedTag { fragment: String },
    /// The input after an element's children is not `</name>`
    #[error("Unmatched <{expected}> tag{}", found_suffix(.found))]
    UnmatchedTag {
        expected: String,
        found: Option<String>,
    },
}

/// Resource limits configured through [`crate::ParserConfig`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("Maximum nesting depth exceeded: {max}")]
    MaxDepthExceeded { max: usize },
    #[error("Maximum input size exceeded: {max} bytes")]
    MaxSizeExceeded { max: usize },
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Read error: {0}")]
    ReadError(String),
}

fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(tag) => format!(", found '{tag}'"),
        None => ", found end of input".to_string(),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn syntax(err: SyntaxError) -> Self {
        Self::new(ParseErrorKind::Syntax(err))
    }

    pub fn security(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IO(err) => write!(f, "{err}"),
            Self::Security(err) => write!(f, "{err}"),
            Self::Syntax(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "at line {}, column {}: {}", loc.line, loc.column, self.kind)?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {ctx}")?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {source}")?;
        }

        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|s| s.as_ref() as &(dyn Error + 'static))
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
