use std::fmt;

use crate::error::{ParseError, Result, SecurityError};

/// Maximum element nesting depth (256); each level is one native stack frame
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Hard ceiling on `max_depth`, kept well within a 2MB thread stack
pub const MAX_DEPTH_LIMIT: usize = 512;
/// Maximum input size (10MB) to prevent memory exhaustion attacks
pub const DEFAULT_MAX_SIZE: usize = 10 * 1024 * 1024;

/// Configuration for parser limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of elements, never more than [`MAX_DEPTH_LIMIT`]
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {} }}",
            self.max_depth, self.max_size
        )
    }
}

impl ParserConfig {
    /// Values above [`MAX_DEPTH_LIMIT`] are clamped to it
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Depth bound actually enforced, even if `max_depth` was set directly
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.min(MAX_DEPTH_LIMIT)
    }

    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn validate_size(&self, input: &str) -> Result<()> {
        if input.len() > self.max_size {
            return Err(ParseError::security(SecurityError::MaxSizeExceeded {
                max: self.max_size,
            }));
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    /// Enter one element level. The depth is left unchanged on failure.
    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        let max = config.effective_max_depth();
        if self.current_depth >= max {
            return Err(ParseError::security(SecurityError::MaxDepthExceeded { max }));
        }
        self.current_depth += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn test_enter_up_to_limit() {
        let config = ParserConfig::default().with_max_depth(2);
        let mut ctx = ParsingContext::new();
        assert!(ctx.enter_nested(&config).is_ok());
        assert!(ctx.enter_nested(&config).is_ok());

        let err = ctx.enter_nested(&config).err();
        assert!(matches!(
            err.as_ref().map(ParseError::kind),
            Some(ParseErrorKind::Security(SecurityError::MaxDepthExceeded { max: 2 }))
        ));
        assert_eq!(ctx.depth(), 2);
    }

    #[test]
    fn test_max_depth_is_clamped() {
        let config = ParserConfig::default().with_max_depth(usize::MAX);
        assert_eq!(config.max_depth, MAX_DEPTH_LIMIT);

        let config = ParserConfig {
            max_depth: 100_000_000,
            ..ParserConfig::default()
        };
        assert_eq!(config.effective_max_depth(), MAX_DEPTH_LIMIT);

        let mut ctx = ParsingContext::new();
        for _ in 0..MAX_DEPTH_LIMIT {
            assert!(ctx.enter_nested(&config).is_ok());
        }
        let err = ctx.enter_nested(&config).err();
        assert!(matches!(
            err.as_ref().map(ParseError::kind),
            Some(ParseErrorKind::Security(SecurityError::MaxDepthExceeded { max }))
                if *max == MAX_DEPTH_LIMIT
        ));
    }

    #[test]
    fn test_exit_never_underflows() {
        let mut ctx = ParsingContext::new();
        ctx.exit_nested();
        assert_eq!(ctx.depth(), 0);
    }

    #[test]
    fn test_validate_size() {
        let config = ParserConfig::default().with_max_size(4);
        assert!(config.validate_size("abcd").is_ok());
        assert!(config.validate_size("abcde").is_err());
    }

    #[test]
    fn test_display() {
        let config = ParserConfig::default();
        assert_eq!(
            config.to_string(),
            "ParserConfig { max_depth: 256, max_size: 10485760 }"
        );
    }
}
