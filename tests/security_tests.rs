#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use tagtree::test_utils::nested_markup;
use tagtree::{
    parse_str, parse_str_with_config, MarkupParser, ParseErrorKind, ParserConfig, SecurityError,
    DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, MAX_DEPTH_LIMIT,
};

#[test]
fn test_max_input_size() {
    // Create input exactly larger than max size (10MB)
    let large_input = "x".repeat(DEFAULT_MAX_SIZE + 1);

    let result = MarkupParser::new(&large_input);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(matches!(
            e.kind(),
            ParseErrorKind::Security(SecurityError::MaxSizeExceeded { .. })
        ));
        assert!(e.location().is_none());
    }
}

#[test]
fn test_input_at_max_size_is_accepted() {
    let config = ParserConfig::default().with_max_size(11);
    assert!(parse_str_with_config("<a>xxxx</a>", config).is_ok());
}

#[test]
fn test_nesting_at_max_depth() {
    let markup = nested_markup(DEFAULT_MAX_DEPTH, "leaf");
    let doc = parse_str(&markup).unwrap();
    let deepest = doc.descendants().map(|(_, depth, _)| depth).max();
    // elements plus the text leaf
    assert_eq!(deepest, Some(DEFAULT_MAX_DEPTH + 1));
}

#[test]
fn test_max_nesting_depth() {
    let markup = nested_markup(DEFAULT_MAX_DEPTH + 1, "leaf");

    let result = parse_str(&markup);
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(
            matches!(
                e.kind(),
                ParseErrorKind::Security(SecurityError::MaxDepthExceeded { max })
                    if *max == DEFAULT_MAX_DEPTH
            ),
            "Expected MaxDepthExceeded, got {:?}",
            e.kind()
        );
        let location = e.location().unwrap();
        assert_eq!(location.column, DEFAULT_MAX_DEPTH * 3 + 1);
    }
}

#[test]
fn test_stack_overflow_prevention() {
    // Far deeper than any native stack could recurse through
    let markup = nested_markup(1_000_000, "");
    let config = ParserConfig::default().with_max_size(usize::MAX);

    let result = parse_str_with_config(&markup, config);
    assert!(matches!(
        result.map_err(|e| e.kind().clone()),
        Err(ParseErrorKind::Security(SecurityError::MaxDepthExceeded { .. }))
    ));
}

#[test]
fn test_unclosed_open_tags_hit_depth_first() {
    let markup = "<x>".repeat(DEFAULT_MAX_DEPTH + 10);
    let err = parse_str(&markup).unwrap_err();
    assert!(matches!(
        err.kind(),
        ParseErrorKind::Security(SecurityError::MaxDepthExceeded { .. })
    ));
}

#[test]
fn test_configured_depth_cannot_exceed_ceiling() {
    let markup = nested_markup(100_000, "");
    let config = ParserConfig {
        max_depth: 100_000_000,
        max_size: usize::MAX,
    };

    let err = parse_str_with_config(&markup, config).unwrap_err();
    assert!(
        matches!(
            err.kind(),
            ParseErrorKind::Security(SecurityError::MaxDepthExceeded { max })
                if *max == MAX_DEPTH_LIMIT
        ),
        "Expected MaxDepthExceeded, got {:?}",
        err.kind()
    );

    let at_ceiling = nested_markup(MAX_DEPTH_LIMIT, "leaf");
    let config = ParserConfig::default().with_max_depth(usize::MAX);
    assert!(parse_str_with_config(&at_ceiling, config).is_ok());
}
