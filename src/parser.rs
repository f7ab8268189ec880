pub mod config;
pub mod cursor;
pub mod markup;

pub use config::{
    ParserConfig, ParsingContext, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, MAX_DEPTH_LIMIT,
};
pub use cursor::{Cursor, Pos};
pub use markup::MarkupParser;
