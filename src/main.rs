use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use tagtree::{
    parse_file, to_outline, OutlineConfig, ParserConfig, Result, DEFAULT_MAX_DEPTH,
    DEFAULT_MAX_SIZE, MAX_DEPTH_LIMIT,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file path
    #[arg(short, long)]
    file: String,

    /// Maximum element nesting depth (1 to 512)
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, value_parser = parse_max_depth)]
    max_depth: usize,

    /// Maximum input size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: usize,

    /// Spaces per level in the printed outline
    #[arg(long, default_value_t = 2)]
    indent: usize,
}

/// Deeper limits would let nesting outrun the native stack
fn parse_max_depth(s: &str) -> std::result::Result<usize, String> {
    let depth: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_DEPTH_LIMIT).contains(&depth) {
        Ok(depth)
    } else {
        Err(format!("must be between 1 and {MAX_DEPTH_LIMIT}"))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let config = ParserConfig::default()
        .with_max_depth(args.max_depth)
        .with_max_size(args.max_size);
    info!("Parsing {} with {}", args.file, config);

    let doc = parse_file(&args.file, config)?;

    let outline_config = OutlineConfig {
        indent_spaces: args.indent,
        ..OutlineConfig::default()
    };
    print!("{}", to_outline(&doc, &outline_config));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_depth_range() {
        assert_eq!(parse_max_depth("1"), Ok(1));
        assert_eq!(parse_max_depth("512"), Ok(MAX_DEPTH_LIMIT));
        assert!(parse_max_depth("0").is_err());
        assert!(parse_max_depth("100000000").is_err());
        assert!(parse_max_depth("deep").is_err());
    }

    #[test]
    fn test_args_reject_unbounded_depth() {
        let parsed = Args::try_parse_from([
            "tagtree",
            "-f",
            "page.html",
            "--max-depth",
            "100000000",
        ]);
        assert!(parsed.is_err());

        let parsed = Args::try_parse_from(["tagtree", "-f", "page.html"]);
        assert_eq!(parsed.map(|a| a.max_depth).ok(), Some(DEFAULT_MAX_DEPTH));
    }
}
