//! Helpers shared by the integration tests and benchmarks

use std::{env, fs, path::PathBuf};

pub fn tmp_file_path(name: &str) -> PathBuf {
    let mut dir = env::temp_dir();
    dir.push("tagtree_tests");
    let _ = fs::create_dir_all(&dir);
    dir.push(name);
    dir
}

/// `depth` elements named `d`, each the only child of the previous one,
/// with `leaf` as text in the innermost
pub fn nested_markup(depth: usize, leaf: &str) -> String {
    let mut out = "<d>".repeat(depth);
    out.push_str(leaf);
    out.push_str(&"</d>".repeat(depth));
    out
}

/// A flat list page with `items` entries, used as a larger parse input
pub fn list_page(items: usize) -> String {
    let mut out = String::from("<html>\n<body>\n<ul>\n");
    for i in 0..items {
        out.push_str(&format!("  <li>item {i}</li>\n"));
    }
    out.push_str("</ul>\n</body>\n</html>\n");
    out
}
