//! Example: Resolve file-type icons
//!
//! Resolves icon URLs for a few mimetypes and file paths with the stock tables.
//! Honors `NPICONS_ROOT_PATH`, `NPICONS_THEME` and `NPICONS_CACHE_BUSTER`.
//!
//! Usage: cargo run --example resolve_icons [mimetype-or-path...]

use std::path::Path;
use std::sync::Arc;

use npicons::{IconCache, IconConfig, IconResolver, MimeTypeList};

fn main() -> npicons::IconResult<()> {
    let mut config = IconConfig::default();
    config.apply_env()?;

    let list = Arc::new(MimeTypeList::builtin().clone());
    let resolver = IconResolver::from_config(&config, list, IconCache::new());

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["dir", "dir-shared", "application/json", "image/png", "report.pdf", "notes.txt"]
            .iter()
            .map(|s| s.to_string())
            .collect();
    }

    println!("Icons:");
    for input in &inputs {
        // Mimetypes carry a '/', except the dir pseudo-types; the rest are paths
        let url = if input.contains('/') || input.starts_with("dir") {
            resolver.resolve(Some(input.as_str()))
        } else {
            resolver.resolve_path(Path::new(input))
        };
        println!("  {} -> {}", input, url.as_deref().unwrap_or("(no icon)"));
    }

    println!(
        "Cache: {} entries, {} lookups, {} hits",
        resolver.cache().len(),
        resolver.stats().lookups(),
        resolver.stats().cache_hits()
    );
    Ok(())
}
