//! Mimetype to icon URL resolution
//!
//! `IconResolver` chases aliases, consults the shared `IconCache`, and
//! otherwise picks an icon from the first source that applies:
//!
//! 1. the active custom theme, when it ships icons and one matches;
//! 2. the theming override, when active (authoritative once reached);
//! 3. the stock core icons.
//!
//! Every URL ends in `.svg`, followed by the theming cache buster when the
//! override is active.

use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::cache::IconCache;
use crate::config::{IconConfig, ThemeConfig, DEFAULT_MAX_ALIAS_DEPTH};
use crate::metadata::MimeResolver;
use crate::mime_list::MimeTypeList;
use crate::paths::{PathBuilder, Theming, ThemingApp};

const ICON_EXTENSION: &str = ".svg";

/// Where an icon was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSource {
    Theme,
    Theming,
    Core,
}

impl fmt::Display for IconSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IconSource::Theme => "theme",
            IconSource::Theming => "theming",
            IconSource::Core => "core",
        };
        f.write_str(name)
    }
}

/// Counters for cache hits and fresh lookups.
#[derive(Debug, Default)]
pub struct ResolverStats {
    cache_hits: AtomicU64,
    lookups: AtomicU64,
}

impl ResolverStats {
    pub fn cache_hits(&self) -> u64 {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

pub struct IconResolver {
    list: Arc<MimeTypeList>,
    paths: PathBuilder,
    theme: ThemeConfig,
    theming: Option<Arc<dyn Theming>>,
    cache: IconCache,
    max_alias_depth: usize,
    stats: ResolverStats,
}

impl IconResolver {
    pub fn new(
        list: Arc<MimeTypeList>,
        paths: PathBuilder,
        theme: ThemeConfig,
        theming: Option<Arc<dyn Theming>>,
        cache: IconCache,
    ) -> Self {
        Self {
            list,
            paths,
            theme,
            theming,
            cache,
            max_alias_depth: DEFAULT_MAX_ALIAS_DEPTH,
            stats: ResolverStats::default(),
        }
    }

    /// Builds a resolver with the stock `ThemingApp` when theming is configured.
    pub fn from_config(config: &IconConfig, list: Arc<MimeTypeList>, cache: IconCache) -> Self {
        let theming = config
            .theming
            .as_ref()
            .map(|t| Arc::new(ThemingApp::from(t)) as Arc<dyn Theming>);

        Self::new(
            list,
            PathBuilder::from_config(config),
            config.theme.clone(),
            theming,
            cache,
        )
        .with_max_alias_depth(config.max_alias_depth)
    }

    pub fn with_max_alias_depth(mut self, max_alias_depth: usize) -> Self {
        self.max_alias_depth = max_alias_depth.max(1);
        self
    }

    pub fn cache(&self) -> &IconCache {
        &self.cache
    }

    pub fn stats(&self) -> &ResolverStats {
        &self.stats
    }

    /// Returns the icon URL for `mime_type`.
    ///
    /// `None` when no mimetype is given, or when no icon matches in the
    /// chosen source. Misses are not cached.
    pub fn resolve(&self, mime_type: Option<&str>) -> Option<String> {
        let requested = mime_type?;
        let mime_type = self.list.resolve_alias(requested, self.max_alias_depth);

        if let Some(url) = self.cache.get(&mime_type) {
            self.stats.cache_hits.fetch_add(1, Ordering::Relaxed);
            tracing::trace!(target: "npicons::resolver", requested, %mime_type, %url, "cache hit");
            return Some(url);
        }

        self.stats.lookups.fetch_add(1, Ordering::Relaxed);
        let (source, base, icon) = self.locate(&mime_type);
        let Some(icon) = icon else {
            tracing::warn!(target: "npicons::resolver", requested, %mime_type, %source, "no icon matches");
            return None;
        };

        let mut url = format!("{}{}{}", base, icon, ICON_EXTENSION);
        if let Some(theming) = &self.theming {
            url.push_str(&theming.cache_buster_query());
        }

        tracing::debug!(target: "npicons::resolver", requested, %mime_type, %source, %url, "resolved icon");
        self.cache.insert(mime_type, url.clone());
        Some(url)
    }

    /// Resolves the icon for a file path, guessing its mimetype from the extension.
    pub fn resolve_path(&self, path: &Path) -> Option<String> {
        let mime_type = MimeResolver::guess_mime_type(path);
        self.resolve(Some(mime_type.as_str()))
    }

    fn locate(&self, mime_type: &str) -> (IconSource, String, Option<String>) {
        if self.theme.is_active() {
            if let Some(files) = self.list.theme_files(&self.theme.folder) {
                if let Some(icon) = MimeResolver::pick_icon(mime_type, files) {
                    return (
                        IconSource::Theme,
                        self.paths.theme_filetypes_path(&self.theme.folder),
                        Some(icon),
                    );
                }
            }
        }

        // Once reached, theming wins even if nothing matches.
        if let Some(theming) = &self.theming {
            return (
                IconSource::Theming,
                theming.icon_base_url(&self.paths),
                MimeResolver::pick_icon(mime_type, &self.list.files),
            );
        }

        (
            IconSource::Core,
            self.paths.core_filetypes_path(),
            MimeResolver::pick_icon(mime_type, &self.list.files),
        )
    }
}
