//! URL path helpers and the theming collaborator
//!
//! `PathBuilder` knows the web root and formats absolute asset paths.
//! `Theming` is the optional override service that serves icons from its
//! own endpoint and stamps them with a cache-busting token.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::{IconConfig, ThemingConfig};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const CORE_FILETYPES: &str = "/core/img/filetypes/";
const THEMING_FILETYPES: &str = "/apps/theming/img/core/filetypes/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathBuilder {
    root_path: String,
    pretty_urls: bool,
}

impl PathBuilder {
    pub fn new(root_path: impl Into<String>, pretty_urls: bool) -> Self {
        let root_path: String = root_path.into();
        Self {
            root_path: root_path.trim_end_matches('/').to_string(),
            pretty_urls,
        }
    }

    pub fn from_config(config: &IconConfig) -> Self {
        Self::new(config.root_path.clone(), config.pretty_urls)
    }

    /// Web root without a trailing slash; empty when served at `/`.
    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    /// URL of a routed endpoint, e.g. `/apps/theming/...`.
    pub fn generate_url(&self, path: &str) -> String {
        if self.pretty_urls {
            format!("{}{}", self.root_path, path)
        } else {
            format!("{}/index.php{}", self.root_path, path)
        }
    }

    /// Directory of the stock file-type icons, with a trailing slash.
    pub fn core_filetypes_path(&self) -> String {
        format!("{}{}", self.root_path, CORE_FILETYPES)
    }

    /// Directory of a custom theme's file-type icons, with a trailing slash.
    pub fn theme_filetypes_path(&self, folder: &str) -> String {
        format!(
            "{}/themes/{}{}",
            self.root_path,
            utf8_percent_encode(folder, SEGMENT),
            CORE_FILETYPES
        )
    }
}

/// Optional icon-serving override.
pub trait Theming: Send + Sync {
    /// Base URL the override serves file-type icons from, with a trailing slash.
    fn icon_base_url(&self, paths: &PathBuilder) -> String;

    fn cache_buster(&self) -> &str;

    /// Query suffix appended to every icon URL while the override is active.
    fn cache_buster_query(&self) -> String {
        format!("?v={}", urlencoding::encode(self.cache_buster()))
    }
}

/// The stock theming app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemingApp {
    cache_buster: String,
}

impl ThemingApp {
    pub fn new(cache_buster: impl Into<String>) -> Self {
        Self {
            cache_buster: cache_buster.into(),
        }
    }
}

impl From<&ThemingConfig> for ThemingApp {
    fn from(config: &ThemingConfig) -> Self {
        Self::new(config.cache_buster.clone())
    }
}

impl Theming for ThemingApp {
    fn icon_base_url(&self, paths: &PathBuilder) -> String {
        paths.generate_url(THEMING_FILETYPES)
    }

    fn cache_buster(&self) -> &str {
        &self.cache_buster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_url() {
        let paths = PathBuilder::new("/cloud/", false);
        assert_eq!(paths.root_path(), "/cloud");
        assert_eq!(paths.generate_url("/apps/files/"), "/cloud/index.php/apps/files/");

        let pretty = PathBuilder::new("/cloud", true);
        assert_eq!(pretty.generate_url("/apps/files/"), "/cloud/apps/files/");
    }

    #[test]
    fn test_filetypes_paths() {
        let paths = PathBuilder::new("", false);
        assert_eq!(paths.core_filetypes_path(), "/core/img/filetypes/");
        assert_eq!(paths.theme_filetypes_path("dark"), "/themes/dark/core/img/filetypes/");
        assert_eq!(
            paths.theme_filetypes_path("my theme"),
            "/themes/my%20theme/core/img/filetypes/"
        );
    }

    #[test]
    fn test_theming_app() {
        let theming = ThemingApp::new("a b");
        let paths = PathBuilder::new("", false);
        assert_eq!(
            theming.icon_base_url(&paths),
            "/index.php/apps/theming/img/core/filetypes/"
        );
        assert_eq!(theming.cache_buster_query(), "?v=a%20b");
    }
}
