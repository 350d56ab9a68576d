//! Resolver configuration
//!
//! Holds the web root, the active theme folder and the optional theming
//! override. Loaded once at startup from a JSON document and optionally
//! overridden from the environment.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::{IconError, IconErrorKind, IconResult};

/// Default bound on alias chasing.
pub const DEFAULT_MAX_ALIAS_DEPTH: usize = 32;

/// Active custom theme. An empty folder means no custom theme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub folder: String,
}

impl ThemeConfig {
    pub fn new(folder: impl Into<String>) -> Self {
        Self { folder: folder.into() }
    }

    pub fn is_active(&self) -> bool {
        !self.folder.is_empty()
    }
}

/// Settings of the theming override service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemingConfig {
    #[serde(default)]
    pub cache_buster: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default)]
    pub root_path: String,
    #[serde(default)]
    pub pretty_urls: bool,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Present when the theming override service is active.
    #[serde(default)]
    pub theming: Option<ThemingConfig>,
    #[serde(default = "default_max_alias_depth")]
    pub max_alias_depth: usize,
}

fn default_max_alias_depth() -> usize {
    DEFAULT_MAX_ALIAS_DEPTH
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            root_path: String::new(),
            pretty_urls: false,
            theme: ThemeConfig::default(),
            theming: None,
            max_alias_depth: DEFAULT_MAX_ALIAS_DEPTH,
        }
    }
}

impl IconConfig {
    pub fn from_json(content: &str) -> IconResult<Self> {
        let config: IconConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    pub async fn load(path: &Path) -> IconResult<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| IconError::io(format!("Failed to read config {}", path.display()), e))?;
        Self::from_json(&content)
    }

    /// Overrides fields from `NPICONS_ROOT_PATH`, `NPICONS_THEME` and
    /// `NPICONS_CACHE_BUSTER`. Setting the cache buster enables theming.
    /// The result is validated again.
    pub fn apply_env(&mut self) -> IconResult<()> {
        if let Ok(root) = std::env::var("NPICONS_ROOT_PATH") {
            self.root_path = root;
        }
        if let Ok(folder) = std::env::var("NPICONS_THEME") {
            self.theme.folder = folder;
        }
        if let Ok(token) = std::env::var("NPICONS_CACHE_BUSTER") {
            self.theming = Some(ThemingConfig { cache_buster: token });
        }
        self.validate()
    }

    pub fn validate(&self) -> IconResult<()> {
        if self.max_alias_depth == 0 {
            return Err(IconError::new(
                IconErrorKind::InvalidArg,
                "max_alias_depth must be at least 1",
            ));
        }
        let folder = self.theme.folder.as_str();
        if folder.contains(|c: char| c == '/' || c == '\\') || folder == "." || folder == ".." {
            return Err(IconError::new(
                IconErrorKind::InvalidArg,
                format!("Theme folder must be a single path segment: {}", self.theme.folder),
            ));
        }
        Ok(())
    }
}
