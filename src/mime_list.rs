//! Mimetype alias table and available icon lists
//!
//! `MimeTypeList` bundles the three static tables the resolver consumes:
//! the alias map, the core icon basenames and the per-theme icon basenames.
//! The stock tables are compiled in; `scan` regenerates them from a server
//! tree (`config/mimetypealiases*.json`, `core/img/filetypes`, `themes/*`).

mod defaults;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize};
use tokio::fs;

use crate::error::{IconError, IconResult};

const ALIASES_DIST_FILE: &str = "config/mimetypealiases.dist.json";
const ALIASES_CUSTOM_FILE: &str = "config/mimetypealiases.json";
const CORE_FILETYPES_DIR: &str = "core/img/filetypes";
const THEMES_DIR: &str = "themes";

static BUILTIN: Lazy<MimeTypeList> = Lazy::new(|| MimeTypeList {
    aliases: defaults::ALIASES
        .iter()
        .map(|(from, to)| (from.to_string(), to.to_string()))
        .collect(),
    files: defaults::FILES.iter().map(|f| f.to_string()).collect(),
    themes: HashMap::new(),
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeTypeList {
    #[serde(default)]
    pub aliases: HashMap<String, String>,
    #[serde(default)]
    pub files: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_themes")]
    pub themes: HashMap<String, Vec<String>>,
}

/// Accepts both an object and an empty array, since the generated document
/// writes `[]` when no theme ships its own icons.
fn deserialize_themes<'de, D>(deserializer: D) -> Result<HashMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Themes {
        Map(HashMap<String, Vec<String>>),
        List(Vec<serde_json::Value>),
    }

    match Themes::deserialize(deserializer)? {
        Themes::Map(map) => Ok(map),
        Themes::List(list) if list.is_empty() => Ok(HashMap::new()),
        Themes::List(_) => Err(serde::de::Error::custom("themes must be an object")),
    }
}

impl MimeTypeList {
    pub fn new(
        aliases: HashMap<String, String>,
        files: Vec<String>,
        themes: HashMap<String, Vec<String>>,
    ) -> Self {
        Self { aliases, files, themes }
    }

    /// The stock tables shipped with the server.
    pub fn builtin() -> &'static MimeTypeList {
        &BUILTIN
    }

    pub fn from_json(content: &str) -> IconResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json(&self) -> IconResult<String> {
        // Sorted keys keep the output stable between runs.
        let aliases: BTreeMap<_, _> = self.aliases.iter().collect();
        let themes: BTreeMap<_, _> = self.themes.iter().collect();
        Ok(serde_json::to_string_pretty(&serde_json::json!({
            "aliases": aliases,
            "files": self.files,
            "themes": themes,
        }))?)
    }

    /// Icons shipped by `theme`, if it ships any.
    pub fn theme_files(&self, theme: &str) -> Option<&[String]> {
        self.themes
            .get(theme)
            .map(Vec::as_slice)
            .filter(|files| !files.is_empty())
    }

    /// Follows the alias chain starting at `mime_type`.
    ///
    /// Stops after `max_depth` hops, returning the last value reached. When
    /// the chain loops, returns the smallest mimetype of the loop, so every
    /// entry point into the same loop yields the same value.
    pub fn resolve_alias(&self, mime_type: &str, max_depth: usize) -> String {
        let mut chain = vec![mime_type];

        while let Some(target) = self.aliases.get(chain[chain.len() - 1]) {
            let target = target.as_str();
            if let Some(start) = chain.iter().position(|m| *m == target) {
                let cycle = &chain[start..];
                let key = cycle.iter().min().copied().unwrap_or(target);
                tracing::warn!(
                    target: "npicons::mime_list",
                    mime_type, repeated = target, cycle_len = cycle.len(), key,
                    "alias cycle detected"
                );
                return key.to_string();
            }
            if chain.len() > max_depth {
                tracing::warn!(
                    target: "npicons::mime_list",
                    mime_type, max_depth, reached = chain[chain.len() - 1],
                    "alias chain exceeds depth bound"
                );
                break;
            }
            chain.push(target);
        }

        chain[chain.len() - 1].to_string()
    }

    /// Regenerates the tables from a server installation rooted at `server_root`.
    pub async fn scan(server_root: &Path) -> IconResult<Self> {
        let mut aliases = read_aliases(&server_root.join(ALIASES_DIST_FILE)).await?;
        let custom = server_root.join(ALIASES_CUSTOM_FILE);
        if fs::try_exists(&custom).await.unwrap_or(false) {
            aliases.extend(read_aliases(&custom).await?);
        }

        let files = list_icons(&server_root.join(CORE_FILETYPES_DIR)).await?;

        let mut themes = HashMap::new();
        let themes_dir = server_root.join(THEMES_DIR);
        if fs::try_exists(&themes_dir).await.unwrap_or(false) {
            let mut entries = fs::read_dir(&themes_dir)
                .await
                .map_err(|e| IconError::io(format!("Failed to read {}", themes_dir.display()), e))?;
            while let Some(entry) = entries.next_entry().await? {
                if !entry.file_type().await?.is_dir() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().into_owned();
                let icons = list_icons(&entry.path().join(CORE_FILETYPES_DIR)).await?;
                if !icons.is_empty() {
                    themes.insert(name, icons);
                }
            }
        }

        tracing::debug!(
            target: "npicons::mime_list",
            root = %server_root.display(),
            aliases = aliases.len(), files = files.len(), themes = themes.len(),
            "scanned icon tables"
        );

        Ok(Self { aliases, files, themes })
    }
}

async fn read_aliases(path: &Path) -> IconResult<HashMap<String, String>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| IconError::io(format!("Failed to read aliases {}", path.display()), e))?;
    let mut aliases: HashMap<String, String> = serde_json::from_str(&content)?;
    // Keys starting with '_' are comments.
    aliases.retain(|key, _| !key.starts_with('_'));
    Ok(aliases)
}

/// Sorted `.svg` basenames in `dir`. A missing directory yields an empty list.
async fn list_icons(dir: &Path) -> IconResult<Vec<String>> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Ok(Vec::new());
    }

    let mut icons = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| IconError::io(format!("Failed to read {}", dir.display()), e))?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) != Some("svg") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            icons.push(stem.to_string());
        }
    }
    icons.sort();
    Ok(icons)
}
