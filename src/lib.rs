//! # npicons - Nepsod Icons
//!
//! Resolves file MIME types to themed file-type icon URLs for web file
//! listings.
//!
//! ## Core Concepts
//!
//! - **MimeTypeList**: alias table plus the icon basenames available in core and per theme
//! - **IconResolver**: alias chasing, tiered icon lookup, theme and theming selection
//! - **IconCache**: session cache of resolved URLs, shared between resolvers
//! - **PathBuilder / Theming**: URL formatting and the optional icon-serving override
//! - **ToggleSelect**: multi-select dropdown decorator where picking a selected item unselects it
//!
//! ## Example
//!
//! ```no_run
//! use npicons::{IconCache, IconConfig, IconResolver, MimeTypeList};
//! use std::sync::Arc;
//!
//! let config = IconConfig::default();
//! let list = Arc::new(MimeTypeList::builtin().clone());
//! let resolver = IconResolver::from_config(&config, list, IconCache::new());
//!
//! // "application/json" is an alias of "text/code"
//! assert_eq!(
//!     resolver.resolve(Some("application/json")).as_deref(),
//!     Some("/core/img/filetypes/text-code.svg")
//! );
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod metadata;
pub mod mime_list;
pub mod paths;
pub mod resolver;
pub mod select;

pub use cache::IconCache;
pub use config::{IconConfig, ThemeConfig, ThemingConfig};
pub use error::{IconError, IconErrorKind, IconResult};
pub use metadata::MimeResolver;
pub use mime_list::MimeTypeList;
pub use paths::{PathBuilder, Theming, ThemingApp};
pub use resolver::{IconResolver, IconSource, ResolverStats};
pub use select::{Choice, MultiSelect, SimpleMultiSelect, ToggleSelect};
