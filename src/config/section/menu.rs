//! `[[menu]]` navigation entries.
//!
//! # Example
//!
//! ```toml
//! [[menu]]
//! label = "Articles"
//! path = "/"
//!
//! [[menu]]
//! label = "About me"
//! path = "/pages/about"
//! ```
//!
//! Array order in the config file is display order; entries are never
//! reordered or deduplicated.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Field paths for menu entries, used in diagnostics.
pub struct MenuFields {
    pub label: FieldPath,
    pub path: FieldPath,
}

/// A single navigation entry: display label plus target route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub path: String,
}

impl MenuEntry {
    pub const FIELDS: MenuFields = MenuFields {
        label: FieldPath::new("menu.label"),
        path: FieldPath::new("menu.path"),
    };

    /// Returns true if `path` is a site-relative or absolute route.
    pub fn has_valid_route(&self) -> bool {
        self.path.starts_with('/')
            || self.path.starts_with("http://")
            || self.path.starts_with("https://")
    }
}

/// Validate menu entries (warning-level only).
pub fn validate_menu(entries: &[MenuEntry], diag: &mut ConfigDiagnostics) {
    for (index, entry) in entries.iter().enumerate() {
        if entry.label.is_empty() {
            diag.warn(
                MenuEntry::FIELDS.label,
                format!("entry {index} has an empty label"),
            );
        }
        if !entry.has_valid_route() {
            diag.warn_with_hint(
                MenuEntry::FIELDS.path,
                format!(
                    "entry {index} ('{}') has path '{}' which is neither site-relative nor absolute",
                    entry.label, entry.path
                ),
                "use a path like \"/pages/about\" or a full https:// URL",
            );
        }
    }
}
