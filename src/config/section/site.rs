//! `[site]` configuration.
//!
//! Site-level metadata and feature toggles consumed by the external
//! generator: base URL, pagination size, analytics/comments identifiers,
//! and the math-rendering flag. The displayed `title` and `copyright`
//! values are not configured here; they are derived at resolve time from
//! the decorative prefix and the author name.

use crate::config::types::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// Decorative glyph prepended to the author name to form the site title.
pub const DEFAULT_TITLE_PREFIX: &str = "🚀";

/// Field paths for [`SiteMetaConfig`], used in diagnostics.
pub struct SiteMetaFields {
    pub url: FieldPath,
    pub path_prefix: FieldPath,
    pub title_prefix: FieldPath,
    pub subtitle: FieldPath,
    pub posts_per_page: FieldPath,
    pub use_katex: FieldPath,
    pub disqus_shortname: FieldPath,
    pub google_analytics_id: FieldPath,
}

/// Site metadata section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMetaConfig {
    /// Absolute base URL of the site (e.g., "https://example.com").
    pub url: String,

    /// URL path prefix. Synced from the path component of `url` when one
    /// is present (project-pages deployments).
    pub path_prefix: String,

    /// Decorative prefix for the derived site title.
    pub title_prefix: String,

    /// Free-text site subtitle.
    pub subtitle: String,

    /// Pagination page size; expected to be at least 1.
    pub posts_per_page: u32,

    /// Math-rendering toggle.
    pub use_katex: bool,

    /// Disqus comments shortname; empty string disables the feature.
    pub disqus_shortname: String,

    /// Google Analytics tracking identifier; empty string disables tracking.
    pub google_analytics_id: String,
}

impl Default for SiteMetaConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            path_prefix: "/".into(),
            title_prefix: DEFAULT_TITLE_PREFIX.into(),
            subtitle: String::new(),
            posts_per_page: 5,
            use_katex: false,
            disqus_shortname: String::new(),
            google_analytics_id: String::new(),
        }
    }
}

impl SiteMetaConfig {
    pub const FIELDS: SiteMetaFields = SiteMetaFields {
        url: FieldPath::new("site.url"),
        path_prefix: FieldPath::new("site.path_prefix"),
        title_prefix: FieldPath::new("site.title_prefix"),
        subtitle: FieldPath::new("site.subtitle"),
        posts_per_page: FieldPath::new("site.posts_per_page"),
        use_katex: FieldPath::new("site.use_katex"),
        disqus_shortname: FieldPath::new("site.disqus_shortname"),
        google_analytics_id: FieldPath::new("site.google_analytics_id"),
    };

    /// Validate site metadata.
    ///
    /// Everything here is warning-level: the loaded record stays usable
    /// no matter what the checks find.
    ///
    /// # Checks
    /// - `posts_per_page` is at least 1
    /// - `url`, when set, parses as an http/https URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.posts_per_page == 0 {
            diag.warn_with_hint(
                Self::FIELDS.posts_per_page,
                "pagination size must be at least 1",
                "set posts_per_page = 5",
            );
        }

        if self.url.is_empty() {
            diag.warn_with_hint(
                Self::FIELDS.url,
                "base URL is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            );
            return;
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.warn_with_hint(
                        Self::FIELDS.url,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.warn_with_hint(
                        Self::FIELDS.url,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.warn_with_hint(
                    Self::FIELDS.url,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let site = SiteMetaConfig::default();
        assert_eq!(site.path_prefix, "/");
        assert_eq!(site.title_prefix, DEFAULT_TITLE_PREFIX);
        assert_eq!(site.posts_per_page, 5);
        assert!(!site.use_katex);
        assert!(site.disqus_shortname.is_empty());
    }

    #[test]
    fn test_validate_zero_posts_per_page_warns() {
        let site = SiteMetaConfig {
            url: "https://example.com".into(),
            posts_per_page: 0,
            ..SiteMetaConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);

        assert_eq!(diag.warning_count(), 1);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_url_schemes() {
        let mut diag = ConfigDiagnostics::new();
        SiteMetaConfig {
            url: "https://example.com".into(),
            ..SiteMetaConfig::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.warning_count(), 0);

        let mut diag = ConfigDiagnostics::new();
        SiteMetaConfig {
            url: "ftp://example.com".into(),
            ..SiteMetaConfig::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.warning_count(), 1);

        let mut diag = ConfigDiagnostics::new();
        SiteMetaConfig {
            url: "not a url".into(),
            ..SiteMetaConfig::default()
        }
        .validate(&mut diag);
        assert_eq!(diag.warning_count(), 1);
    }

    #[test]
    fn test_validate_missing_url_warns_once() {
        let mut diag = ConfigDiagnostics::new();
        SiteMetaConfig::default().validate(&mut diag);
        assert_eq!(diag.warning_count(), 1);
        assert_eq!(diag.warnings()[0].field.as_str(), "site.url");
    }
}
