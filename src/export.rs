//! Resolved site record for the external generator.
//!
//! `SiteExport` is the single interface the generator reads: an immutable
//! snapshot of the configuration with the two derived fields computed.
//! Field names follow the generator's expected shape exactly (`pathPrefix`,
//! `disqusShortname`, `postsPerPage`, `googleAnalyticsId`, `useKatex`).
//!
//! Construction reads the system clock once (for the copyright year) and
//! performs no other side effects.

use crate::config::{AuthorConfig, MenuEntry, SiteConfig};
use crate::utils::date::utc_now;
use anyhow::Result;
use serde::Serialize;

/// Immutable export record, built once per process.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteExport {
    pub url: String,
    pub path_prefix: String,
    /// Derived: decorative prefix + " " + author name.
    pub title: String,
    pub subtitle: String,
    /// Derived: "© " + UTC year at construction + " " + author name.
    pub copyright: String,
    pub disqus_shortname: String,
    pub posts_per_page: u32,
    pub google_analytics_id: String,
    pub use_katex: bool,
    /// Navigation entries, in configured display order.
    pub menu: Vec<MenuEntry>,
    pub author: AuthorConfig,
}

impl SiteExport {
    /// Resolve the export record at the current UTC year.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::from_config_at(config, utc_now().year)
    }

    /// Resolve the export record at a fixed UTC year.
    pub fn from_config_at(config: &SiteConfig, year: u16) -> Self {
        let name = &config.author.name;

        // An empty prefix yields the bare author name, no leading space.
        let title = if config.site.title_prefix.is_empty() {
            name.clone()
        } else {
            format!("{} {}", config.site.title_prefix, name)
        };
        let copyright = format!("© {year} {name}");

        Self {
            url: config.site.url.clone(),
            path_prefix: config.site.path_prefix.clone(),
            title,
            subtitle: config.site.subtitle.clone(),
            copyright,
            disqus_shortname: config.site.disqus_shortname.clone(),
            posts_per_page: config.site.posts_per_page,
            google_analytics_id: config.site.google_analytics_id.clone(),
            use_katex: config.site.use_katex,
            menu: config.menu.clone(),
            author: config.author.clone(),
        }
    }

    /// Serialize for the external generator.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn sample_config() -> SiteConfig {
        test_parse_config(
            "[[menu]]\nlabel = \"Articles\"\npath = \"/\"\n\
             [[menu]]\nlabel = \"About me\"\npath = \"/pages/about\"\n\
             [author.contacts]\ntwitter = \"insane141\"\ngithub = \"jakubhomoly\"",
        )
    }

    #[test]
    fn test_derived_fields_concrete_scenario() {
        let mut config = sample_config();
        config.author.name = "Jakub Homoly".into();

        let export = SiteExport::from_config_at(&config, 2024);
        assert_eq!(export.title, "🚀 Jakub Homoly");
        assert_eq!(export.copyright, "© 2024 Jakub Homoly");
    }

    #[test]
    fn test_empty_title_prefix_yields_bare_name() {
        let mut config = sample_config();
        config.author.name = "Alice".into();
        config.site.title_prefix = String::new();

        let export = SiteExport::from_config_at(&config, 2026);
        assert_eq!(export.title, "Alice");
    }

    #[test]
    fn test_passthrough_fields_unchanged() {
        let mut config = sample_config();
        config.site.posts_per_page = 5;
        config.site.use_katex = false;
        config.site.google_analytics_id = "UA-73379983-2".into();

        let export = SiteExport::from_config_at(&config, 2024);
        assert_eq!(export.posts_per_page, 5);
        assert!(!export.use_katex);
        assert_eq!(export.google_analytics_id, "UA-73379983-2");
        assert_eq!(export.disqus_shortname, "");
    }

    #[test]
    fn test_menu_order_survives_export() {
        let config = sample_config();
        let export = SiteExport::from_config_at(&config, 2024);

        let labels: Vec<_> = export.menu.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Articles", "About me"]);
    }

    #[test]
    fn test_json_shape_matches_generator_contract() {
        let mut config = sample_config();
        config.author.name = "Jakub Homoly".into();

        let export = SiteExport::from_config_at(&config, 2024);
        let json = export.to_json(false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        // Exact camelCase field names the generator reads
        for key in [
            "url",
            "pathPrefix",
            "title",
            "subtitle",
            "copyright",
            "disqusShortname",
            "postsPerPage",
            "googleAnalyticsId",
            "useKatex",
            "menu",
            "author",
        ] {
            assert!(value.get(key).is_some(), "missing key: {key}");
        }

        // Every contacts platform is present, empty string meaning unset
        let contacts = &value["author"]["contacts"];
        for platform in crate::config::ContactsConfig::PLATFORMS {
            assert!(
                contacts.get(platform).is_some(),
                "missing contact key: {platform}"
            );
        }
        assert_eq!(contacts["twitter"], "insane141");
        assert_eq!(contacts["email"], "");
    }
}
