//! Configuration file generation.
//!
//! Creates a commented starter `plume.toml` for new sites.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{ContactsConfig, SiteConfig};
use crate::log;

/// Generate plume.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# Plume configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# https://github.com/plume-rs/plume\n\n");

    out.push_str(
        "[site]\n\
         # Absolute base URL of the site\n\
         url = \"https://example.com\"\n\
         # URL path prefix; derived from the url path when one is present\n\
         path_prefix = \"/\"\n\
         # Decorative prefix for the site title (prefix + author name)\n\
         title_prefix = \"\u{1F680}\"\n\
         subtitle = \"a personal blog\"\n\
         # Pagination page size (must be at least 1)\n\
         posts_per_page = 5\n\
         # Math rendering\n\
         use_katex = false\n\
         # Empty string disables the feature\n\
         disqus_shortname = \"\"\n\
         google_analytics_id = \"\"\n\n",
    );

    out.push_str(
        "# Navigation entries, in display order\n\
         [[menu]]\n\
         label = \"Articles\"\n\
         path = \"/\"\n\n\
         [[menu]]\n\
         label = \"About me\"\n\
         path = \"/pages/about\"\n\n",
    );

    out.push_str(
        "[author]\n\
         name = \"Your Name\"\n\
         photo = \"/photo.jpg\"\n\
         bio = \"I love all things tech.\"\n\n",
    );

    // Contacts block: every supported platform, empty = unset
    out.push_str("# Contact handles; leave empty for platforms you don't use\n");
    out.push_str("[author.contacts]\n");
    for platform in ContactsConfig::PLATFORMS {
        out.push_str(&format!("{platform} = \"\"\n"));
    }

    out
}

/// Write default plume.toml configuration
pub fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists, refusing to overwrite", path.display());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Create a new site config at the resolved config path.
pub fn new_site(config: &SiteConfig) -> Result<()> {
    write_config(&config.config_path)?;
    log!("init"; "created '{}'", config.config_path.display());
    Ok(())
}
