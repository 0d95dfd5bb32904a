//! Config validation summary.
//!
//! Warnings are already printed during load; `check` reports the summary
//! and, in strict mode, promotes warnings to errors for CI use.

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::{ConfigError, ContactsConfig, SiteConfig};
use crate::export::SiteExport;
use crate::log;

pub fn run_check(strict: bool, config: &SiteConfig) -> Result<()> {
    let export = SiteExport::from_config(config);
    let mut diag = config.diagnostics();

    log!("check"; "{}", config.config_path.display());
    log!("check"; "title: {}", export.title);
    log!("check"; "copyright: {}", export.copyright);
    log!(
        "check";
        "{} menu entr{}, {} of {} contacts configured",
        export.menu.len(),
        if export.menu.len() == 1 { "y" } else { "ies" },
        config.author.contacts.configured(),
        ContactsConfig::PLATFORMS.len()
    );

    let warnings = diag.warning_count();
    if strict {
        diag.promote_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)?;
    }

    if warnings == 0 {
        log!("check"; "{}", "ok".green());
    } else {
        log!(
            "check";
            "{} with {} warning{}",
            "ok".green(),
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
