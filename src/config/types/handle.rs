//! Global config handle.
//!
//! Uses `arc-swap` for lock-free reads. The config is published exactly
//! once at startup and is read-only thereafter; there are no writers after
//! `init_config`.

use crate::config::SiteConfig;
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Publish the loaded config process-wide and return a handle to it.
#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_config_publishes_value() {
        let mut config = SiteConfig::default();
        config.site.subtitle = "published".into();

        let handle = init_config(config);
        assert_eq!(handle.site.subtitle, "published");
        assert_eq!(cfg().site.subtitle, "published");
    }
}
