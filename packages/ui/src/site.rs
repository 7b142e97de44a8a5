//! Site configuration context.

use content::SiteConfig;
use dioxus::prelude::*;

/// Parse the bundled `site.toml`, falling back to defaults.
pub fn load_site_config() -> SiteConfig {
    match SiteConfig::bundled() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{}; using default site configuration", e);
            SiteConfig::default()
        }
    }
}

/// The `SiteConfig` provided at the app root.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
