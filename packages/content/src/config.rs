//! # Site configuration: `site.toml`
//!
//! Owner details and tuning knobs for the interactive pieces of the site. The
//! file ships inside the crate and is embedded at compile time, so the browser
//! build reads it without any I/O.
//!
//! ```toml
//! [owner]
//! name = "Alex Morgan"
//! email = "hello@example.com"
//!
//! [carousel]
//! auto_advance_ms = 8000
//! swipe_threshold_px = 100.0
//!
//! [reveal]
//! threshold = 0.15
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`SiteConfig`] | Top level. [`SiteConfig::bundled`] parses the embedded file. |
//! | [`OwnerConfig`] | Name, headline, contact details and social links. |
//! | [`CarouselConfig`] | Auto-advance interval, swipe threshold, slide duration. |
//! | [`RevealConfig`] | Intersection threshold for reveal animations. |
//! | [`EffectsConfig`] | Particle counts and frame interval for the canvas backgrounds. |
//!
//! Every field has a serde default, so a missing section is the same as the
//! default configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::carousel::{DEFAULT_AUTO_ADVANCE_MS, DEFAULT_SWIPE_THRESHOLD_PX};

const BUNDLED: &str = include_str!("../site.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub owner: OwnerConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OwnerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub resume_url: Option<String>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// "github", "linkedin", "twitter", ...
    pub network: String,
    pub url: String,
}

fn default_name() -> String {
    "Portfolio".to_string()
}

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            title: String::new(),
            tagline: String::new(),
            email: String::new(),
            phone: None,
            location: String::new(),
            avatar: String::new(),
            resume_url: None,
            socials: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    #[serde(default = "default_auto_advance_ms")]
    pub auto_advance_ms: u64,
    #[serde(default = "default_swipe_threshold_px")]
    pub swipe_threshold_px: f64,
    /// Length of the slide transition before the carousel settles.
    #[serde(default = "default_slide_ms")]
    pub slide_ms: u64,
}

fn default_auto_advance_ms() -> u64 {
    DEFAULT_AUTO_ADVANCE_MS
}

fn default_swipe_threshold_px() -> f64 {
    DEFAULT_SWIPE_THRESHOLD_PX
}

fn default_slide_ms() -> u64 {
    500
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance_ms: default_auto_advance_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            slide_ms: default_slide_ms(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
}

fn default_reveal_threshold() -> f64 {
    0.15
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectsConfig {
    #[serde(default = "default_glyph_size")]
    pub glyph_size_px: f64,
    #[serde(default = "default_icon_count")]
    pub icon_count: usize,
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_glyph_size() -> f64 {
    16.0
}

fn default_icon_count() -> usize {
    18
}

fn default_frame_ms() -> u64 {
    50
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            glyph_size_px: default_glyph_size(),
            icon_count: default_icon_count(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl SiteConfig {
    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The `site.toml` compiled into this crate.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_toml(BUNDLED)
    }

    pub fn social(&self, network: &str) -> Option<&str> {
        self.owner
            .socials
            .iter()
            .find(|s| s.network.eq_ignore_ascii_case(network))
            .map(|s| s.url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_parses() {
        let config = SiteConfig::bundled().unwrap();
        assert!(!config.owner.email.is_empty());
        assert_eq!(config.carousel.auto_advance_ms, 8_000);
        assert_eq!(config.carousel.swipe_threshold_px, 100.0);
        assert!(config.social("GitHub").is_some());
    }

    #[test]
    fn test_empty_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.owner.name, "Portfolio");
        assert_eq!(config.reveal.threshold, 0.15);
        assert_eq!(config.effects.frame_ms, 50);
    }

    #[test]
    fn test_partial_section() {
        let config = SiteConfig::from_toml("[carousel]\nauto_advance_ms = 5000\n").unwrap();
        assert_eq!(config.carousel.auto_advance_ms, 5_000);
        assert_eq!(config.carousel.swipe_threshold_px, 100.0);
        assert_eq!(config.carousel.slide_ms, 500);
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteConfig::from_toml("[carousel\n").unwrap_err();
        assert!(err.to_string().starts_with("invalid site.toml"));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = SiteConfig::bundled().unwrap();
        let s = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_toml(&s).unwrap(), config);
    }
}
