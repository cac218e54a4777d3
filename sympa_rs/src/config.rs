//! Site settings.
//!
//! The landing crate embeds `site.toml` at build time and parses it with
//! [`SiteConfig::from_toml_str`]. Every field has a default, so a partial or
//! broken file never stops the page from rendering.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::scroll_spy::DEFAULT_SCROLL_OFFSET;
use crate::storage::DEFAULT_STORAGE_KEY;
use crate::store::DEFAULT_CONFIRM_PROMPT;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub reviews: ReviewsConfig,
    pub scroll_spy: ScrollSpyConfig,
    pub promo: PromoConfig,
    pub demo: DemoConfig,
}

/// Testimonial persistence settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReviewsConfig {
    /// localStorage key holding the review snapshot.
    pub storage_key: String,
    /// Text of the removal confirmation prompt.
    pub confirm_prompt: String,
}

impl Default for ReviewsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            confirm_prompt: DEFAULT_CONFIRM_PROMPT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Offset line, in CSS pixels from the top of the viewport.
    pub offset_px: f64,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            offset_px: DEFAULT_SCROLL_OFFSET,
        }
    }
}

/// Promotional counter settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PromoConfig {
    pub headline: String,
    /// RFC 3339 instant the offer ends. The counter is hidden when unset.
    pub ends_at: Option<DateTime<Utc>>,
}

/// Demo video settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Embeddable player URL. The demo block shows a placeholder when unset.
    pub video_url: Option<String>,
}

impl DemoConfig {
    /// Configured player URL, ignoring a blank value.
    pub fn embed_url(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl SiteConfig {
    pub fn try_from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse `content`, falling back to defaults (with a warning) when it is invalid.
    pub fn from_toml_str(content: &str) -> Self {
        Self::try_from_toml_str(content).unwrap_or_else(|err| {
            warn!(error = %err, "using default site config");
            Self::default()
        })
    }
}
