//! Runtime configuration for the page behaviors.
//!
//! Defaults come from [`crate::consts`]. A page may override any top-level
//! field with an embedded JSON block:
//!
//! ```html
//! <script type="application/json" id="folio-config">
//!   { "default_theme": "light", "navbar_scroll_threshold_px": 80 }
//! </script>
//! ```
//!
//! Nested observer settings must be given in full when overridden.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    NAVBAR_SCROLL_THRESHOLD_PX, REVEAL_DURATION_MS, REVEAL_OFFSET_PX, REVEAL_ROOT_MARGIN, REVEAL_SELECTORS,
    REVEAL_STAGGER_MS, REVEAL_THRESHOLD, SKILL_ROOT_MARGIN, SKILL_THRESHOLD, THEME_STORAGE_KEY,
};
use crate::error::Result;
use crate::reveal::ObserverOptions;
use crate::theme::Theme;

/// Scroll-reveal settings for content cards.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub observer: ObserverOptions,
    /// Delay added per element, in document order.
    pub stagger_ms: u32,
    pub duration_ms: u32,
    /// Starting downward offset of a hidden card.
    pub offset_px: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            observer: ObserverOptions::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN),
            stagger_ms: REVEAL_STAGGER_MS,
            duration_ms: REVEAL_DURATION_MS,
            offset_px: REVEAL_OFFSET_PX,
        }
    }
}

impl RevealConfig {
    /// The selector list as a single `querySelectorAll` argument.
    ///
    /// `None` when no non-blank selector is configured; `querySelectorAll("")`
    /// throws rather than matching nothing.
    #[must_use]
    pub fn selector_list(&self) -> Option<String> {
        let selectors: Vec<&str> = self.selectors.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect();
        (!selectors.is_empty()).then(|| selectors.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    pub default_theme: Theme,
    pub navbar_scroll_threshold_px: f64,
    pub skill_bars: ObserverOptions,
    pub reveal: RevealConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: THEME_STORAGE_KEY.to_owned(),
            default_theme: Theme::default(),
            navbar_scroll_threshold_px: NAVBAR_SCROLL_THRESHOLD_PX,
            skill_bars: ObserverOptions::new(SKILL_THRESHOLD, SKILL_ROOT_MARGIN),
            reveal: RevealConfig::default(),
        }
    }
}

impl Config {
    /// Parse a JSON override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Config`] if `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Self = serde_json::from_str(raw)?;
        config.skill_bars.threshold = config.skill_bars.threshold.clamp(0.0, 1.0);
        config.reveal.observer.threshold = config.reveal.observer.threshold.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Read the page's embedded config block, falling back to defaults.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(crate::consts::CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("config: using defaults, {err}");
                Self::default()
            }
        }
    }
}
