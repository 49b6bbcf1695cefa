//! Page configuration.
//!
//! Every delay and offset the handlers use lives here with its default. A page
//! may override any subset by embedding JSON in
//! `<script type="application/json" id="page-config">`; missing keys keep
//! their defaults, and an unparseable blob is ignored with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::dom::Dom;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub theme_storage_key: String,
    pub nav_offset_px: f64,
    pub section_lookahead_px: f64,
    pub nav_scroll_threshold_px: f64,
    pub hero_start_delay_ms: u32,
    pub hero_stagger_ms: u32,
    pub hero_visual_delay_ms: u32,
    pub scroll_indicator_delay_ms: u32,
    pub body_fade_delay_ms: u32,
    pub theme_swap_delay_ms: u32,
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub submit_delay_ms: u32,
    pub notification_slide_in_ms: u32,
    pub notification_lifetime_ms: u32,
    pub notification_exit_ms: u32,
    pub typed_text: String,
    pub type_speed_ms: u32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            nav_offset_px: consts::NAV_OFFSET_PX,
            section_lookahead_px: consts::SECTION_LOOKAHEAD_PX,
            nav_scroll_threshold_px: consts::NAV_SCROLL_THRESHOLD_PX,
            hero_start_delay_ms: consts::HERO_START_DELAY_MS,
            hero_stagger_ms: consts::HERO_STAGGER_MS,
            hero_visual_delay_ms: consts::HERO_VISUAL_DELAY_MS,
            scroll_indicator_delay_ms: consts::SCROLL_INDICATOR_DELAY_MS,
            body_fade_delay_ms: consts::BODY_FADE_DELAY_MS,
            theme_swap_delay_ms: consts::THEME_SWAP_DELAY_MS,
            counter_steps: consts::COUNTER_STEPS,
            counter_tick_ms: consts::COUNTER_TICK_MS,
            submit_delay_ms: consts::SUBMIT_DELAY_MS,
            notification_slide_in_ms: consts::NOTIFICATION_SLIDE_IN_MS,
            notification_lifetime_ms: consts::NOTIFICATION_LIFETIME_MS,
            notification_exit_ms: consts::NOTIFICATION_EXIT_MS,
            typed_text: consts::TYPED_TEXT.to_owned(),
            type_speed_ms: consts::TYPE_SPEED_MS,
        }
    }
}

impl PageConfig {
    /// Parse a JSON override blob on top of the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if `raw` is not a JSON object with
    /// correctly typed fields.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read overrides from the page, or use the defaults.
    pub fn load<D: Dom>(dom: &D) -> Self {
        let Some(node) = dom.query(consts::PAGE_CONFIG_SELECTOR) else {
            return Self::default();
        };
        let raw = dom.text(&node);
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("config: loaded page overrides");
                config
            }
            Err(err) => {
                log::warn!("config: {err}; using defaults");
                Self::default()
            }
        }
    }
}
