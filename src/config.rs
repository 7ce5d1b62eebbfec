//! Runtime configuration
//!
//! Passed to `initTooltips` as a plain JS object (or JSON). Every field is
//! optional; missing fields take the defaults below.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Mutex;

use crate::placement::DEFAULT_WIDTH;

// Configuration applied by the last `initTooltips` call
lazy_static! {
    static ref ACTIVE: Mutex<TtipConfig> = Mutex::new(TtipConfig::default());
}

/// The configuration currently in effect
pub fn active() -> TtipConfig {
    match ACTIVE.lock() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the configuration in effect and apply its log level
pub fn set_active(config: TtipConfig) {
    log::set_max_level(config.level_filter());
    match ACTIVE.lock() {
        Ok(mut active) => *active = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Configuration for tooltip behavior
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TtipConfig {
    /// Log verbosity: "off", "error", "warn", "info", "debug" or "trace"
    pub log_level: String,

    /// Delay before a tooltip is revealed
    pub tooltip_delay_ms: i32,

    /// Delay before a popover is revealed
    pub popover_delay_ms: i32,

    /// Quiet period after the last resize event before all boxes are reset
    pub resize_debounce_ms: i32,

    /// Width requested for a new box before its content is measured
    pub default_width: f64,
}

impl Default for TtipConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            tooltip_delay_ms: 0,
            popover_delay_ms: 500,
            resize_debounce_ms: 200,
            default_width: DEFAULT_WIDTH,
        }
    }
}

impl TtipConfig {
    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid tooltip config: {}", e))
    }

    /// Log level filter, falling back to `Warn` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        log::LevelFilter::from_str(&self.log_level).unwrap_or(log::LevelFilter::Warn)
    }
}
