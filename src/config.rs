//! UI Configuration
//!
//! Timings and limits for the simulated interactions. Defaults can be
//! overridden with a JSON object stored under `localStorage["qrail.config"]`;
//! missing fields keep their defaults.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const STORAGE_KEY: &str = "qrail.config";

/// Track map zoom bounds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub initial: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            initial: 1.0,
            min: 0.5,
            max: 3.0,
            step: 0.2,
        }
    }
}

impl ZoomConfig {
    /// Bounds must be ordered, the step positive and the initial level in range
    pub fn validate(&self) -> AppResult<()> {
        if !(self.min <= self.max) {
            return Err(AppError::ConfigValue(format!(
                "zoom.min {} is above zoom.max {}",
                self.min, self.max
            )));
        }
        if !(self.step > 0.0) {
            return Err(AppError::ConfigValue(format!("zoom.step {} must be positive", self.step)));
        }
        if !(self.min..=self.max).contains(&self.initial) {
            return Err(AppError::ConfigValue(format!(
                "zoom.initial {} is outside {}..={}",
                self.initial, self.min, self.max
            )));
        }
        Ok(())
    }

    /// Round to hundredths so repeated steps land on exact labels
    fn settle(&self, level: f64) -> f64 {
        ((level * 100.0).round() / 100.0).clamp(self.min, self.max)
    }

    pub fn zoom_in(&self, level: f64) -> f64 {
        self.settle(level + self.step)
    }

    pub fn zoom_out(&self, level: f64) -> f64 {
        self.settle(level - self.step)
    }

    /// "120%"
    pub fn label(level: f64) -> String {
        format!("{}%", (level * 100.0).round() as i64)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay in ms at which each welcome stage (1, 2, ...) is reached
    pub splash_stages_ms: Vec<u32>,
    pub scan_delay_ms: u32,
    pub upload_delay_ms: u32,
    pub scan_history_cap: usize,
    pub zoom: ZoomConfig,
    /// error | warn | info | debug | trace
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            splash_stages_ms: vec![500, 1500, 2500, 3500],
            scan_delay_ms: 3000,
            upload_delay_ms: 1000,
            scan_history_cap: 5,
            zoom: ZoomConfig::default(),
            log_level: "debug".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.zoom.validate()?;
        Ok(config)
    }

    /// Defaults merged with the stored override, if any
    pub fn load() -> AppResult<Self> {
        match read_override() {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    /// Unknown names fall back to debug
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}

fn read_override() -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    storage.get_item(STORAGE_KEY).ok().flatten()
}

/// Config provided at the app root
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

/// Load the config, returning defaults plus the error when the override is invalid
pub fn load_or_default() -> (AppConfig, Option<AppError>) {
    match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.splash_stages_ms, vec![500, 1500, 2500, 3500]);
        assert_eq!(config.scan_delay_ms, 3000);
        assert_eq!(config.upload_delay_ms, 1000);
        assert_eq!(config.scan_history_cap, 5);
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"scan_delay_ms": 500, "zoom": {"max": 2.0}}"#).unwrap();
        assert_eq!(config.scan_delay_ms, 500);
        assert_eq!(config.upload_delay_ms, 1000);
        assert_eq!(config.zoom.max, 2.0);
        assert_eq!(config.zoom.min, 0.5);
    }

    #[test]
    fn test_invalid_override_is_an_error() {
        assert!(matches!(AppConfig::from_json("{not json"), Err(AppError::Config(_))));
        assert!(AppConfig::from_json(r#"{"scan_delay_ms": "soon"}"#).is_err());
    }

    #[test]
    fn test_inconsistent_zoom_is_rejected() {
        for raw in [
            r#"{"zoom": {"min": 3.0, "max": 0.5}}"#,
            r#"{"zoom": {"step": 0.0}}"#,
            r#"{"zoom": {"step": -0.2}}"#,
            r#"{"zoom": {"initial": 4.0}}"#,
        ] {
            assert!(
                matches!(AppConfig::from_json(raw), Err(AppError::ConfigValue(_))),
                "{} should be rejected",
                raw
            );
        }
        assert!(ZoomConfig::default().validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        let mut config = AppConfig::default();
        config.log_level = "warn".into();
        assert_eq!(config.log_level(), log::Level::Warn);
        config.log_level = "INFO".into();
        assert_eq!(config.log_level(), log::Level::Info);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_zoom_steps() {
        let zoom = ZoomConfig::default();
        assert_eq!(zoom.zoom_in(1.0), 1.2);
        assert_eq!(zoom.zoom_out(1.0), 0.8);
        assert_eq!(ZoomConfig::label(1.2), "120%");
        assert_eq!(ZoomConfig::label(zoom.initial), "100%");
    }

    #[test]
    fn test_zoom_clamps() {
        let zoom = ZoomConfig::default();
        let mut level = zoom.initial;
        for _ in 0..20 {
            level = zoom.zoom_in(level);
        }
        assert_eq!(level, 3.0);
        for _ in 0..20 {
            level = zoom.zoom_out(level);
        }
        assert_eq!(level, 0.5);
        assert_eq!(ZoomConfig::label(level), "50%");
    }
}
