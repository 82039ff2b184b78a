use serde::{Deserialize, Serialize};

use crate::error::TimerError;
use crate::util::{cerror, clog};

pub const STORAGE_KEY: &str = "timer_config";

/// Page-level timer settings, persisted as JSON in localStorage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Id of the element the timer renders into.
    pub sink_id: String,
    pub tick_ms: u32,
    /// Prefix whole days to the elapsed clock (hours alone wrap every day).
    pub show_days: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            sink_id: "timer".to_string(),
            tick_ms: 1000,
            show_days: false,
        }
    }
}

impl TimerConfig {
    pub fn from_json(raw: &str) -> Result<Self, TimerError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| TimerError::Config(e.to_string()))?;
        config.validate()
    }

    fn validate(self) -> Result<Self, TimerError> {
        if self.tick_ms == 0 {
            return Err(TimerError::Config("tick_ms must be positive".into()));
        }
        if self.sink_id.trim().is_empty() {
            return Err(TimerError::Config("sink_id must not be empty".into()));
        }
        Ok(self)
    }

    /// Read the stored config, falling back to defaults when absent or broken.
    pub fn load() -> Self {
        let Some(raw) = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(STORAGE_KEY).ok().flatten())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                clog(&format!("timer config loaded: {config:?}"));
                config
            }
            Err(err) => {
                cerror(&format!("{err}; using defaults"));
                Self::default()
            }
        }
    }
}
