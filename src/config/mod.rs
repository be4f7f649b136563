// Copyright (c) 2024, Cogent Core. All rights reserved.
// Use of this source code is governed by a BSD-style
// license that can be found in the LICENSE file.

//! Picker configuration.

use crate::base::{Error, Result};
use crate::colors::{parse_hex, ColorState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default quiet period for hex field keystrokes.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Settings for a [`ColorPreview`](crate::widgets::ColorPreview).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Initial red, green and blue as hex text.
    pub initial_color: String,
    /// Initial alpha (0-255).
    pub initial_alpha: u8,
    /// Quiet period before buffered hex field text is processed.
    pub debounce_ms: u64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_color: "#000000".to_string(),
            initial_alpha: 255,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl PickerConfig {
    /// Parses a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| Error::Config(e.to_string()))
    }

    /// Parses a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| Error::Config(e.to_string()))
    }

    /// Loads a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source)?,
            Some("json") => Self::from_json_str(&source)?,
            _ => {
                return Err(Error::Config(format!(
                    "unsupported config format: {}",
                    path.display()
                )))
            }
        };
        tracing::debug!(path = %path.display(), ?config, "loaded picker config");
        Ok(config)
    }

    /// Returns the initial color.
    pub fn initial_state(&self) -> Result<ColorState> {
        let rgb = parse_hex(&self.initial_color)?;
        Ok(ColorState::argb(self.initial_alpha, 0, 0, 0).with_rgb(rgb))
    }

    /// Returns the debounce quiet period.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
