//! Runtime configuration for the sketch engine.
//!
//! The JS host may pass overrides as a JSON object when constructing the
//! board; anything omitted falls back to the defaults in [`crate::consts`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{DEFAULT_LINE_WIDTH, POINT_CEILING, SURFACE_HEIGHT, SURFACE_WIDTH};

/// Recognized engine options.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stroke width in device pixels.
    pub line_width: f64,
    /// Emitted points per stroke before a forced flush. Zero disables the
    /// automatic flush entirely.
    pub point_ceiling: u64,
    /// Drawing surface width in device pixels.
    pub width: u32,
    /// Drawing surface height in device pixels.
    pub height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            point_ceiling: POINT_CEILING,
            width: SURFACE_WIDTH,
            height: SURFACE_HEIGHT,
        }
    }
}

impl Config {
    /// Parse a configuration override object from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `Err` when `text` is not a valid JSON object; unknown keys
    /// are tolerated, missing keys keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
