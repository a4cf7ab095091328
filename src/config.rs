#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ZOOM, MIN_ZOOM};

/// Engine configuration.
///
/// Every field has a default, and [`Config::from_json`] deserializes a
/// partial JSON object over those defaults, so hosts only specify what they
/// want to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Canvas background as a CSS color string.
    pub background: String,
    /// Whether to draw the background grid.
    pub draw_grid: bool,
    /// Grid spacing in world units.
    pub grid_size: f64,
    /// Whether to mark the world origin with a cross.
    pub draw_origin: bool,
    /// Color of control-point handles and the selection highlight.
    pub handle_color: String,
    /// Smallest permitted zoom factor.
    pub min_zoom: f64,
    /// Largest permitted zoom factor.
    pub max_zoom: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_owned(),
            draw_grid: true,
            grid_size: 32.0,
            draw_origin: true,
            handle_color: "#1E90FF".to_owned(),
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
        }
    }
}

impl Config {
    /// Deserialize a (possibly partial) JSON object, merging over defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error for malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
