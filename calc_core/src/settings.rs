//! # Engine Settings
//!
//! Tunables a host may load from a config file. Every field has a default,
//! so a partial JSON document (or `{}`) is a valid settings file.
//!
//! ```rust
//! use calc_core::settings::EngineSettings;
//! use calc_core::operators::AngleMode;
//!
//! let settings: EngineSettings =
//!     serde_json::from_str(r#"{ "default_angle_mode": "deg" }"#).unwrap();
//! assert_eq!(settings.default_angle_mode, AngleMode::Degrees);
//! assert_eq!(settings.display_width, 15);
//! ```

use serde::{Deserialize, Serialize};

use crate::format::{DEFAULT_DISPLAY_WIDTH, DEFAULT_RESULT_PRECISION};
use crate::operators::AngleMode;

/// Engine-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Angle mode a fresh engine starts in
    pub default_angle_mode: AngleMode,

    /// Keep the selected angle mode when the calculator is cleared.
    /// When false, clear restores `default_angle_mode`.
    pub preserve_angle_mode_on_clear: bool,

    /// Maximum characters shown for a plain value
    pub display_width: usize,

    /// Decimal places kept when a result is stored
    pub result_precision: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            default_angle_mode: AngleMode::Radians,
            preserve_angle_mode_on_clear: true,
            display_width: DEFAULT_DISPLAY_WIDTH,
            result_precision: DEFAULT_RESULT_PRECISION,
        }
    }
}
