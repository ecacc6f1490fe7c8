//! # calc_core - Scientific Calculator Engine
//!
//! `calc_core` is the computational heart of Keypad: a keystroke-driven
//! calculator with four-function arithmetic, sin/cos/tan in degrees or
//! radians, and a display projection that hosts render after every key.
//! State snapshots and errors are JSON-serializable so any front end (TUI,
//! web, scripted) can drive the same engine.
//!
//! ## Design Philosophy
//!
//! - **Owned, not ambient**: each keypad owns one [`CalculatorEngine`]
//! - **Typed vocabulary**: operators, functions and keys are enums, not strings
//! - **No panics, no thrown errors**: failures land in the state's `error` field
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{CalculatorEngine, Key};
//!
//! let mut calc = CalculatorEngine::new();
//! for token in ["1", "0", "/", "4", "equals"] {
//!     calc.press(Key::parse(token).unwrap());
//! }
//! assert_eq!(calc.display_value(), "2.5");
//!
//! // Serialize the state for a host or a log line
//! let json = serde_json::to_string(calc.state()).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`operators`] - Binary operators, trig functions, angle modes
//! - [`input`] - Keypad keys and keyboard-name mapping
//! - [`format`] - Result rounding and display truncation
//! - [`settings`] - Engine tunables loadable from config
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod format;
pub mod input;
pub mod operators;
pub mod settings;

// Re-export commonly used types at crate root for convenience
pub use engine::{CalculatorEngine, CalculatorState, Phase};
pub use errors::{CalcError, CalcResult};
pub use input::{InputToken, Key};
pub use operators::{AngleMode, Operator, TrigFunction};
pub use settings::EngineSettings;
