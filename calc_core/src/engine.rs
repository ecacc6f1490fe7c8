//! # Calculator Engine
//!
//! A keystroke-driven state machine. The engine accumulates digits into an
//! operand buffer, holds at most one pending binary operation, and evaluates
//! strictly left to right: pressing a second operator evaluates the first
//! before recording the new one, so `5 + 3 * 4 =` is `(5 + 3) * 4`.
//!
//! ## States
//!
//! ```text
//!            operator                operator (evaluates pending)
//!   Idle ──────────────▶ PendingOp ◀──────────────┐
//!    ▲                       │  └──────────────────┘
//!    │      equals / error   │
//!    └───────────────────────┘
//!    ▲
//!    └── clear (from any state)
//! ```
//!
//! Failures never escape an operation: they are recorded in
//! [`CalculatorState::error`], the operand buffer resets to `"0"`, and the
//! next digit or clear starts fresh.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::CalculatorEngine;
//! use calc_core::input::InputToken;
//! use calc_core::operators::Operator;
//!
//! let mut calc = CalculatorEngine::new();
//! calc.input_number(InputToken::Digit(5));
//! calc.handle_operator(Operator::Add);
//! calc.input_number(InputToken::Digit(3));
//! assert_eq!(calc.display_value(), "5 + 3");
//!
//! calc.calculate();
//! assert_eq!(calc.display_value(), "8");
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{CalcError, CalcResult};
use crate::format::{format_number, format_result, truncate_display};
use crate::input::{InputToken, Key};
use crate::operators::{AngleMode, Operator, TrigFunction};
use crate::settings::EngineSettings;

/// Complete calculator state, as rendered by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed, or the last result, as text. Never empty.
    pub current_value: String,

    /// Left-hand operand of the pending operation
    pub previous_value: Option<f64>,

    /// Pending binary operator
    pub operator: Option<Operator>,

    /// True right after an operator, function, pi or equals: the next digit
    /// replaces `current_value` instead of extending it.
    pub waiting_for_operand: bool,

    /// Unit for trigonometric arguments
    pub angle_mode: AngleMode,

    /// Message of the last failed operation
    pub error: Option<String>,
}

impl CalculatorState {
    /// Idle state with an empty (`"0"`) operand
    pub fn new(angle_mode: AngleMode) -> Self {
        CalculatorState {
            current_value: "0".to_string(),
            previous_value: None,
            operator: None,
            waiting_for_operand: false,
            angle_mode,
            error: None,
        }
    }

    /// Which state-machine phase these fields encode
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Error
        } else if self.operator.is_some() {
            Phase::PendingOperation
        } else {
            Phase::Idle
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        CalculatorState::new(AngleMode::default())
    }
}

/// Coarse state derived from [`CalculatorState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No operation pending
    Idle,
    /// An operator and left operand are waiting for a right operand
    PendingOperation,
    /// The last operation failed; the display shows the error
    Error,
}

/// The calculator. One instance per keypad, owned by its host.
#[derive(Debug, Clone)]
pub struct CalculatorEngine {
    state: CalculatorState,
    settings: EngineSettings,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        CalculatorEngine::new()
    }
}

impl CalculatorEngine {
    /// Create an engine with default settings (radians, 15-character display).
    pub fn new() -> Self {
        CalculatorEngine::with_settings(EngineSettings::default())
    }

    /// Create an engine with the given settings.
    pub fn with_settings(settings: EngineSettings) -> Self {
        CalculatorEngine {
            state: CalculatorState::new(settings.default_angle_mode),
            settings,
        }
    }

    /// Current state
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Owned copy of the current state; later input does not affect it
    pub fn snapshot(&self) -> CalculatorState {
        self.state.clone()
    }

    /// Settings this engine was built with
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Dispatch a keypad key to the matching operation.
    pub fn press(&mut self, key: Key) -> &CalculatorState {
        match key {
            Key::Number(token) => self.input_number(token),
            Key::Operator(op) => self.handle_operator(op),
            Key::Function(func) => self.handle_scientific_function(func),
            Key::AngleMode(mode) => self.set_angle_mode(mode),
            Key::Equals => self.calculate(),
            Key::Clear => self.clear(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Enter a digit, the decimal point, or π.
    ///
    /// A digit typed onto a bare `"0"` replaces it. A second decimal point in
    /// the same operand is ignored. π fills the buffer and, like a result,
    /// is replaced by the next digit.
    pub fn input_number(&mut self, token: InputToken) -> &CalculatorState {
        let state = &mut self.state;
        match token {
            InputToken::Pi => {
                state.current_value = format_number(PI);
                state.waiting_for_operand = true;
            }
            InputToken::DecimalPoint => {
                if state.waiting_for_operand {
                    state.current_value = "0.".to_string();
                    state.waiting_for_operand = false;
                } else if !state.current_value.contains('.') {
                    state.current_value.push('.');
                }
            }
            InputToken::Digit(digit) if digit > 9 => {
                warn!(digit, "ignoring out-of-range digit");
                return &self.state;
            }
            InputToken::Digit(digit) => {
                let digit = char::from(b'0' + digit);
                if state.waiting_for_operand {
                    state.current_value = digit.to_string();
                    state.waiting_for_operand = false;
                } else if state.current_value == "0" {
                    state.current_value = digit.to_string();
                } else {
                    state.current_value.push(digit);
                }
            }
        }
        state.error = None;
        debug!(token = %token, current = %state.current_value, "input");
        &self.state
    }

    /// Apply a binary operator.
    ///
    /// With nothing pending, the current value becomes the left operand.
    /// With an operation already pending, it is evaluated first and its
    /// result becomes the left operand of `op`.
    pub fn handle_operator(&mut self, op: Operator) -> &CalculatorState {
        let input = match self.current_operand() {
            Ok(value) => value,
            Err(err) => {
                self.fail(err);
                return &self.state;
            }
        };

        if self.state.previous_value.is_some() && self.state.operator.is_some() {
            match self.perform_calculation() {
                Ok(result) => {
                    self.state.current_value = self.format(result);
                    self.state.previous_value = Some(result);
                }
                Err(err) => {
                    self.fail(err);
                    return &self.state;
                }
            }
        } else {
            self.state.previous_value = Some(input);
        }

        self.state.waiting_for_operand = true;
        self.state.operator = Some(op);
        self.state.error = None;
        debug!(operator = %op, left = ?self.state.previous_value, "operator");
        &self.state
    }

    /// Finish the pending operation (the `=` key). No-op when nothing is pending.
    pub fn calculate(&mut self) -> &CalculatorState {
        if self.state.previous_value.is_none() || self.state.operator.is_none() {
            return &self.state;
        }

        match self.perform_calculation() {
            Ok(result) => {
                self.state.current_value = self.format(result);
                self.state.previous_value = None;
                self.state.operator = None;
                self.state.waiting_for_operand = true;
                self.state.error = None;
                debug!(result = %self.state.current_value, "calculate");
            }
            Err(err) => self.fail(err),
        }
        &self.state
    }

    /// Apply sin, cos or tan to the current value in the current angle mode.
    pub fn handle_scientific_function(&mut self, func: TrigFunction) -> &CalculatorState {
        let result = self
            .current_operand()
            .map(|x| func.evaluate(x, self.state.angle_mode))
            .and_then(ensure_finite);

        match result {
            Ok(value) => {
                self.state.current_value = self.format(value);
                self.state.waiting_for_operand = true;
                self.state.error = None;
                debug!(
                    function = %func,
                    mode = %self.state.angle_mode,
                    result = %self.state.current_value,
                    "scientific function"
                );
            }
            Err(err) => self.record_error(err),
        }
        &self.state
    }

    /// Reset to the idle state.
    ///
    /// The angle mode survives unless `preserve_angle_mode_on_clear` is off.
    pub fn clear(&mut self) -> &CalculatorState {
        let angle_mode = if self.settings.preserve_angle_mode_on_clear {
            self.state.angle_mode
        } else {
            self.settings.default_angle_mode
        };
        self.state = CalculatorState::new(angle_mode);
        debug!(mode = %angle_mode, "clear");
        &self.state
    }

    /// Delete the last typed character.
    ///
    /// When the buffer holds a result rather than typed input, this clears.
    pub fn backspace(&mut self) -> &CalculatorState {
        if self.state.waiting_for_operand {
            return self.clear();
        }

        let current = &mut self.state.current_value;
        current.pop();
        if current.is_empty() || current.as_str() == "-" {
            *current = "0".to_string();
        }
        self.state.error = None;
        debug!(current = %self.state.current_value, "backspace");
        &self.state
    }

    /// Select degrees or radians for trigonometric functions.
    pub fn set_angle_mode(&mut self, mode: AngleMode) -> &CalculatorState {
        self.state.angle_mode = mode;
        debug!(mode = %mode, "angle mode");
        &self.state
    }

    /// Text for the display.
    ///
    /// Shows the error if one is set, the whole expression while the right
    /// operand is being typed, and otherwise the current value cut to the
    /// display width.
    pub fn display_value(&self) -> String {
        let state = &self.state;
        if let Some(error) = &state.error {
            return error.clone();
        }

        if let (Some(previous), Some(op)) = (state.previous_value, state.operator) {
            if !state.waiting_for_operand {
                return format!("{} {} {}", format_number(previous), op, state.current_value);
            }
        }

        truncate_display(&state.current_value, self.settings.display_width)
    }

    /// The operand buffer as a number. Digit strings too long for `f64`
    /// parse to infinity and are rejected.
    fn current_operand(&self) -> CalcResult<f64> {
        let text = &self.state.current_value;
        text.parse::<f64>()
            .map_err(|_| CalcError::invalid_operand(text.as_str()))
            .and_then(ensure_finite)
    }

    /// Evaluate `previous <op> current`, or just the current value when
    /// nothing is pending.
    fn perform_calculation(&self) -> CalcResult<f64> {
        let current = self.current_operand()?;
        match (self.state.previous_value, self.state.operator) {
            (Some(previous), Some(op)) => ensure_finite(op.apply(previous, current)?),
            _ => Ok(current),
        }
    }

    fn format(&self, value: f64) -> String {
        format_result(value, self.settings.result_precision)
    }

    fn record_error(&mut self, err: CalcError) {
        warn!(code = err.error_code(), "{}", err);
        self.state.error = Some(err.to_string());
        self.state.current_value = "0".to_string();
    }

    /// Record the error and drop the pending operation.
    fn fail(&mut self, err: CalcError) {
        self.record_error(err);
        self.state.previous_value = None;
        self.state.operator = None;
    }
}

fn ensure_finite(value: f64) -> CalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::non_finite(value))
    }
}
