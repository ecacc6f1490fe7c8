//! # Error Types
//!
//! Structured error types for calc_core. The engine never hands these to its
//! caller directly: a failed evaluation is folded into
//! [`CalculatorState::error`](crate::engine::CalculatorState::error) as the
//! error's display text. Parsing the typed vocabulary (operators, functions,
//! angle modes, keys) returns them as ordinary `Result`s.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn divide(lhs: f64, rhs: f64) -> CalcResult<f64> {
//!     if rhs == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(lhs / rhs)
//! }
//!
//! assert_eq!(divide(1.0, 0.0).unwrap_err().to_string(), "Division by zero");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Right-hand operand of `/` was exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic produced infinity or NaN
    #[error("Result out of range")]
    NonFiniteResult { value: String },

    /// The operand buffer did not parse as a number
    #[error("Invalid operand: '{value}'")]
    InvalidOperand { value: String },

    /// A token outside the calculator vocabulary
    #[error("Unknown {kind} token: '{token}'")]
    UnknownToken { kind: String, token: String },
}

impl CalcError {
    /// Create a NonFiniteResult error
    pub fn non_finite(value: f64) -> Self {
        CalcError::NonFiniteResult {
            value: value.to_string(),
        }
    }

    /// Create an InvalidOperand error
    pub fn invalid_operand(value: impl Into<String>) -> Self {
        CalcError::InvalidOperand {
            value: value.into(),
        }
    }

    /// Create an UnknownToken error
    pub fn unknown_token(kind: impl Into<String>, token: impl Into<String>) -> Self {
        CalcError::UnknownToken {
            kind: kind.into(),
            token: token.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::InvalidOperand { .. } => "INVALID_OPERAND",
            CalcError::UnknownToken { .. } => "UNKNOWN_TOKEN",
        }
    }
}
