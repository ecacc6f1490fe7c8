//! # Operators and Functions
//!
//! The fixed vocabulary the engine computes with: four binary operators,
//! three trigonometric functions, and the angle unit those functions read
//! their argument in. Each type parses from the short token a keypad button
//! carries and serializes back to it.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::operators::{AngleMode, Operator, TrigFunction};
//!
//! let op: Operator = "*".parse().unwrap();
//! assert_eq!(op.apply(6.0, 7.0).unwrap(), 42.0);
//!
//! let sin: TrigFunction = "sin".parse().unwrap();
//! assert!((sin.evaluate(90.0, AngleMode::Degrees) - 1.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Binary Operators
// ============================================================================

/// A pending binary operation between the accumulated value and a new operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "*")]
    Multiply,
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators, in keypad order
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Keypad symbol for this operator
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Evaluate `lhs <op> rhs`.
    ///
    /// Division by an exact zero is an error rather than infinity.
    pub fn apply(&self, lhs: f64, rhs: f64) -> CalcResult<f64> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Subtract => Ok(lhs - rhs),
            Operator::Multiply => Ok(lhs * rhs),
            Operator::Divide => {
                if rhs == 0.0 {
                    Err(CalcError::DivisionByZero)
                } else {
                    Ok(lhs / rhs)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            "*" => Ok(Operator::Multiply),
            "/" => Ok(Operator::Divide),
            other => Err(CalcError::unknown_token("operator", other)),
        }
    }
}

// ============================================================================
// Angle Mode
// ============================================================================

/// Unit used to interpret trigonometric arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AngleMode {
    #[serde(rename = "deg", alias = "degrees")]
    Degrees,
    #[default]
    #[serde(rename = "rad", alias = "radians")]
    Radians,
}

impl AngleMode {
    /// Short label shown on the keypad ("DEG" / "RAD")
    pub fn label(&self) -> &'static str {
        match self {
            AngleMode::Degrees => "DEG",
            AngleMode::Radians => "RAD",
        }
    }

    /// Convert an argument in this unit to radians
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self {
            AngleMode::Degrees => angle * (std::f64::consts::PI / 180.0),
            AngleMode::Radians => angle,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AngleMode {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "deg" | "degrees" => Ok(AngleMode::Degrees),
            "rad" | "radians" => Ok(AngleMode::Radians),
            _ => Err(CalcError::unknown_token("angle mode", s)),
        }
    }
}

// ============================================================================
// Scientific Functions
// ============================================================================

/// Trigonometric function applied to the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    /// Function name as printed on the keypad
    pub fn name(&self) -> &'static str {
        match self {
            TrigFunction::Sin => "sin",
            TrigFunction::Cos => "cos",
            TrigFunction::Tan => "tan",
        }
    }

    /// Evaluate the function with `x` interpreted in `mode`.
    pub fn evaluate(&self, x: f64, mode: AngleMode) -> f64 {
        let radians = mode.to_radians(x);
        match self {
            TrigFunction::Sin => radians.sin(),
            TrigFunction::Cos => radians.cos(),
            TrigFunction::Tan => radians.tan(),
        }
    }
}

impl fmt::Display for TrigFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TrigFunction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sin" => Ok(TrigFunction::Sin),
            "cos" => Ok(TrigFunction::Cos),
            "tan" => Ok(TrigFunction::Tan),
            other => Err(CalcError::unknown_token("function", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_operator_parse() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>().unwrap(), op);
        }
        assert!("%".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(5.0, 3.0).unwrap(), 8.0);
        // Previous minus current
        assert_eq!(Operator::Subtract.apply(5.0, 10.0).unwrap(), -5.0);
        assert_eq!(Operator::Multiply.apply(6.0, 7.0).unwrap(), 42.0);
        assert_eq!(Operator::Divide.apply(10.0, 4.0).unwrap(), 2.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Operator::Divide.apply(10.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Divide.apply(10.0, -0.0), Err(CalcError::DivisionByZero));
        // Multiplying by zero is fine
        assert_eq!(Operator::Multiply.apply(10.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_angle_mode_parse() {
        assert_eq!("deg".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
        assert_eq!("RAD".parse::<AngleMode>().unwrap(), AngleMode::Radians);
        assert_eq!("degrees".parse::<AngleMode>().unwrap(), AngleMode::Degrees);
        assert!("grad".parse::<AngleMode>().is_err());
        assert_eq!(AngleMode::default(), AngleMode::Radians);
    }

    #[test]
    fn test_trig_radians() {
        assert!((TrigFunction::Cos.evaluate(PI, AngleMode::Radians) + 1.0).abs() < 1e-12);
        assert!((TrigFunction::Tan.evaluate(PI / 4.0, AngleMode::Radians) - 1.0).abs() < 1e-12);
        assert!((TrigFunction::Sin.evaluate(1.0, AngleMode::Radians) - 1.0_f64.sin()).abs() < 1e-15);
    }

    #[test]
    fn test_trig_degrees() {
        assert!((TrigFunction::Sin.evaluate(90.0, AngleMode::Degrees) - 1.0).abs() < 1e-12);
        assert!((TrigFunction::Cos.evaluate(180.0, AngleMode::Degrees) + 1.0).abs() < 1e-12);
        assert!((TrigFunction::Tan.evaluate(45.0, AngleMode::Degrees) - 1.0).abs() < 1e-12);
        assert!((TrigFunction::Sin.evaluate(30.0, AngleMode::Degrees) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_serialization() {
        assert_eq!(serde_json::to_string(&Operator::Divide).unwrap(), "\"/\"");
        assert_eq!(serde_json::to_string(&AngleMode::Degrees).unwrap(), "\"deg\"");
        assert_eq!(serde_json::to_string(&TrigFunction::Tan).unwrap(), "\"tan\"");
        let mode: AngleMode = serde_json::from_str("\"radians\"").unwrap();
        assert_eq!(mode, AngleMode::Radians);
    }
}
