//! # Keypad Input
//!
//! Typed keys for every button on the calculator, plus the translation from
//! the names a host sees (button tokens and keyboard key names) into those
//! keys. Hosts feed the result to
//! [`CalculatorEngine::press`](crate::engine::CalculatorEngine::press).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::input::{Key, InputToken};
//! use calc_core::operators::Operator;
//!
//! assert_eq!(Key::parse("pi"), Some(Key::Number(InputToken::Pi)));
//! assert_eq!(Key::from_key_name("Enter"), Some(Key::Equals));
//! assert_eq!(Key::from_key_name("*"), Some(Key::Operator(Operator::Multiply)));
//! assert_eq!(Key::from_key_name("Tab"), None);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operators::{AngleMode, Operator, TrigFunction};

/// A single entry into the operand buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputToken {
    /// A decimal digit, 0 through 9
    Digit(u8),
    /// The decimal point
    DecimalPoint,
    /// The constant π
    Pi,
}

impl InputToken {
    /// Digit token, or `None` when `digit > 9`
    pub fn digit(digit: u8) -> Option<Self> {
        (digit <= 9).then_some(InputToken::Digit(digit))
    }

    /// Token for a single keypad character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(InputToken::DecimalPoint),
            'π' => Some(InputToken::Pi),
            _ => c.to_digit(10).map(|d| InputToken::Digit(d as u8)),
        }
    }
}

impl fmt::Display for InputToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputToken::Digit(d) => write!(f, "{}", d),
            InputToken::DecimalPoint => f.write_str("."),
            InputToken::Pi => f.write_str("pi"),
        }
    }
}

/// Every action the keypad can send to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Key {
    Number(InputToken),
    Operator(Operator),
    Function(TrigFunction),
    AngleMode(AngleMode),
    Equals,
    Clear,
    Backspace,
}

impl Key {
    /// Parse a button token: `0`-`9`, `.`, `pi`, `+`, `-`, `*`, `/`, `sin`,
    /// `cos`, `tan`, `deg`, `rad`, `clear`, `backspace`, `equals`.
    pub fn parse(token: &str) -> Option<Key> {
        match token {
            "pi" => Some(Key::Number(InputToken::Pi)),
            "equals" => Some(Key::Equals),
            "clear" => Some(Key::Clear),
            "backspace" => Some(Key::Backspace),
            "deg" => Some(Key::AngleMode(AngleMode::Degrees)),
            "rad" => Some(Key::AngleMode(AngleMode::Radians)),
            _ => {
                if let Ok(op) = token.parse::<Operator>() {
                    return Some(Key::Operator(op));
                }
                if let Ok(func) = token.parse::<TrigFunction>() {
                    return Some(Key::Function(func));
                }
                single_char(token)
                    .and_then(InputToken::from_char)
                    .map(Key::Number)
            }
        }
    }

    /// Map a keyboard key name to a key.
    ///
    /// Digits, `.` and the four operators map to themselves; `Enter` and `=`
    /// calculate; `Escape`, `c` and `C` clear; `Backspace` deletes.
    pub fn from_key_name(name: &str) -> Option<Key> {
        match name {
            "Enter" | "=" => Some(Key::Equals),
            "Escape" | "c" | "C" => Some(Key::Clear),
            "Backspace" => Some(Key::Backspace),
            "+" | "-" | "*" | "/" => name.parse().ok().map(Key::Operator),
            _ => single_char(name)
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .and_then(InputToken::from_char)
                .map(Key::Number),
        }
    }

    /// Button token for this key (inverse of [`Key::parse`])
    pub fn token(&self) -> String {
        match self {
            Key::Number(token) => token.to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Function(func) => func.name().to_string(),
            Key::AngleMode(AngleMode::Degrees) => "deg".to_string(),
            Key::AngleMode(AngleMode::Radians) => "rad".to_string(),
            Key::Equals => "equals".to_string(),
            Key::Clear => "clear".to_string(),
            Key::Backspace => "backspace".to_string(),
        }
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Expand one word of a scripted key sequence into keys.
///
/// A numeric literal such as `10` or `3.25` becomes one key per character,
/// as if typed; anything else must be a single button token or key name.
pub fn keys_from_word(word: &str) -> CalcResult<Vec<Key>> {
    if let Some(key) = Key::parse(word).or_else(|| Key::from_key_name(word)) {
        return Ok(vec![key]);
    }

    let is_literal = !word.is_empty() && word.chars().all(|c| c.is_ascii_digit() || c == '.');
    if is_literal {
        return Ok(word
            .chars()
            .filter_map(InputToken::from_char)
            .map(Key::Number)
            .collect());
    }

    Err(CalcError::unknown_token("key", word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_button_vocabulary() {
        for d in 0..=9u8 {
            assert_eq!(Key::parse(&d.to_string()), Some(Key::Number(InputToken::Digit(d))));
        }
        assert_eq!(Key::parse("."), Some(Key::Number(InputToken::DecimalPoint)));
        assert_eq!(Key::parse("/"), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::parse("cos"), Some(Key::Function(TrigFunction::Cos)));
        assert_eq!(Key::parse("deg"), Some(Key::AngleMode(AngleMode::Degrees)));
        assert_eq!(Key::parse("equals"), Some(Key::Equals));
        assert_eq!(Key::parse("backspace"), Some(Key::Backspace));
        assert_eq!(Key::parse("%"), None);
        assert_eq!(Key::parse("12"), None);
    }

    #[test]
    fn test_token_roundtrip() {
        let keys = [
            Key::Number(InputToken::Digit(7)),
            Key::Number(InputToken::Pi),
            Key::Operator(Operator::Subtract),
            Key::Function(TrigFunction::Tan),
            Key::AngleMode(AngleMode::Radians),
            Key::Equals,
            Key::Clear,
            Key::Backspace,
        ];
        for key in keys {
            assert_eq!(Key::parse(&key.token()), Some(key));
        }
    }

    #[test]
    fn test_keyboard_names() {
        assert_eq!(Key::from_key_name("5"), Some(Key::Number(InputToken::Digit(5))));
        assert_eq!(Key::from_key_name("="), Some(Key::Equals));
        assert_eq!(Key::from_key_name("Enter"), Some(Key::Equals));
        assert_eq!(Key::from_key_name("Escape"), Some(Key::Clear));
        assert_eq!(Key::from_key_name("c"), Some(Key::Clear));
        assert_eq!(Key::from_key_name("C"), Some(Key::Clear));
        assert_eq!(Key::from_key_name("Backspace"), Some(Key::Backspace));
        // Function keys have no keyboard shortcut
        assert_eq!(Key::from_key_name("sin"), None);
        assert_eq!(Key::from_key_name("a"), None);
    }

    #[test]
    fn test_keys_from_word() {
        assert_eq!(
            keys_from_word("10").unwrap(),
            vec![Key::Number(InputToken::Digit(1)), Key::Number(InputToken::Digit(0))]
        );
        assert_eq!(keys_from_word("3.5").unwrap().len(), 3);
        assert_eq!(keys_from_word("=").unwrap(), vec![Key::Equals]);
        assert_eq!(keys_from_word("sin").unwrap(), vec![Key::Function(TrigFunction::Sin)]);
        assert!(keys_from_word("foo").is_err());
    }

    #[test]
    fn test_digit_bounds() {
        assert_eq!(InputToken::digit(9), Some(InputToken::Digit(9)));
        assert_eq!(InputToken::digit(10), None);
    }
}
