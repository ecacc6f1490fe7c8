//! # Result Formatting
//!
//! Turns computed values into the text the engine stores, and stored text
//! into what fits on the display.
//!
//! Results are rounded to a fixed number of decimal places before they are
//! stringified so representation noise never reaches the user:
//!
//! ```rust
//! use calc_core::format::format_result;
//!
//! assert_eq!(format_result(0.1 + 0.2, 12), "0.3");
//! assert_eq!(format_result(10.0 / 4.0, 12), "2.5");
//! ```

/// Maximum number of characters shown for a plain value
pub const DEFAULT_DISPLAY_WIDTH: usize = 15;

/// Decimal places kept when a result is stored
pub const DEFAULT_RESULT_PRECISION: u32 = 12;

/// Round `value` to `precision` decimal places.
///
/// Ties round toward positive infinity (`-2.5` becomes `-2`). Values too
/// large to scale are returned unchanged; they carry no fractional digits at
/// that magnitude anyway. Negative zero collapses to zero.
pub fn round_result(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    normalize_zero(round_half_up(scaled) / scale)
}

/// `floor(x + 0.5)` without the float addition, which would turn
/// 0.49999999999999994 into 1.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Stringify a number the way the display shows it (shortest round-trip
/// decimal, never `-0`).
pub fn format_number(value: f64) -> String {
    normalize_zero(value).to_string()
}

/// Round then stringify a computed result.
pub fn format_result(value: f64, precision: u32) -> String {
    format_number(round_result(value, precision))
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Shorten a stored value to at most `width` characters.
///
/// The integer part wins over fractional digits: when it alone is too long
/// it is cut to `width` and the fraction dropped, otherwise the fraction is
/// cut to whatever remains after the integer part and the decimal point.
pub fn truncate_display(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }

    match value.split_once('.') {
        Some((integer, fraction)) => {
            let integer_len = integer.chars().count();
            if integer_len >= width {
                return integer.chars().take(width).collect();
            }
            let decimals_allowed = width - integer_len - 1;
            if decimals_allowed == 0 {
                integer.to_string()
            } else {
                let kept: String = fraction.chars().take(decimals_allowed).collect();
                format!("{}.{}", integer, kept)
            }
        }
        None => value.chars().take(width).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_suppresses_noise() {
        assert_eq!(format_result(0.1 + 0.2, 12), "0.3");
        assert_eq!(format_result(0.15 + 0.25, 12), "0.4");
        assert_eq!(format_result(1.0 - 0.9, 12), "0.1");
    }

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_result(8.0, 12), "8");
        assert_eq!(format_result(-5.0, 12), "-5");
        assert_eq!(format_result(42.0, 12), "42");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_result(-0.0, 12), "0");
        assert_eq!(format_number(-0.0), "0");
        // Tiny negative residue rounds to zero, not "-0"
        assert_eq!(format_result(-1e-17, 12), "0");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-0.5), 0.0);
        assert_eq!(round_half_up(0.49999999999999994), 0.0);
        assert_eq!(round_half_up(-1.2), -1.0);
        assert_eq!(format_result(-5e-13, 12), "0");
        assert_eq!(format_result(-2.5e-12, 12), "-0.000000000002");
    }

    #[test]
    fn test_huge_values_pass_through() {
        let big = 1e300;
        assert_eq!(round_result(big, 12), big);
    }

    #[test]
    fn test_truncate_short_value_untouched() {
        assert_eq!(truncate_display("3.5", 15), "3.5");
        assert_eq!(truncate_display("123456789012345", 15), "123456789012345");
    }

    #[test]
    fn test_truncate_fraction() {
        let value = format!("0.{}", "1".repeat(20));
        let shown = truncate_display(&value, 15);
        assert_eq!(shown, "0.1111111111111");
        assert_eq!(shown.len(), 15);

        assert_eq!(truncate_display("1234567890123.456", 15), "1234567890123.4");
    }

    #[test]
    fn test_truncate_prefers_integer_part() {
        assert_eq!(truncate_display("12345678901234.56", 15), "12345678901234");
        assert_eq!(truncate_display("1234567890123456789.5", 15), "123456789012345");
        assert_eq!(truncate_display("12345678901234567890", 15), "123456789012345");
    }
}
