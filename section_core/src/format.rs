//! # Value Formatting
//!
//! One formatter for every number shown to the user, on screen or in an
//! exported CSV, so the two always agree.
//!
//! Non-zero finite values are written to three significant figures: plain
//! decimal notation when the decimal exponent is between -6 and 2, otherwise
//! `d.dde±x` (`7853.98` → `7.85e+3`). Zero and non-finite values are written
//! as `0.000`.
//!
//! ```rust
//! use section_core::format::format_value;
//!
//! assert_eq!(format_value(314.159), "314");
//! assert_eq!(format_value(7853.98), "7.85e+3");
//! assert_eq!(format_value(5.0), "5.00");
//! assert_eq!(format_value(0.0), "0.000");
//! ```

/// Significant figures used for every displayed value
pub const SIGNIFICANT_FIGURES: usize = 3;

/// Rendering of zero, NaN and ±∞
pub const ZERO_DISPLAY: &str = "0.000";

/// Smallest and largest decimal exponents written in plain notation
const MIN_FIXED_EXPONENT: i32 = -6;
const MAX_FIXED_EXPONENT: i32 = SIGNIFICANT_FIGURES as i32 - 1;

/// Digits of the decimal expansion inspected before rounding. Any double
/// that is not an exact tie differs from one well before this digit.
const EXPANSION_DIGITS: usize = 40;

/// Format a value to three significant figures.
///
/// Exact ties round up in magnitude (`12.25` → `12.3`), as a browser's
/// `toPrecision` does; Rust's own float formatting would round them to even.
pub fn format_value(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return ZERO_DISPLAY.to_string();
    }

    let Some((digits, exponent)) = round_significant(value.abs()) else {
        return ZERO_DISPLAY.to_string();
    };
    let sign = if value < 0.0 { "-" } else { "" };

    if (MIN_FIXED_EXPONENT..=MAX_FIXED_EXPONENT).contains(&exponent) {
        format!("{}{}", sign, fixed_notation(&digits, exponent))
    } else {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}.{}e{}{}", sign, &digits[..1], &digits[1..], exp_sign, exponent.abs())
    }
}

/// Round a positive finite value to [`SIGNIFICANT_FIGURES`] digits, half up.
///
/// Returns the digit string and the decimal exponent of its first digit,
/// read after rounding so a carry into the next decade (999.7 → 1.00e3)
/// is accounted for.
fn round_significant(value: f64) -> Option<(String, i32)> {
    let expansion = format!("{:.*e}", EXPANSION_DIGITS, value);
    let (mantissa, exponent) = expansion.split_once('e')?;
    let mut exponent: i32 = exponent.parse().ok()?;

    let all_digits: Vec<u32> = mantissa.chars().filter_map(|c| c.to_digit(10)).collect();
    let kept = all_digits.get(..SIGNIFICANT_FIGURES)?;
    let next = *all_digits.get(SIGNIFICANT_FIGURES)?;

    let mut rounded = kept.iter().fold(0u32, |acc, d| acc * 10 + d);
    if next >= 5 {
        rounded += 1;
    }
    if rounded == 10u32.pow(SIGNIFICANT_FIGURES as u32) {
        rounded /= 10;
        exponent += 1;
    }

    Some((rounded.to_string(), exponent))
}

/// Place the decimal point for `exponent` in [MIN_FIXED_EXPONENT, MAX_FIXED_EXPONENT].
fn fixed_notation(digits: &str, exponent: i32) -> String {
    if exponent >= 0 {
        let (int_part, frac_part) = digits.split_at(exponent as usize + 1);
        if frac_part.is_empty() {
            int_part.to_string()
        } else {
            format!("{}.{}", int_part, frac_part)
        }
    } else {
        format!("0.{}{}", "0".repeat((-exponent - 1) as usize), digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_value(5.0), "5.00");
        assert_eq!(format_value(28.867_513), "28.9");
        assert_eq!(format_value(314.159_265), "314");
        assert_eq!(format_value(0.5), "0.500");
        assert_eq!(format_value(0.000_123_45), "0.000123");
        assert_eq!(format_value(-12.345), "-12.3");
    }

    #[test]
    fn test_exponential_notation() {
        assert_eq!(format_value(7853.981_634), "7.85e+3");
        assert_eq!(format_value(1333.333_333), "1.33e+3");
        assert_eq!(format_value(10_000.0), "1.00e+4");
        assert_eq!(format_value(8_333_333.333), "8.33e+6");
        assert_eq!(format_value(250_000.0), "2.50e+5");
        assert_eq!(format_value(1.5e-7), "1.50e-7");
    }

    #[test]
    fn test_rounding_carries_into_next_decade() {
        assert_eq!(format_value(999.7), "1.00e+3");
        assert_eq!(format_value(99.97), "100");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(format_value(12.25), "12.3");
        assert_eq!(format_value(1225.0), "1.23e+3");
        assert_eq!(format_value(0.3125), "0.313");
        assert_eq!(format_value(-12.25), "-12.3");
        assert_eq!(format_value(0.125), "0.125");
        assert_eq!(format_value(99.95), "100");
    }

    #[test]
    fn test_nearest_double_below_tie_rounds_down() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(format_value(1.005), "1.00");
    }

    #[test]
    fn test_zero_and_non_finite() {
        assert_eq!(format_value(0.0), ZERO_DISPLAY);
        assert_eq!(format_value(-0.0), ZERO_DISPLAY);
        assert_eq!(format_value(f64::NAN), ZERO_DISPLAY);
        assert_eq!(format_value(f64::INFINITY), ZERO_DISPLAY);
        assert_eq!(format_value(f64::NEG_INFINITY), ZERO_DISPLAY);
    }

    #[test]
    fn test_formatting_is_idempotent() {
        for value in [314.159, 7853.98, 0.000_123_45, 28.8675, 1.0e12, -42.42, 5.0, 999.7] {
            let once = format_value(value);
            let reparsed: f64 = once.parse().unwrap();
            assert_eq!(format_value(reparsed), once, "value {}", value);
        }
    }
}
