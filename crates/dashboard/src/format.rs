//! Display rules for signal values. Pure functions, no view involved.
//!
//! Midpoints round away from zero, never to even: `28.125` shows as `28.13`.

pub const NOT_AVAILABLE: &str = "N/A";
pub const NO_REASONS: &str = "No specific reasons provided";

// Enough digits past the last kept one that a value which is not an exact
// binary midpoint never reads as one.
const EXACT_TAIL: usize = 40;

/// `>= 1000` gets thousands separators and 2 decimals, everything below
/// gets 6 decimals. Small-cap prices need the extra precision.
pub fn format_number(value: f64) -> String {
    if value >= 1000.0 {
        // Grouped output rounds the shortest round-trip digits, like a locale formatter.
        group_thousands(&round_half_up(&value.to_string(), 2))
    } else {
        to_fixed(value, 6)
    }
}

pub fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_number)
}

pub fn format_price(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("${}", format_number(v)))
}

pub fn format_rsi(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| to_fixed(v, 2))
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceDisplay {
    /// Whole-number percentage, e.g. `"73%"`.
    pub label: String,
    /// Unrounded percentage used for the gauge width. Not clamped.
    pub width: f64,
}

pub fn format_confidence(confidence: Option<f64>) -> ConfidenceDisplay {
    let width = confidence.unwrap_or(0.0) * 100.0;
    ConfidenceDisplay {
        label: format!("{}%", width.round()),
        width,
    }
}

pub fn format_reasons(reasons: Option<&[String]>) -> Vec<String> {
    match reasons {
        Some(reasons) if !reasons.is_empty() => reasons.to_vec(),
        _ => vec![NO_REASONS.to_string()],
    }
}

/// Rounds the exact binary value of `value` to `places` decimals.
fn to_fixed(value: f64, places: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", places + EXACT_TAIL, value.abs());
    let rounded = round_half_up(&exact, places);
    if value < 0.0 {
        format!("-{}", rounded)
    } else {
        rounded
    }
}

/// Cuts an unsigned decimal string to `places` decimals, rounding a
/// dropped `5..` up.
fn round_half_up(unsigned: &str, places: usize) -> String {
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let int_len = digits.len() - places;
    let mut out: String = digits[..int_len].iter().map(|d| char::from(*d)).collect();
    if places > 0 {
        out.push('.');
        out.extend(digits[int_len..].iter().map(|d| char::from(*d)));
    }
    out
}

fn group_thousands(fixed: &str) -> String {
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_values_get_separators_and_two_decimals() {
        assert_eq!(format_number(1000.0), "1,000.00");
        assert_eq!(format_number(43250.5), "43,250.50");
        assert_eq!(format_number(1234567.891), "1,234,567.89");
        assert_eq!(format_number(999999.999), "1,000,000.00");
    }

    #[test]
    fn test_small_values_get_six_decimals() {
        assert_eq!(format_number(999.99), "999.990000");
        assert_eq!(format_number(0.00001234), "0.000012");
        assert_eq!(format_number(0.0), "0.000000");
        assert_eq!(format_number(142.5), "142.500000");
    }

    #[test]
    fn test_decimal_counts_hold_across_range() {
        for value in [1000.0, 1500.25, 20_000.0, 98_765.4321, 12_345_678.9] {
            let out = format_number(value);
            let (_, frac) = out.split_once('.').unwrap();
            assert_eq!(frac.len(), 2, "{} -> {}", value, out);
            assert!(out.contains(','), "{} -> {}", value, out);
        }
        for value in [0.1, 1.0, 12.3456789, 999.0, -5000.0] {
            let out = format_number(value);
            let (_, frac) = out.split_once('.').unwrap();
            assert_eq!(frac.len(), 6, "{} -> {}", value, out);
        }
    }

    #[test]
    fn test_exact_midpoints_round_up() {
        assert_eq!(format_rsi(Some(28.125)), "28.13");
        assert_eq!(format_number(0.0078125), "0.007813");
        assert_eq!(format_number(-0.0078125), "-0.007813");
        assert_eq!(format_number(1000.125), "1,000.13");
    }

    #[test]
    fn test_values_just_below_midpoint_round_down() {
        // 2.675 and 1.005 are stored slightly below the printed midpoint
        assert_eq!(format_rsi(Some(2.675)), "2.67");
        assert_eq!(format_rsi(Some(1.005)), "1.00");
    }

    #[test]
    fn test_grouped_values_round_shortest_digits() {
        assert_eq!(format_number(1000.005), "1,000.01");
        assert_eq!(format_number(99_999.995), "100,000.00");
    }

    #[test]
    fn test_round_half_up_carries() {
        assert_eq!(round_half_up("9.995", 2), "10.00");
        assert_eq!(round_half_up("999", 2), "999.00");
        assert_eq!(round_half_up("0.4", 0), "0");
        assert_eq!(round_half_up("0.5", 0), "1");
    }

    #[test]
    fn test_group_thousands_keeps_sign() {
        assert_eq!(group_thousands("-1234567.00"), "-1,234,567.00");
        assert_eq!(group_thousands("123"), "123");
    }

    #[test]
    fn test_missing_values_are_placeholders() {
        assert_eq!(format_price(None), "N/A");
        assert_eq!(format_optional(None), "N/A");
        assert_eq!(format_rsi(None), "N/A");
    }

    #[test]
    fn test_price_has_dollar_prefix() {
        assert_eq!(format_price(Some(43250.5)), "$43,250.50");
        assert_eq!(format_price(Some(0.5)), "$0.500000");
    }

    #[test]
    fn test_rsi_two_decimals() {
        assert_eq!(format_rsi(Some(28.4567)), "28.46");
        assert_eq!(format_rsi(Some(70.0)), "70.00");
    }

    #[test]
    fn test_confidence_label_and_width() {
        let display = format_confidence(Some(0.734));
        assert_eq!(display.label, "73%");
        assert!((display.width - 73.4).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_rounds_to_nearest() {
        assert_eq!(format_confidence(Some(0.996)).label, "100%");
        assert_eq!(format_confidence(Some(0.994)).label, "99%");
        assert_eq!(format_confidence(Some(0.006)).label, "1%");
    }

    #[test]
    fn test_confidence_absent_is_zero() {
        let display = format_confidence(None);
        assert_eq!(display.label, "0%");
        assert_eq!(display.width, 0.0);
    }

    #[test]
    fn test_confidence_is_not_clamped() {
        let display = format_confidence(Some(1.5));
        assert_eq!(display.label, "150%");
        assert!((display.width - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_reasons_get_placeholder() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(format_reasons(Some(empty.as_slice())), vec![NO_REASONS.to_string()]);
        assert_eq!(format_reasons(None), vec![NO_REASONS.to_string()]);
    }

    #[test]
    fn test_reasons_keep_order() {
        let reasons = vec!["RSI oversold".to_string(), "EMA crossover".to_string()];
        assert_eq!(format_reasons(Some(reasons.as_slice())), reasons);
    }
}
