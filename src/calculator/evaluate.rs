//! Arithmetic on operand strings.

use crate::calculator::input::Operation;

/// Magnitudes at or above this are rendered in exponent notation.
const EXPONENT_UPPER: f64 = 1e21;
/// Non-zero magnitudes below this are rendered in exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Computes `previous <operation> current` and returns the result as a
/// canonical number string.
///
/// Returns an empty string if either operand has no numeric prefix.
/// Division by zero is not an error: it yields `Infinity`, `-Infinity`
/// or `NaN`.
pub fn evaluate(previous: &str, current: &str, operation: Operation) -> String {
    let (Some(lhs), Some(rhs)) = (parse_operand(previous), parse_operand(current)) else {
        return String::new();
    };
    number_to_string(operation.apply(lhs, rhs))
}

/// Parses the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped, an optional sign is accepted, and the
/// word `Infinity` counts as a number. Anything after the prefix is
/// ignored, so `"12abc"` parses as 12. `None` when no digits are found or
/// the value is NaN.
pub fn parse_operand(input: &str) -> Option<f64> {
    let trimmed = input.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    if trimmed[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let integer_digits = count_digits(&bytes[end..]);
    end += integer_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Renders `value` the way a calculator display expects: no trailing
/// `.0`, shortest round-trip digits, exponent notation for very large or
/// very small magnitudes.
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Also covers -0.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => scientific,
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(evaluate("5", "3", Operation::Add), "8");
        assert_eq!(evaluate("5", "8", Operation::Subtract), "-3");
        assert_eq!(evaluate("2.5", "4", Operation::Multiply), "10");
        assert_eq!(evaluate("7", "2", Operation::Divide), "3.5");
    }

    #[test]
    fn float_noise_is_kept() {
        assert_eq!(evaluate("0.1", "0.2", Operation::Add), "0.30000000000000004");
    }

    #[test]
    fn division_by_zero_is_not_an_error() {
        assert_eq!(evaluate("6", "0", Operation::Divide), "Infinity");
        assert_eq!(evaluate("-6", "0", Operation::Divide), "-Infinity");
        assert_eq!(evaluate("0", "0", Operation::Divide), "NaN");
    }

    #[test]
    fn unparseable_operand_yields_empty() {
        assert_eq!(evaluate(".", "3", Operation::Add), "");
        assert_eq!(evaluate("3", "", Operation::Add), "");
        assert_eq!(evaluate("NaN", "3", Operation::Add), "");
    }

    #[test]
    fn parses_numeric_prefix() {
        assert_eq!(parse_operand("5."), Some(5.0));
        assert_eq!(parse_operand(".5"), Some(0.5));
        assert_eq!(parse_operand("  12abc"), Some(12.0));
        assert_eq!(parse_operand("1e3"), Some(1000.0));
        assert_eq!(parse_operand("2e"), Some(2.0));
        assert_eq!(parse_operand("1.5e-7"), Some(1.5e-7));
        assert_eq!(parse_operand("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("abc"), None);
    }

    #[test]
    fn results_feed_back_as_operands() {
        let big = evaluate("1000000000000", "1000000000000", Operation::Multiply);
        assert_eq!(big, "1e+24");
        assert_eq!(evaluate(&big, "1", Operation::Multiply), "1e+24");
        assert_eq!(evaluate("Infinity", "3", Operation::Add), "Infinity");
    }

    #[test]
    fn canonical_number_strings() {
        assert_eq!(number_to_string(8.0), "8");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(123456789012345680000.0), "123456789012345680000");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1.5e-7), "1.5e-7");
        assert_eq!(number_to_string(f64::NAN), "NaN");
    }
}
