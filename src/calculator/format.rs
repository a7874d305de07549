//! Display formatting for operands.

/// Digits per group in the integer part.
const GROUP_SIZE: usize = 3;

/// Formats operands for display with digit grouping in the integer part.
///
/// The fractional part is left exactly as typed, so `1234.50` stays
/// `1,234.50` while the user is still entering digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperandFormatter {
    group_separator: char,
}

impl Default for OperandFormatter {
    fn default() -> Self {
        Self::new(',')
    }
}

impl OperandFormatter {
    pub fn new(group_separator: char) -> Self {
        Self { group_separator }
    }

    /// `None` for an absent operand, the empty string for an empty one.
    pub fn format(&self, operand: Option<&str>) -> Option<String> {
        let operand = operand?;
        if operand.is_empty() {
            return Some(String::new());
        }

        let formatted = match operand.split_once('.') {
            Some((integer, decimal)) => format!("{}.{}", self.format_integer(integer), decimal),
            None => self.format_integer(operand),
        };
        Some(formatted)
    }

    fn format_integer(&self, integer: &str) -> String {
        let (sign, magnitude) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };

        if magnitude.is_empty() {
            return if sign.is_empty() { "0" } else { "NaN" }.to_string();
        }
        if magnitude == "Infinity" {
            return format!("{sign}∞");
        }

        let digits = if magnitude.bytes().all(|b| b.is_ascii_digit()) {
            match magnitude.trim_start_matches('0') {
                "" => "0".to_string(),
                trimmed => trimmed.to_string(),
            }
        } else {
            // Exponent notation such as `1e+21` is expanded to plain digits.
            match magnitude.parse::<f64>() {
                Ok(value) if value.is_finite() => format!("{:.0}", value),
                _ => return "NaN".to_string(),
            }
        };

        format!("{sign}{}", self.group(&digits))
    }

    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut grouped = String::with_capacity(len + len / GROUP_SIZE);
        for (idx, ch) in digits.chars().enumerate() {
            if idx > 0 && (len - idx) % GROUP_SIZE == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(ch);
        }
        grouped
    }
}

/// Formats with the default `,` separator.
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    OperandFormatter::default().format(operand)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_operand(Some("1234567")).as_deref(), Some("1,234,567"));
        assert_eq!(format_operand(Some("123")).as_deref(), Some("123"));
        assert_eq!(format_operand(Some("1000")).as_deref(), Some("1,000"));
    }

    #[test]
    fn decimal_part_untouched() {
        assert_eq!(format_operand(Some("1234.5")).as_deref(), Some("1,234.5"));
        assert_eq!(format_operand(Some("0.000")).as_deref(), Some("0.000"));
        assert_eq!(format_operand(Some("12.")).as_deref(), Some("12."));
    }

    #[test]
    fn absent_and_empty() {
        assert_eq!(format_operand(None), None);
        assert_eq!(format_operand(Some("")).as_deref(), Some(""));
        assert_eq!(format_operand(Some(".")).as_deref(), Some("0."));
        assert_eq!(format_operand(Some(".25")).as_deref(), Some("0.25"));
    }

    #[test]
    fn leading_zeros_dropped_in_integer_part() {
        assert_eq!(format_operand(Some("05")).as_deref(), Some("5"));
        assert_eq!(format_operand(Some("0")).as_deref(), Some("0"));
    }

    #[test]
    fn signs_and_non_finite() {
        assert_eq!(format_operand(Some("-1234.5")).as_deref(), Some("-1,234.5"));
        assert_eq!(format_operand(Some("Infinity")).as_deref(), Some("∞"));
        assert_eq!(format_operand(Some("-Infinity")).as_deref(), Some("-∞"));
        assert_eq!(format_operand(Some("NaN")).as_deref(), Some("NaN"));
    }

    #[test]
    fn exponent_results_expand() {
        assert_eq!(
            format_operand(Some("1e+21")).as_deref(),
            Some("1,000,000,000,000,000,000,000")
        );
        assert_eq!(format_operand(Some("1.5e-7")).as_deref(), Some("1.5e-7"));
    }

    #[test]
    fn custom_separator() {
        let formatter = OperandFormatter::new(' ');
        assert_eq!(formatter.format(Some("9876543.21")).as_deref(), Some("9 876 543.21"));
    }
}
