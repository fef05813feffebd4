//! Display formatter — canonical value to human-readable price text
//!
//! Output uses `.` for thousands grouping and `,` for decimals, with at most
//! two fractional digits. Extra digits are cut, never rounded.

use crate::MAX_FRACTION_DIGITS;

/// Format a canonical (dot-decimal) value for display
///
/// Non-digit characters in the integer part are dropped. An empty integer
/// part is shown as `0`.
///
/// # Example
/// ```
/// use pricefield_core::format;
///
/// assert_eq!(format("1234.5"), "1.234,5");
/// assert_eq!(format("1000000"), "1.000.000");
/// assert_eq!(format("12.3456"), "12,34");
/// ```
pub fn format(canonical: &str) -> String {
    if canonical.is_empty() {
        return String::new();
    }

    let mut parts = canonical.split('.');
    let integer = match parts.next() {
        Some(part) if !part.is_empty() => part,
        _ => "0",
    };
    let fraction: String = parts
        .next()
        .unwrap_or("")
        .chars()
        .take(MAX_FRACTION_DIGITS)
        .collect();

    let digits: String = integer.chars().filter(char::is_ascii_digit).collect();
    let grouped = group_thousands(&digits, '.');

    if fraction.is_empty() {
        grouped
    } else {
        format!("{},{}", grouped, fraction)
    }
}

/// Insert `separator` between every group of three digits, counted from the right
pub(crate) fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.chars().count();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
