//! Whole-amount price labels for listings and templates (`$1.200.000 COP`)

use crate::config::FieldConfig;
use crate::formatter::group_thousands;

/// Render `value` as a labelled whole amount
///
/// `value` must be an integer, optionally signed and padded with whitespace.
/// Returns `None` for anything else, fractions included (`"1500.75"`), so the
/// caller can show the value unchanged.
///
/// # Example
/// ```
/// use pricefield_core::{format_price_label, FieldConfig};
///
/// let config = FieldConfig::default();
/// assert_eq!(format_price_label("1200000", &config).as_deref(), Some("$1.200.000 COP"));
/// assert_eq!(format_price_label("n/a", &config), None);
/// ```
pub fn format_price_label(value: &str, config: &FieldConfig) -> Option<String> {
    let (negative, amount) = parse_whole_amount(value)?;
    let sign = if negative && amount > 0 { "-" } else { "" };
    Some(format!(
        "{}{}{} {}",
        config.currency_symbol,
        sign,
        group_thousands(&amount.to_string(), '.'),
        config.currency_code
    ))
}

/// Parse `[+-]digits`
fn parse_whole_amount(value: &str) -> Option<(bool, u128)> {
    let value = value.trim();
    let (negative, unsigned) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    unsigned.parse::<u128>().ok().map(|amount| (negative, amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(value: &str) -> Option<String> {
        format_price_label(value, &FieldConfig::default())
    }

    #[test]
    fn test_label_groups_thousands() {
        assert_eq!(label("1200000").as_deref(), Some("$1.200.000 COP"));
        assert_eq!(label("950").as_deref(), Some("$950 COP"));
        assert_eq!(label("0").as_deref(), Some("$0 COP"));
    }

    #[test]
    fn test_label_rejects_fraction() {
        assert_eq!(label("1500.75"), None);
        assert_eq!(label("1500."), None);
        assert_eq!(label("1500.00"), None);
    }

    #[test]
    fn test_label_trims_and_strips_leading_zeros() {
        assert_eq!(label("  0042 ").as_deref(), Some("$42 COP"));
        assert_eq!(label("+7").as_deref(), Some("$7 COP"));
    }

    #[test]
    fn test_label_negative() {
        assert_eq!(label("-1200").as_deref(), Some("$-1.200 COP"));
        assert_eq!(label("-120").as_deref(), Some("$-120 COP"));
        assert_eq!(label("-0").as_deref(), Some("$0 COP"));
    }

    #[test]
    fn test_label_rejects_non_numbers() {
        assert_eq!(label(""), None);
        assert_eq!(label("abc"), None);
        assert_eq!(label("1.234,56"), None);
        assert_eq!(label(".5"), None);
        assert_eq!(label("--5"), None);
    }

    #[test]
    fn test_label_uses_config() {
        let config = FieldConfig {
            currency_symbol: "€".into(),
            currency_code: "EUR".into(),
            ..FieldConfig::default()
        };
        assert_eq!(
            format_price_label("2500", &config).as_deref(),
            Some("€2.500 EUR")
        );
    }
}
