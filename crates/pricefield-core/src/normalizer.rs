//! Price normalizer — converts typed price text to a canonical value
//!
//! The canonical value uses `.` as the only decimal separator and carries no
//! grouping separators, so it can be handed to a strict numeric form field.
//!
//! # Pipeline
//!
//! `raw text → strip whitespace → shorthand? → resolve separators → canonical`
//!
//! # Separator resolution
//!
//! Rules are applied in this order and must stay in this order:
//!
//! 1. Both `.` and `,` present: European convention. Every `.` is grouping,
//!    the last `,` is the decimal separator.
//! 2. Only `,` present: the last comma is decimal when 1–2 digits follow it,
//!    otherwise every comma is grouping.
//! 3. Only `.` present: same as 2 with dots.
//! 4. Neither present: text is returned unchanged.
//!
//! There is no locale context, so `"1,234.56"` is read with rule 1 and
//! becomes `"1.23456"`.

use tracing::trace;

// ── Public API ─────────────────────────────────────────────

/// Normalize raw price text to its canonical form
///
/// Returns an empty string when the input is blank or when a value made of
/// digits, separators and an optional `k`/`m` suffix does not resolve to a
/// number (`"."`, `",k"`).
///
/// Shorthand values go through floating point and are rendered without a
/// fractional cap, so `"2.01k"` yields `"2009.9999999999998"`. Truncation to
/// two decimals happens at display and submit time.
///
/// # Example
/// ```
/// use pricefield_core::normalize;
///
/// assert_eq!(normalize("1.234,56"), "1234.56");
/// assert_eq!(normalize("2.5k"), "2500");
/// assert_eq!(normalize("  "), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return String::new();
    }

    if let Some((number, magnitude)) = split_shorthand(&compact) {
        let result = expand_shorthand(number, magnitude);
        trace!(input = raw, ?magnitude, output = %result, "normalized shorthand price");
        return result;
    }

    let (result, rule) = resolve_separators(&compact);
    trace!(input = raw, ?rule, output = %result, "normalized price");
    result
}

// ── Shorthand ──────────────────────────────────────────────

/// Magnitude suffix of a shorthand value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    /// No suffix
    Unit,
    /// `k` / `K`
    Thousands,
    /// `m` / `M`
    Millions,
}

impl Magnitude {
    fn from_suffix(c: char) -> Option<Self> {
        match c {
            'k' | 'K' => Some(Magnitude::Thousands),
            'm' | 'M' => Some(Magnitude::Millions),
            _ => None,
        }
    }

    /// Multiplier applied to the numeric portion
    pub fn factor(self) -> f64 {
        match self {
            Magnitude::Unit => 1.0,
            Magnitude::Thousands => 1_000.0,
            Magnitude::Millions => 1_000_000.0,
        }
    }
}

/// Split `text` into numeric portion and magnitude when the whole string is
/// digits, dots and commas, optionally followed by one suffix letter.
fn split_shorthand(text: &str) -> Option<(&str, Magnitude)> {
    let (number, magnitude) = match text.chars().last().and_then(Magnitude::from_suffix) {
        Some(magnitude) => (&text[..text.len() - 1], magnitude),
        None => (text, Magnitude::Unit),
    };

    let is_numeric_char = |c: char| c.is_ascii_digit() || c == '.' || c == ',';
    if number.is_empty() || !number.chars().all(is_numeric_char) {
        return None;
    }
    Some((number, magnitude))
}

fn expand_shorthand(number: &str, magnitude: Magnitude) -> String {
    let (resolved, _) = resolve_separators(number);
    match resolved.parse::<f64>() {
        Ok(value) => render_number(value * magnitude.factor()),
        Err(_) => String::new(),
    }
}

/// Render a float in plain dot-decimal notation (no exponent, no grouping)
fn render_number(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    // Display for f64 yields the shortest round-tripping digits and never
    // switches to exponent notation.
    value.to_string()
}

// ── Separator resolution ───────────────────────────────────

/// Which resolution rule was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    European,
    CommaDecimal,
    CommaGrouping,
    DotDecimal,
    DotGrouping,
    Unchanged,
}

fn resolve_separators(text: &str) -> (String, Rule) {
    let has_dot = text.contains('.');
    let has_comma = text.contains(',');

    match (has_dot, has_comma) {
        (true, true) => {
            let without_dots = text.replace('.', "");
            (promote_last(&without_dots, ','), Rule::European)
        }
        (false, true) => {
            if has_short_fraction(text, ',') {
                (promote_last(text, ','), Rule::CommaDecimal)
            } else {
                (text.replace(',', ""), Rule::CommaGrouping)
            }
        }
        (true, false) => {
            if has_short_fraction(text, '.') {
                (promote_last(text, '.'), Rule::DotDecimal)
            } else {
                (text.replace('.', ""), Rule::DotGrouping)
            }
        }
        (false, false) => (text.to_string(), Rule::Unchanged),
    }
}

/// True when 1–2 ASCII digits (and nothing else) follow the last `separator`
fn has_short_fraction(text: &str, separator: char) -> bool {
    match text.rfind(separator) {
        Some(idx) => {
            let after = &text[idx + separator.len_utf8()..];
            (1..=2).contains(&after.len()) && after.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

/// Turn the last `separator` into `.` and drop every separator before it
fn promote_last(text: &str, separator: char) -> String {
    match text.rfind(separator) {
        Some(idx) => {
            let integer: String = text[..idx]
                .chars()
                .filter(|c| *c != '.' && *c != ',')
                .collect();
            let fraction = &text[idx + separator.len_utf8()..];
            format!("{}.{}", integer, fraction)
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Blank input ────────────────────────────────────

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_only_whitespace() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\t\n "), "");
    }

    #[test]
    fn test_internal_whitespace_stripped() {
        assert_eq!(normalize(" 1 234 "), "1234");
        assert_eq!(normalize("1 234,5 "), "1234.5");
        assert_eq!(normalize("3 k"), "3000");
    }

    // ── Separator rules ────────────────────────────────

    #[test]
    fn test_european_convention() {
        assert_eq!(normalize("1.234,56"), "1234.56");
        assert_eq!(normalize("1.234.567,8"), "1234567.8");
    }

    #[test]
    fn test_us_grouping_read_as_european() {
        // Both separators present always means European; US grouping is unsupported.
        assert_eq!(normalize("1,234.56"), "1.23456");
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(normalize("12,5"), "12.5");
        assert_eq!(normalize("12,50"), "12.5");
        assert_eq!(normalize("1,234,56"), "1234.56");
    }

    #[test]
    fn test_comma_grouping() {
        assert_eq!(normalize("12,500"), "12500");
        assert_eq!(normalize("12,345"), "12345");
        assert_eq!(normalize("1,234,567"), "1234567");
    }

    #[test]
    fn test_dot_decimal() {
        assert_eq!(normalize("12.5"), "12.5");
        assert_eq!(normalize("1.234.56"), "1234.56");
        assert_eq!(normalize(".5"), "0.5");
    }

    #[test]
    fn test_dot_grouping() {
        assert_eq!(normalize("12.500"), "12500");
        assert_eq!(normalize("1.200.000"), "1200000");
    }

    #[test]
    fn test_trailing_separator_is_grouping() {
        assert_eq!(normalize("5."), "5");
        assert_eq!(normalize("5,"), "5");
    }

    #[test]
    fn test_no_separators_unchanged() {
        assert_eq!(normalize("1234"), "1234");
    }

    // ── Shorthand ──────────────────────────────────────

    #[test]
    fn test_shorthand_thousands() {
        assert_eq!(normalize("3k"), "3000");
        assert_eq!(normalize("3K"), "3000");
        assert_eq!(normalize("2.5k"), "2500");
        assert_eq!(normalize("2,5k"), "2500");
    }

    #[test]
    fn test_shorthand_millions() {
        assert_eq!(normalize("1m"), "1000000");
        assert_eq!(normalize("1,5M"), "1500000");
    }

    #[test]
    fn test_shorthand_keeps_float_noise() {
        assert_eq!(normalize("2.01k"), "2009.9999999999998");
        assert_eq!(normalize("1.005k"), "1005000");
    }

    #[test]
    fn test_shorthand_unparseable() {
        assert_eq!(normalize("."), "");
        assert_eq!(normalize(","), "");
        assert_eq!(normalize(".,k"), "");
    }

    #[test]
    fn test_shorthand_drops_leading_zeros() {
        assert_eq!(normalize("007"), "7");
    }

    #[test]
    fn test_suffix_alone_is_not_shorthand() {
        assert_eq!(normalize("k"), "k");
        assert_eq!(normalize("3kk"), "3kk");
    }

    // ── Non-shorthand text ─────────────────────────────

    #[test]
    fn test_non_numeric_text_passes_through() {
        assert_eq!(normalize("abc"), "abc");
        assert_eq!(normalize("$1.234,5"), "$1234.5");
        assert_eq!(normalize("$12,5"), "$12.5");
        assert_eq!(normalize("$12.500"), "$12500");
    }

    #[test]
    fn test_canonical_values_are_fixed_points() {
        for canonical in ["0", "7", "1234", "12.5", "1234.56", "0.05"] {
            assert_eq!(normalize(canonical), canonical);
        }
    }

    #[test]
    fn test_magnitude_factor() {
        assert_eq!(Magnitude::Unit.factor(), 1.0);
        assert_eq!(Magnitude::Thousands.factor(), 1_000.0);
        assert_eq!(Magnitude::Millions.factor(), 1_000_000.0);
    }

    #[test]
    fn test_render_number_rejects_infinity() {
        assert_eq!(render_number(f64::INFINITY), "");
        assert_eq!(render_number(2500.0), "2500");
    }
}
