//! Price field lifecycle — focus, blur and submit handlers
//!
//! The controller receives the field it works on; it never looks anything
//! up itself. Hosts implement [`PriceField`] for their input widget (the
//! wasm binding does so for `HTMLInputElement`) and call the three handlers
//! from their event loop.
//!
//! | Event  | Field text becomes                                    |
//! |--------|-------------------------------------------------------|
//! | focus  | `normalize(text)`, unless that is empty               |
//! | blur   | `format(normalize(text))`, when that is a number      |
//! | submit | [`submit_value`], unless normalization is empty       |

use tracing::debug;

use crate::formatter::format;
use crate::normalizer::normalize;
use crate::MAX_FRACTION_DIGITS;

/// Text access to a single price input
pub trait PriceField {
    /// Current text of the field
    fn text(&self) -> String;

    /// Replace the text of the field
    fn set_text(&mut self, text: &str);
}

/// In-memory field, used by the CLI and in tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    text: String,
}

impl TextField {
    pub fn new(text: impl Into<String>) -> Self {
        TextField { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl PriceField for TextField {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }
}

/// Applies the normalizer to one injected price field
#[derive(Debug)]
pub struct PriceFieldController<F> {
    field: F,
}

impl<F: PriceField> PriceFieldController<F> {
    pub fn new(field: F) -> Self {
        PriceFieldController { field }
    }

    pub fn field(&self) -> &F {
        &self.field
    }

    pub fn into_inner(self) -> F {
        self.field
    }

    /// Show the canonical, editable value
    pub fn on_focus(&mut self) {
        let normalized = normalize(&self.field.text());
        if normalized.is_empty() {
            return;
        }
        debug!(value = %normalized, "focus: showing canonical value");
        self.field.set_text(&normalized);
    }

    /// Show the grouped display value
    pub fn on_blur(&mut self) {
        let normalized = normalize(&self.field.text());
        if normalized.is_empty() || !is_number(&normalized) {
            return;
        }
        let shown = format(&normalized);
        debug!(value = %shown, "blur: showing display value");
        self.field.set_text(&shown);
    }

    /// Rewrite the field with the value the server will receive
    pub fn on_submit(&mut self) {
        if let Some(value) = submit_value(&self.field.text()) {
            debug!(value = %value, "submit: writing canonical value");
            self.field.set_text(&value);
        }
    }
}

/// Value submitted for `raw`, or `None` when the field should be left alone
///
/// # Example
/// ```
/// use pricefield_core::submit_value;
///
/// assert_eq!(submit_value("1.234,567").as_deref(), Some("1234.56"));
/// assert_eq!(submit_value("3k").as_deref(), Some("3000"));
/// assert_eq!(submit_value(" "), None);
/// ```
pub fn submit_value(raw: &str) -> Option<String> {
    let normalized = normalize(raw);
    if normalized.is_empty() {
        return None;
    }
    Some(strict_canonical(&normalized))
}

/// Cap a normalized value at two fractional digits
///
/// Values that are not `digits[.digits]` are reduced to their digits and dots.
pub fn strict_canonical(normalized: &str) -> String {
    match split_decimal(normalized) {
        Some((integer, fraction)) => {
            let fraction: String = fraction.chars().take(MAX_FRACTION_DIGITS).collect();
            if fraction.is_empty() {
                integer.to_string()
            } else {
                format!("{}.{}", integer, fraction)
            }
        }
        None => normalized
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect(),
    }
}

/// Split `digits` or `digits.digits` into its parts
fn split_decimal(text: &str) -> Option<(&str, &str)> {
    let (integer, fraction) = match text.split_once('.') {
        Some((_, "")) => return None,
        Some(parts) => parts,
        None => (text, ""),
    };
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if integer.is_empty() || !is_digits(integer) || !is_digits(fraction) {
        return None;
    }
    Some((integer, fraction))
}

/// True when `text` reads as a decimal number literal (`12`, `.5`, `-3e2`, `Infinity`)
///
/// Hex, octal and binary literals (`0x1A`, `0o17`, `0b101`) are not numbers
/// here; blur leaves such text as typed.
fn is_number(text: &str) -> bool {
    let text = text.trim();
    let unsigned = text
        .strip_prefix(|c: char| c == '+' || c == '-')
        .unwrap_or(text);
    if unsigned == "Infinity" {
        return true;
    }

    let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
        Some(idx) => (&unsigned[..idx], Some(&unsigned[idx + 1..])),
        None => (unsigned, None),
    };
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let exp = exp.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(exp);
            !exp.is_empty() && is_digits(exp)
        }
    }
}
