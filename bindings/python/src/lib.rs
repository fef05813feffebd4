//! Python bindings for pricefield
//!
//! Thin wrapper around `pricefield-core` — ZERO logic here.
//! Lets the Django side normalize and label prices exactly like the admin form.

use pricefield_core::FieldConfig;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Normalize typed price text to a canonical dot-decimal value.
///
/// Args:
///     raw: text as typed ("1.234,56", "2.5k", ...)
///
/// Returns:
///     Canonical value, or "" when there is no price
#[pyfunction]
fn normalize(raw: &str) -> String {
    pricefield_core::normalize(raw)
}

/// Format a canonical value for display ("1234.5" -> "1.234,5").
#[pyfunction]
fn format(canonical: &str) -> String {
    pricefield_core::format(canonical)
}

/// Value the admin form submits for `raw`.
///
/// Returns:
///     Dot-decimal string with at most two decimals, or None when the
///     field would be left untouched
#[pyfunction]
fn submit_value(raw: &str) -> Option<String> {
    pricefield_core::submit_value(raw)
}

/// Whole-amount label for templates ("1200000" -> "$1.200.000 COP").
///
/// Args:
///     value: integer amount
///     config_json: optional JSON field configuration
///
/// Returns:
///     The label, or `value` unchanged when it is not a number
///
/// Raises:
///     ValueError: If `config_json` is invalid
#[pyfunction]
#[pyo3(signature = (value, config_json=None))]
fn format_price(value: &str, config_json: Option<&str>) -> PyResult<String> {
    let config = match config_json {
        Some(text) => FieldConfig::from_json(text).map_err(|e| PyValueError::new_err(e.to_string()))?,
        None => FieldConfig::default(),
    };

    Ok(pricefield_core::format_price_label(value, &config).unwrap_or_else(|| value.to_string()))
}

/// pricefield Python module — price normalizer and labels
#[pymodule]
fn pricefield(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    m.add_function(wrap_pyfunction!(format, m)?)?;
    m.add_function(wrap_pyfunction!(submit_value, m)?)?;
    m.add_function(wrap_pyfunction!(format_price, m)?)?;
    m.add("__version__", pricefield_core::VERSION)?;
    Ok(())
}
