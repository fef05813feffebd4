//! Pricefield Core - canonical handling of admin price input
//!
//! This is the single source of truth for price field semantics.
//! The CLI and the language bindings (JavaScript, Python) all call into
//! this crate and carry no logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Raw input → normalizer::normalize → Canonical value → formatter::format → Display value
//!                                           ↓
//!                                  field::submit_value → Submitted value
//! ```
//!
//! # Guarantees
//!
//! - **Total**: no operation on user text fails; "no value" is an empty result
//! - **Pure**: normalize and format are deterministic and side-effect free
//! - **Injected**: the lifecycle controller only touches the field it is given

pub mod config;
pub mod error;
pub mod field;
pub mod formatter;
pub mod label;
pub mod normalizer;

pub use config::FieldConfig;
pub use error::{Error, Result};
pub use field::{strict_canonical, submit_value, PriceField, PriceFieldController, TextField};
pub use formatter::format;
pub use label::format_price_label;
pub use normalizer::normalize;

/// Maximum number of fractional digits shown or submitted.
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Version of this crate, reported by the CLI and the bindings.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip_shorthand() {
        assert_eq!(format(&normalize("3k")), "3.000");
        assert_eq!(format(&normalize("1,5m")), "1.500.000");
        assert_eq!(format(&normalize("2.01k")), "2.009,99");
    }

    #[test]
    fn test_display_truncates_instead_of_rounding() {
        let canonical = normalize("9.999,999");
        assert_eq!(canonical, "9999.999");
        assert_eq!(format(&canonical), "9.999,99");
    }

    #[test]
    fn test_determinism_100_iterations() {
        let first = (normalize("1.234,56"), format("1234.56"));
        for i in 0..100 {
            let result = (normalize("1.234,56"), format("1234.56"));
            assert_eq!(first, result, "Non-determinism at iteration {}", i);
        }
    }
}
