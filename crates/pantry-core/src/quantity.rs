//! # Quantity Module
//!
//! Turns free-form quantity text such as `"0.5 kg"` or `"2"` into a numeric
//! magnitude and a display-only unit label.
//!
//! ## Lenient Parsing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input text          parse_quantity      parse_unit                     │
//! │  ──────────          ──────────────      ──────────                     │
//! │  "0.5 kg"            0.5                 "kg"                           │
//! │  "2"                 2.0                 ""                             │
//! │  "300g"              300.0               "g"                            │
//! │  "  1.5   cups "     1.5                 "cups"                         │
//! │  "a pinch"           0.0                 "a pinch"                      │
//! │  ""                  0.0                 ""                             │
//! │                                                                         │
//! │  Unparsable text is never an error: it degrades to 0.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Units are carried for display only. No conversion is ever performed, so
//! `"500 g"` and `"0.5 kg"` are NOT equivalent here.

use serde::{Deserialize, Deserializer};

// =============================================================================
// Parsing
// =============================================================================

/// Splits `text` into the leading numeric run and the remainder.
///
/// The numeric run is digits with at most one decimal point, after any
/// leading whitespace. Returns `None` when the run contains no digit.
fn split_numeric(text: &str) -> (Option<&str>, &str) {
    let text = text.trim_start();
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut end = 0;

    for (idx, c) in text.char_indices() {
        if c.is_ascii_digit() {
            seen_digit = true;
        } else if c == '.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
        end = idx + c.len_utf8();
    }

    if seen_digit {
        (Some(&text[..end]), &text[end..])
    } else {
        (None, text)
    }
}

/// Extracts the leading numeric magnitude of a quantity string.
///
/// Returns `0.0` when the text is empty or does not start with a number.
///
/// ## Example
/// ```rust
/// use pantry_core::quantity::parse_quantity;
///
/// assert_eq!(parse_quantity("0.5 kg"), 0.5);
/// assert_eq!(parse_quantity("một ít"), 0.0);
/// ```
pub fn parse_quantity(text: &str) -> f64 {
    match split_numeric(text) {
        (Some(run), _) => run.parse::<f64>().unwrap_or(0.0),
        (None, _) => 0.0,
    }
}

/// Extracts the unit label following the numeric run, trimmed.
///
/// ## Example
/// ```rust
/// use pantry_core::quantity::parse_unit;
///
/// assert_eq!(parse_unit("0.5 kg"), "kg");
/// assert_eq!(parse_unit("2"), "");
/// ```
pub fn parse_unit(text: &str) -> String {
    let (_, rest) = split_numeric(text);
    rest.trim().to_string()
}

// =============================================================================
// Quantity Type
// =============================================================================

/// A parsed recipe quantity: magnitude plus display unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub amount: f64,
    pub unit: String,
}

impl Quantity {
    /// Parses both parts of `text` with the lenient rules above.
    pub fn parse(text: &str) -> Self {
        Quantity {
            amount: parse_quantity(text),
            unit: parse_unit(text),
        }
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredQuantity {
    Number(f64),
    Text(String),
    Missing(Option<()>),
}

/// Deserializes a stored quantity that may be a number or a string.
///
/// Strings go through [`parse_quantity`]; `null` and unparsable text become
/// `0.0`.
pub fn deserialize_lenient_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = StoredQuantity::deserialize(deserializer)?;
    Ok(match stored {
        StoredQuantity::Number(n) => n,
        StoredQuantity::Text(text) => parse_quantity(&text),
        StoredQuantity::Missing(_) => 0.0,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_with_unit() {
        assert_eq!(parse_quantity("0.5 kg"), 0.5);
        assert_eq!(parse_unit("0.5 kg"), "kg");

        assert_eq!(parse_quantity("300g"), 300.0);
        assert_eq!(parse_unit("300g"), "g");

        assert_eq!(parse_quantity("  1.5   cups  "), 1.5);
        assert_eq!(parse_unit("  1.5   cups  "), "cups");
    }

    #[test]
    fn test_bare_number() {
        assert_eq!(parse_quantity("2"), 2.0);
        assert_eq!(parse_unit("2"), "");
    }

    #[test]
    fn test_empty_and_non_numeric_are_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("   "), 0.0);
        assert_eq!(parse_quantity("a pinch"), 0.0);
        assert_eq!(parse_quantity("."), 0.0);
        assert_eq!(parse_unit("a pinch"), "a pinch");
        assert_eq!(parse_unit(""), "");
    }

    #[test]
    fn test_only_one_decimal_point() {
        assert_eq!(parse_quantity("1.2.3 kg"), 1.2);
        assert_eq!(parse_unit("1.2.3 kg"), ".3 kg");
        assert_eq!(parse_quantity(".5 l"), 0.5);
        assert_eq!(parse_quantity("5. bó"), 5.0);
    }

    #[test]
    fn test_no_sign_or_exponent() {
        assert_eq!(parse_quantity("-1 kg"), 0.0);
        assert_eq!(parse_quantity("1e3"), 1.0);
        assert_eq!(parse_unit("1e3"), "e3");
    }

    #[test]
    fn test_multibyte_unit() {
        assert_eq!(parse_quantity("3 quả"), 3.0);
        assert_eq!(parse_unit("3 quả"), "quả");
    }

    #[test]
    fn test_quantity_parse() {
        let q = Quantity::parse("0.5 kg");
        assert_eq!(q.amount, 0.5);
        assert_eq!(q.unit, "kg");

        let q = Quantity::parse("vừa đủ");
        assert_eq!(q.amount, 0.0);
        assert_eq!(q.unit, "vừa đủ");
    }

    #[test]
    fn test_lenient_deserialize() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(deserialize_with = "deserialize_lenient_quantity")]
            q: f64,
        }

        let h: Holder = serde_json::from_str(r#"{"q": 1.25}"#).unwrap();
        assert_eq!(h.q, 1.25);

        let h: Holder = serde_json::from_str(r#"{"q": "0.3 kg"}"#).unwrap();
        assert_eq!(h.q, 0.3);

        let h: Holder = serde_json::from_str(r#"{"q": "lots"}"#).unwrap();
        assert_eq!(h.q, 0.0);

        let h: Holder = serde_json::from_str(r#"{"q": null}"#).unwrap();
        assert_eq!(h.q, 0.0);
    }
}
