//! # Price Representation
//!
//! The raw price a catalog entry carries, stored on cart lines exactly as
//! it was supplied.
//!
//! ## Why Keep It Raw?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORE RAW, NORMALIZE ON READ                                           │
//! │                                                                         │
//! │  Catalog JSON            PriceRepresentation         money::normalize   │
//! │  ────────────            ───────────────────         ────────────────   │
//! │  15          ──────────► Numeric(15.0)      ───────► 15                 │
//! │  "$15"       ──────────► Textual("$15")     ───────► 15                 │
//! │  null, none  ──────────► Absent             ───────► 0                  │
//! │  true, [..]  ──────────► Absent  (warned)   ───────► 0                  │
//! │                                                                         │
//! │  The cart never validates prices on write. Interpretation happens      │
//! │  once, in the aggregator, every time totals are read.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::warn;

/// A price as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum PriceRepresentation {
    /// Already in base currency units.
    Numeric(f64),
    /// Text such as `"$15"` or `"12.50"`.
    Textual(String),
    /// No price given.
    #[default]
    Absent,
}

impl PriceRepresentation {
    /// Returns true if no price was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, PriceRepresentation::Absent)
    }

    /// Formats the price the way the product card shows it.
    ///
    /// Numeric prices get the currency symbol and two decimals; text is
    /// shown verbatim since it already carries its own marker.
    ///
    /// ## Example
    /// ```rust
    /// use nursery_core::PriceRepresentation;
    ///
    /// assert_eq!(PriceRepresentation::from(15.0).display_with("$"), "$15.00");
    /// assert_eq!(PriceRepresentation::from("$15").display_with("$"), "$15");
    /// assert_eq!(PriceRepresentation::Absent.display_with("$"), "");
    /// ```
    pub fn display_with(&self, symbol: &str) -> String {
        match self {
            PriceRepresentation::Numeric(value) => format!("{}{:.2}", symbol, value),
            PriceRepresentation::Textual(raw) => raw.clone(),
            PriceRepresentation::Absent => String::new(),
        }
    }
}

impl fmt::Display for PriceRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(crate::DEFAULT_CURRENCY_SYMBOL))
    }
}

// =============================================================================
// Serde
// =============================================================================

impl Serialize for PriceRepresentation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PriceRepresentation::Numeric(value) => serializer.serialize_f64(*value),
            PriceRepresentation::Textual(raw) => serializer.serialize_str(raw),
            PriceRepresentation::Absent => serializer.serialize_none(),
        }
    }
}

/// Maps any JSON value onto a price.
///
/// Kinds that cannot carry a price (booleans, arrays, objects) become
/// `Absent` so a malformed catalog entry still loads.
impl From<Value> for PriceRepresentation {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => PriceRepresentation::Absent,
            Value::Number(n) => match n.as_f64() {
                Some(v) => PriceRepresentation::Numeric(v),
                None => {
                    warn!(raw = %n, "numeric price does not fit an f64, treating as absent");
                    PriceRepresentation::Absent
                }
            },
            Value::String(s) => PriceRepresentation::Textual(s),
            other => {
                warn!(raw = %other, "unsupported price kind, treating as absent");
                PriceRepresentation::Absent
            }
        }
    }
}

// =============================================================================
// Convenience Conversions
// =============================================================================

impl From<f64> for PriceRepresentation {
    fn from(value: f64) -> Self {
        PriceRepresentation::Numeric(value)
    }
}

impl From<i64> for PriceRepresentation {
    fn from(value: i64) -> Self {
        PriceRepresentation::Numeric(value as f64)
    }
}

impl From<&str> for PriceRepresentation {
    fn from(raw: &str) -> Self {
        PriceRepresentation::Textual(raw.to_string())
    }
}

impl From<String> for PriceRepresentation {
    fn from(raw: String) -> Self {
        PriceRepresentation::Textual(raw)
    }
}

impl<T: Into<PriceRepresentation>> From<Option<T>> for PriceRepresentation {
    fn from(value: Option<T>) -> Self {
        value.map_or(PriceRepresentation::Absent, Into::into)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_each_kind() {
        let prices: Vec<PriceRepresentation> =
            serde_json::from_str(r#"[15, "$15", null, 12.5]"#).unwrap();
        assert_eq!(
            prices,
            vec![
                PriceRepresentation::Numeric(15.0),
                PriceRepresentation::Textual("$15".to_string()),
                PriceRepresentation::Absent,
                PriceRepresentation::Numeric(12.5),
            ]
        );
    }

    #[test]
    fn test_unsupported_kinds_become_absent() {
        let prices: Vec<PriceRepresentation> =
            serde_json::from_str(r#"[true, {"amount": 3}, [1]]"#).unwrap();
        assert!(prices.iter().all(PriceRepresentation::is_absent));
    }

    #[test]
    fn test_serialize_keeps_raw_shape() {
        let json = serde_json::to_string(&vec![
            PriceRepresentation::Numeric(10.0),
            PriceRepresentation::Textual("$5.50".to_string()),
            PriceRepresentation::Absent,
        ])
        .unwrap();
        assert_eq!(json, r#"[10.0,"$5.50",null]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(PriceRepresentation::from(12.0).to_string(), "$12.00");
        assert_eq!(PriceRepresentation::from("$12").to_string(), "$12");
        assert_eq!(PriceRepresentation::from(None::<f64>).to_string(), "");
    }
}
