//! # Money Module
//!
//! Turns raw [`PriceRepresentation`]s into exact amounts, and provides the
//! `Money` type used to show rounded amounts.
//!
//! ## Two Kinds of Number
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  NormalizedAmount (rust_decimal::Decimal)                               │
//! │    Exact, unrounded. What normalize() returns and what the cart        │
//! │    total is summed from. Never stored on a cart line.                  │
//! │                                                                         │
//! │  Money (integer cents)                                                  │
//! │    Rounded half-up to 2 places. Only produced at the display           │
//! │    boundary: one line total, or the cart total after summing.          │
//! │                                                                         │
//! │  In binary floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │  With Decimal:                                                         │
//! │    0.1 + 0.2 = 0.3                  ✅                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use nursery_core::money::{normalize, Money};
//! use nursery_core::PriceRepresentation;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(normalize(&PriceRepresentation::from("$15")), Decimal::from(15));
//! assert_eq!(normalize(&PriceRepresentation::from("abc")), Decimal::ZERO);
//!
//! let shown = Money::from_decimal(Decimal::new(35_505, 3)); // 35.505
//! assert_eq!(shown.to_string(), "$35.51");
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;
use ts_rs::TS;

use crate::error::PriceError;
use crate::price::PriceRepresentation;
use crate::{DEFAULT_CURRENCY_MARKER, DEFAULT_CURRENCY_SYMBOL, DISPLAY_DECIMALS};

/// A non-negative price in base currency units, derived on read.
pub type NormalizedAmount = Decimal;

// =============================================================================
// Normalizer
// =============================================================================

/// Interprets price representations.
///
/// Holds the one currency marker that may prefix a textual price. The
/// default marker is `$`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceNormalizer {
    currency_marker: char,
}

impl PriceNormalizer {
    /// Creates a normalizer that strips `currency_marker` from text prices.
    pub const fn new(currency_marker: char) -> Self {
        PriceNormalizer { currency_marker }
    }

    /// The marker stripped from the front of textual prices.
    pub const fn currency_marker(&self) -> char {
        self.currency_marker
    }

    /// Reads a price strictly, reporting why it is not a plain amount.
    ///
    /// ## Rules
    /// - `Absent` → 0
    /// - `Numeric` → the value itself; NaN/∞, negatives, and magnitudes
    ///   beyond `Decimal::MAX` (about 7.9e28) are errors
    /// - `Textual` → leading whitespace skipped, at most one leading
    ///   currency marker stripped, whitespace skipped again, then the
    ///   longest numeric prefix is read (`15`, `5.50`, `.5`, `1.5e1`).
    ///   Anything after the prefix is ignored: `"12.50 each"` is 12.5 and
    ///   `"1_000"` is 1. No numeric prefix at all is `Unparseable`.
    pub fn try_normalize(&self, price: &PriceRepresentation) -> Result<NormalizedAmount, PriceError> {
        let amount = match price {
            PriceRepresentation::Absent => return Ok(Decimal::ZERO),
            PriceRepresentation::Numeric(value) if !value.is_finite() => {
                return Err(PriceError::NonFinite { value: *value });
            }
            PriceRepresentation::Numeric(value) => {
                Decimal::from_f64(*value).ok_or_else(|| PriceError::OutOfRange {
                    raw: value.to_string(),
                })?
            }
            PriceRepresentation::Textual(raw) => self.parse_text(raw)?,
        };

        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative {
                raw: amount.to_string(),
            });
        }

        Ok(amount.normalize())
    }

    /// Reads a price, degrading anything malformed to zero.
    ///
    /// Negative prices are clamped to zero. Every substitution is logged as
    /// a data-quality warning; none of them interrupt aggregation.
    pub fn normalize(&self, price: &PriceRepresentation) -> NormalizedAmount {
        match self.try_normalize(price) {
            Ok(amount) => amount,
            Err(err) => {
                warn!(error = %err, "price degraded to zero");
                Decimal::ZERO
            }
        }
    }

    fn parse_text(&self, raw: &str) -> Result<Decimal, PriceError> {
        let trimmed = raw.trim_start();
        let rest = trimmed
            .strip_prefix(self.currency_marker)
            .unwrap_or(trimmed)
            .trim_start();

        let unparseable = || PriceError::Unparseable {
            raw: raw.to_string(),
        };
        let out_of_range = || PriceError::OutOfRange {
            raw: raw.to_string(),
        };

        let literal = NumericPrefix::scan(rest).ok_or_else(unparseable)?;
        let mantissa = Decimal::from_str(&literal.mantissa).map_err(|_| out_of_range())?;
        scale_by_power_of_ten(mantissa, literal.exponent).ok_or_else(out_of_range)
    }
}

// =============================================================================
// Numeric Prefix Scanner
// =============================================================================

/// Longest leading `[+-]?digits[.digits][e[+-]digits]` of a price string,
/// split into a canonical mantissa (`-12.5`, `0.5`) and a power of ten.
#[derive(Debug, PartialEq, Eq)]
struct NumericPrefix {
    mantissa: String,
    exponent: i32,
}

impl NumericPrefix {
    /// Returns `None` when the text does not start with a number.
    fn scan(text: &str) -> Option<Self> {
        let bytes = text.as_bytes();
        let mut pos = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                pos += 1;
                true
            }
            Some(b'+') => {
                pos += 1;
                false
            }
            _ => false,
        };

        let int_start = pos;
        pos += count_digits(&bytes[pos..]);
        let int_digits = &text[int_start..pos];

        let mut frac_digits = "";
        if bytes.get(pos) == Some(&b'.') {
            let frac_start = pos + 1;
            let frac_len = count_digits(&bytes[frac_start..]);
            frac_digits = &text[frac_start..frac_start + frac_len];
            if !(int_digits.is_empty() && frac_digits.is_empty()) {
                pos = frac_start + frac_len;
            }
        }

        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        // An exponent only counts when at least one digit follows it
        let mut exponent: i32 = 0;
        if matches!(bytes.get(pos), Some(b'e' | b'E')) {
            let mut exp_pos = pos + 1;
            let exp_negative = match bytes.get(exp_pos) {
                Some(b'-') => {
                    exp_pos += 1;
                    true
                }
                Some(b'+') => {
                    exp_pos += 1;
                    false
                }
                _ => false,
            };
            let exp_len = count_digits(&bytes[exp_pos..]);
            if exp_len > 0 {
                let magnitude = text[exp_pos..exp_pos + exp_len]
                    .parse::<i32>()
                    .unwrap_or(i32::MAX);
                exponent = if exp_negative { -magnitude } else { magnitude };
            }
        }

        let mut mantissa = String::with_capacity(int_digits.len() + frac_digits.len() + 3);
        if negative {
            mantissa.push('-');
        }
        mantissa.push_str(if int_digits.is_empty() { "0" } else { int_digits });
        if !frac_digits.is_empty() {
            mantissa.push('.');
            mantissa.push_str(frac_digits);
        }

        Some(NumericPrefix { mantissa, exponent })
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// `mantissa × 10^exponent`, or `None` if it overflows.
///
/// Negative exponents past the decimal precision underflow toward zero.
fn scale_by_power_of_ten(mantissa: Decimal, exponent: i32) -> Option<Decimal> {
    if mantissa.is_zero() {
        return Some(Decimal::ZERO);
    }

    let mut value = mantissa;
    if exponent >= 0 {
        for _ in 0..exponent {
            value = value.checked_mul(Decimal::TEN)?;
        }
    } else {
        for _ in 0..exponent.unsigned_abs().min(64) {
            value = value.checked_div(Decimal::TEN)?;
            if value.is_zero() {
                break;
            }
        }
    }
    Some(value)
}

impl Default for PriceNormalizer {
    fn default() -> Self {
        PriceNormalizer::new(DEFAULT_CURRENCY_MARKER)
    }
}

/// Normalizes with the default `$` marker. See [`PriceNormalizer::normalize`].
pub fn normalize(price: &PriceRepresentation) -> NormalizedAmount {
    PriceNormalizer::default().normalize(price)
}

/// Strict normalization with the default `$` marker.
pub fn try_normalize(price: &PriceRepresentation) -> Result<NormalizedAmount, PriceError> {
    PriceNormalizer::default().try_normalize(price)
}

/// Rounds an amount half-up (away from zero) to display precision.
///
/// ## Example
/// ```rust
/// use nursery_core::money::round_for_display;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_for_display(Decimal::new(1_005, 3)), Decimal::new(101, 2)); // 1.005 → 1.01
/// assert_eq!(round_for_display(Decimal::new(1_004, 3)), Decimal::new(100, 2)); // 1.004 → 1.00
/// ```
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

// =============================================================================
// Money Type
// =============================================================================

/// A rounded amount in the smallest currency unit (cents).
///
/// ## Where Money is Used
/// ```text
/// normalize(price) × quantity ──► line_total ──► Money ──► "$30.00" on the line
///
/// Σ normalize(price) × quantity ──► cart_total ──► Money ──► "Total: $35.50"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use nursery_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Rounds an exact amount half-up to cents.
    ///
    /// Amounts beyond the i64 cent range saturate.
    pub fn from_decimal(amount: Decimal) -> Self {
        let rounded = round_for_display(amount);
        let cents = rounded
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|cents| cents.to_i64())
            .unwrap_or(if rounded.is_sign_negative() {
                i64::MIN
            } else {
                i64::MAX
            });
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Formats with the given currency symbol, e.g. `"€35.50"`.
    pub fn display_with(&self, symbol: &str) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!(
            "{}{}{}.{:02}",
            sign,
            symbol,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(DEFAULT_CURRENCY_SYMBOL))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
