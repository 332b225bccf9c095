//! Tax bracket model and the upstream bracket payload.
//!
//! This module defines [`TaxBracket`], a salary range taxed at one marginal
//! rate, and [`TaxBrackets`], the ordered table a provider returns for a year.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// A salary range taxed at a single marginal rate.
///
/// The upper bound is `None` for the top bracket, which extends to infinity.
///
/// # Examples
///
/// ```
/// use income_tax::models::TaxBracket;
/// use rust_decimal_macros::dec;
///
/// let bracket = TaxBracket::new("band1", dec!(0), Some(dec!(47630)), dec!(0.15));
/// assert!(bracket.contains(dec!(47630)));
/// assert!(!bracket.contains(dec!(47630.01)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// The band identifier (e.g., "band1").
    pub band: String,
    /// The inclusive lower bound of the bracket.
    pub min: Decimal,
    /// The upper bound of the bracket, or `None` when unbounded.
    #[serde(
        default,
        deserialize_with = "deserialize_upper_bound",
        skip_serializing_if = "Option::is_none"
    )]
    pub max: Option<Decimal>,
    /// The marginal rate as a fraction in `[0, 1]`.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Creates a new bracket.
    pub fn new(band: impl Into<String>, min: Decimal, max: Option<Decimal>, rate: Decimal) -> Self {
        Self {
            band: band.into(),
            min,
            max,
            rate,
        }
    }

    /// Returns true if the bracket has no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    /// Returns true if `salary` falls within `[min, max]`.
    ///
    /// Both bounds are inclusive, so a salary exactly on a boundary belongs
    /// to the lower of the two brackets sharing it.
    pub fn contains(&self, salary: Decimal) -> bool {
        salary >= self.min && self.max.is_none_or(|max| salary <= max)
    }
}

/// The upstream service reports a missing upper bound as `0`.
fn deserialize_upper_bound<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let max = Option::<Decimal>::deserialize(deserializer)?;
    Ok(max.filter(|value| !value.is_zero()))
}

/// The ordered bracket table for a single tax year.
///
/// This is the payload shape served by the upstream bracket service:
/// `{"tax_brackets": [{"band": "band1", "min": 0, "max": 47630, "rate": 0.15}, ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TaxBrackets {
    /// Brackets ordered ascending by `min`.
    pub tax_brackets: Vec<TaxBracket>,
}

impl TaxBrackets {
    /// Wraps an ordered bracket list.
    pub fn new(tax_brackets: Vec<TaxBracket>) -> Self {
        Self { tax_brackets }
    }

    /// Returns the brackets as a slice.
    pub fn as_slice(&self) -> &[TaxBracket] {
        &self.tax_brackets
    }

    /// Returns true if the table has no brackets.
    pub fn is_empty(&self) -> bool {
        self.tax_brackets.is_empty()
    }
}
