//! Progressive tax calculation result.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of a progressive per-band calculation.
///
/// Every band in the bracket table has an entry, including bands the salary
/// never reached (recorded as `0.00`), so the response shape is stable across
/// salaries.
///
/// # Example
///
/// ```
/// use income_tax::models::TaxCalculationResult;
/// use rust_decimal_macros::dec;
/// use std::collections::BTreeMap;
///
/// let mut per_band = BTreeMap::new();
/// per_band.insert("band1".to_string(), dec!(7144.50));
/// per_band.insert("band2".to_string(), dec!(485.85));
///
/// let result = TaxCalculationResult {
///     tax_amount_per_band: per_band,
///     total_tax_amount: dec!(7630.35),
/// };
/// assert_eq!(result.band_sum(), dec!(7630.35));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculationResult {
    /// Tax owed within each band, keyed by band identifier.
    pub tax_amount_per_band: BTreeMap<String, Decimal>,
    /// Total tax owed, rounded to 2 decimal places.
    pub total_tax_amount: Decimal,
}

impl TaxCalculationResult {
    /// Returns the unrounded sum of the per-band amounts.
    pub fn band_sum(&self) -> Decimal {
        self.tax_amount_per_band.values().copied().sum()
    }

    /// Returns the amount owed in `band`, if the band exists.
    pub fn amount_for_band(&self, band: &str) -> Option<Decimal> {
        self.tax_amount_per_band.get(band).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let mut per_band = BTreeMap::new();
        per_band.insert("band1".to_string(), dec!(7144.50));
        let result = TaxCalculationResult {
            tax_amount_per_band: per_band,
            total_tax_amount: dec!(7144.50),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["totalTaxAmount"].as_str().unwrap(), "7144.50");
        assert_eq!(json["taxAmountPerBand"]["band1"].as_str().unwrap(), "7144.50");
    }

    #[test]
    fn test_amount_for_unknown_band_is_none() {
        let result = TaxCalculationResult {
            tax_amount_per_band: BTreeMap::new(),
            total_tax_amount: Decimal::ZERO,
        };
        assert_eq!(result.amount_for_band("band9"), None);
        assert_eq!(result.band_sum(), Decimal::ZERO);
    }
}
