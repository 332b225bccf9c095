//! Tax year identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TaxError;

/// A validated four digit tax year.
///
/// # Examples
///
/// ```
/// use income_tax::models::TaxYear;
///
/// let year: TaxYear = "2019".parse().unwrap();
/// assert_eq!(year.value(), 2019);
/// assert!("19".parse::<TaxYear>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TaxYear(u16);

impl TaxYear {
    /// Creates a tax year, rejecting anything outside `1000..=9999`.
    pub fn new(year: u16) -> Result<Self, TaxError> {
        if (1000..=9999).contains(&year) {
            Ok(Self(year))
        } else {
            Err(TaxError::InvalidYear {
                value: year.to_string(),
            })
        }
    }

    /// Returns the numeric year.
    pub fn value(self) -> u16 {
        self.0
    }
}

impl FromStr for TaxYear {
    type Err = TaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || TaxError::InvalidYear {
            value: s.to_string(),
        };

        if trimmed.len() != 4 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = trimmed.parse::<u16>().map_err(|_| invalid())?;
        Self::new(year).map_err(|_| invalid())
    }
}

impl TryFrom<u16> for TaxYear {
    type Error = TaxError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaxYear> for u16 {
    fn from(year: TaxYear) -> Self {
        year.0
    }
}

impl fmt::Display for TaxYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
