//! Warehouse sizes and the credit rate table
//!
//! Warehouse labels arriving from query history are parsed into
//! [`WarehouseSize`] at the boundary, so the recommendation rules only ever
//! see recognized sizes.
//!
//! # Examples
//!
//! ```
//! use snowwiz::warehouse::{CreditRateTable, WarehouseSize};
//!
//! let size: WarehouseSize = "xl".parse()?;
//! assert_eq!(size, WarehouseSize::XL);
//! assert_eq!(CreditRateTable::standard().credits_per_hour(size), 16);
//! # Ok::<(), snowwiz::advisor::AdvisorError>(())
//! ```

use crate::advisor::AdvisorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed-size unit of compute capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WarehouseSize {
    /// X-Small
    XS,
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
    /// X-Large
    XL,
    /// 2X-Large
    #[serde(rename = "2XL")]
    XXL,
}

impl WarehouseSize {
    /// All sizes, smallest first
    pub const ALL: [WarehouseSize; 6] = [
        WarehouseSize::XS,
        WarehouseSize::S,
        WarehouseSize::M,
        WarehouseSize::L,
        WarehouseSize::XL,
        WarehouseSize::XXL,
    ];

    /// Canonical label as it appears in query history
    pub fn label(self) -> &'static str {
        match self {
            WarehouseSize::XS => "XS",
            WarehouseSize::S => "S",
            WarehouseSize::M => "M",
            WarehouseSize::L => "L",
            WarehouseSize::XL => "XL",
            WarehouseSize::XXL => "2XL",
        }
    }

    /// Parse a label, ignoring case and surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|size| size.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for WarehouseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WarehouseSize {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| AdvisorError::UnknownWarehouseSize {
            label: s.to_string(),
            query_id: None,
        })
    }
}

impl TryFrom<&str> for WarehouseSize {
    type Error = AdvisorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Credits billed per hour for each warehouse size
#[derive(Debug)]
pub struct CreditRateTable {
    rates: [u32; 6],
}

static STANDARD_RATES: CreditRateTable = CreditRateTable {
    rates: [1, 2, 4, 8, 16, 32],
};

impl CreditRateTable {
    /// The published rate table (XS=1 doubling up to 2XL=32)
    pub fn standard() -> &'static CreditRateTable {
        &STANDARD_RATES
    }

    /// Credits per hour for `size`
    pub fn credits_per_hour(&self, size: WarehouseSize) -> u32 {
        self.rates[size as usize]
    }

    /// Signed hourly difference when moving from `from` to `to`
    pub fn delta(&self, from: WarehouseSize, to: WarehouseSize) -> i64 {
        i64::from(self.credits_per_hour(to)) - i64::from(self.credits_per_hour(from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates_double_per_size() {
        let table = CreditRateTable::standard();
        let rates: Vec<u32> = WarehouseSize::ALL
            .iter()
            .map(|s| table.credits_per_hour(*s))
            .collect();
        assert_eq!(rates, vec![1, 2, 4, 8, 16, 32]);
    }

    #[test]
    fn test_delta_sign_follows_direction() {
        let table = CreditRateTable::standard();
        assert_eq!(table.delta(WarehouseSize::XS, WarehouseSize::M), 3);
        assert_eq!(table.delta(WarehouseSize::XL, WarehouseSize::M), -12);
        assert_eq!(table.delta(WarehouseSize::M, WarehouseSize::M), 0);
    }

    #[test]
    fn test_parse_accepts_canonical_and_lowercase_labels() {
        assert_eq!("2XL".parse::<WarehouseSize>().unwrap(), WarehouseSize::XXL);
        assert_eq!(" xs ".parse::<WarehouseSize>().unwrap(), WarehouseSize::XS);
        assert_eq!(WarehouseSize::try_from("l").unwrap(), WarehouseSize::L);
    }

    #[test]
    fn test_parse_rejects_unknown_label() {
        let err = "XXXL".parse::<WarehouseSize>().unwrap_err();
        assert!(matches!(
            err,
            AdvisorError::UnknownWarehouseSize { ref label, query_id: None } if label == "XXXL"
        ));
    }

    #[test]
    fn test_display_round_trips_label() {
        for size in WarehouseSize::ALL {
            assert_eq!(size.to_string().parse::<WarehouseSize>().unwrap(), size);
        }
    }

    #[test]
    fn test_serde_uses_history_labels() {
        let json = serde_json::to_string(&WarehouseSize::XXL).unwrap();
        assert_eq!(json, "\"2XL\"");
        let parsed: WarehouseSize = serde_json::from_str("\"XS\"").unwrap();
        assert_eq!(parsed, WarehouseSize::XS);
    }
}
