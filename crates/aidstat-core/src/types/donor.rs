//! Donor funding entry type.

use crate::numeric::{safe_f64, safe_number};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One entity's total funding for a fixed reporting period.
///
/// The name is a display label only; duplicate names are not merged and
/// carrying distinct entries for the same donor is the caller's mistake
/// to avoid. Funding is expected to be non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorFundingEntry {
    /// Display name of the donor (organization, country, ...).
    pub name: String,
    /// Funding amount in USD for the period.
    pub funding: f64,
}

impl DonorFundingEntry {
    /// Create a new entry. Non-finite funding is coerced to 0.
    pub fn new(name: impl Into<String>, funding: f64) -> Self {
        Self {
            name: name.into(),
            funding: safe_f64(funding),
        }
    }

    /// Build an entry from a raw warehouse row value (JSON number, numeric
    /// string, or null), applying the safe-numeric coercion boundary.
    pub fn from_row(name: impl Into<String>, funding: &Value) -> Self {
        Self {
            name: name.into(),
            funding: safe_number(funding),
        }
    }
}

impl fmt::Display for DonorFundingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ${:.0}", self.name, self.funding)
    }
}
