//! Core value types for funding analytics.
//!
//! These are plain, calculation-free data carriers: the analytics crate
//! consumes them, the query layer produces them.

mod donor;
mod series;

pub use donor::DonorFundingEntry;
pub use series::TrendSeries;
