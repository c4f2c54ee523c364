//! Yearly time-series type.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// An ordered series of yearly values as parallel arrays.
///
/// Years are expected to be strictly increasing with no gap-filling
/// (missing years are simply absent); that ordering is the caller's
/// contract and is not validated here. The only internal check is that
/// the two arrays have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    values: Vec<f64>,
    years: Vec<i32>,
}

impl TrendSeries {
    /// Create a series from parallel value/year arrays.
    pub fn new(values: Vec<f64>, years: Vec<i32>) -> CoreResult<Self> {
        if values.len() != years.len() {
            return Err(CoreError::SeriesLengthMismatch {
                values: values.len(),
                years: years.len(),
            });
        }
        Ok(Self { values, years })
    }

    /// The yearly values, in year order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The years, parallel to [`values`](Self::values).
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// Number of observations in the series.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series has no observations.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
