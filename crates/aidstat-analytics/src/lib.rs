//! # Aidstat Analytics
//!
//! Analytical statistics engine for humanitarian funding data.
//!
//! This crate turns pre-aggregated funding rows into decision-relevant
//! metrics:
//!
//! - **Concentration**: HHI, normalized HHI, Gini coefficient, top-N donor
//!   shares, effective donor count, and a concentration classification
//! - **Trends**: average year-over-year growth, CAGR, regression-based
//!   next-period projection, volatility, and a trend classification
//!
//! ## Architecture
//!
//! `aidstat-analytics` depends on `aidstat-core` for value types, but
//! `aidstat-core` does NOT depend on this crate. Both engines are leaf
//! components: pure, synchronous, side-effect-free functions over
//! in-memory collections, freely callable from request-handling paths
//! without synchronization.
//!
//! Degenerate input never raises an error: empty collections, zero totals,
//! and short series all degrade to defined zero/`None`/default outputs.
//!
//! ## Usage
//!
//! ```rust
//! use aidstat_core::prelude::*;
//! use aidstat_analytics::prelude::*;
//!
//! let donors = vec![
//!     DonorFundingEntry::new("United States", 500.0),
//!     DonorFundingEntry::new("Germany", 300.0),
//!     DonorFundingEntry::new("ECHO", 200.0),
//! ];
//! let result = analyze_concentration(&donors);
//! assert_eq!(result.concentration_level, ConcentrationLevel::High);
//!
//! let series = TrendSeries::new(vec![100.0, 120.0, 150.0], vec![2022, 2023, 2024]).unwrap();
//! let trend = analyze_trend(&series);
//! assert_eq!(trend.direction, TrendDirection::Up);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::float_cmp)]

pub mod concentration;
pub mod error;
pub mod trends;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::concentration::{
        analyze_concentration, analyze_rows, compare_concentration, concentration_level,
        donor_shares, effective_donors, gini_coefficient, hhi, normalized_hhi, ConcentrationGroup,
        ConcentrationLevel, ConcentrationResult, DonorShare, GroupConcentration,
        DEFAULT_SHARE_LIMIT,
    };
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::trends::{
        analyze_trend, analyze_trend_rows, average_growth_rate, cagr, classify_trend,
        linear_regression, project_next_value, trend_direction, volatility, Regression,
        TrendAnalysis, TrendClass, TrendDirection,
    };
}
