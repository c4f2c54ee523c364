//! # Aidstat Core
//!
//! Core types and the safe-numeric boundary for the Aidstat humanitarian
//! funding analytics library.
//!
//! This crate provides the foundational building blocks used throughout Aidstat:
//!
//! - **Types**: Domain types like [`DonorFundingEntry`](types::DonorFundingEntry)
//!   and [`TrendSeries`](types::TrendSeries)
//! - **Numeric Boundary**: Safe coercion of raw warehouse rows into finite
//!   numbers before they reach any calculation
//!
//! ## Design Philosophy
//!
//! - **Calculation-Free**: This crate holds data, not analytics. The analytics
//!   engines live in `aidstat-analytics`, which depends on this crate but
//!   never the reverse.
//! - **Sanitize at the Edge**: `NaN`, infinities, and non-numeric row values
//!   are coerced exactly once, in [`numeric`], so downstream pure functions
//!   can assume finite inputs.
//!
//! ## Example
//!
//! ```rust
//! use aidstat_core::prelude::*;
//!
//! let entry = DonorFundingEntry::new("United States", 2_500_000.0);
//! let series = TrendSeries::new(vec![100.0, 110.0], vec![2023, 2024]).unwrap();
//! assert_eq!(series.len(), 2);
//! assert_eq!(entry.funding, 2_500_000.0);
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
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod numeric;
pub mod types;

pub use error::{CoreError, CoreResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::numeric::{safe_divide, safe_f64, safe_number, safe_yoy_change};
    pub use crate::types::{DonorFundingEntry, TrendSeries};
}
