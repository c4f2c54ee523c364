//! Donor concentration analytics.
//!
//! Quantifies how concentrated a funding stream is among its contributing
//! donors, using the Herfindahl-Hirschman Index (HHI) alongside Gini and
//! top-N share metrics.
//!
//! ## Formula
//!
//! ```text
//! HHI  = Σ sᵢ²                       sᵢ = percentage share of donor i
//! HHI* = (HHI − 10000/n) / (10000 − 10000/n)
//! G    = 2·Σ(i·xᵢ) / (n·Σxᵢ) − (n+1)/n     (xᵢ sorted ascending, 1-indexed)
//! ```
//!
//! HHI ranges from 10000/n (n equal donors) to 10000 (single donor); the
//! normalized form maps that to [0, 1]. Classification thresholds follow
//! the US DOJ/FTC Horizontal Merger Guidelines.
//!
//! Every function here is total: empty input, zero totals, and single-donor
//! streams degrade to defined zero/default outputs rather than errors.

use aidstat_core::numeric::safe_number;
use aidstat_core::types::DonorFundingEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Default number of entries returned by [`donor_shares`].
pub const DEFAULT_SHARE_LIMIT: usize = 10;

/// Concentration classification per the DOJ/FTC merger-guidelines bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConcentrationLevel {
    /// HHI below 1500: healthy diversification
    #[default]
    Low,
    /// HHI in [1500, 2500): moderately concentrated
    Moderate,
    /// HHI in [2500, 5000): highly concentrated
    High,
    /// HHI of 5000 or above: dominated by one or two donors
    VeryHigh,
}

impl ConcentrationLevel {
    /// One-line interpretation of this level for dashboards.
    pub fn description(&self) -> &'static str {
        match self {
            ConcentrationLevel::Low => "Healthy diversification - funding comes from many donors",
            ConcentrationLevel::Moderate => "Moderate concentration - funding moderately diversified",
            ConcentrationLevel::High => "High concentration - funding relies on few donors",
            ConcentrationLevel::VeryHigh => {
                "Very high concentration - funding heavily dependent on 1-2 donors"
            }
        }
    }
}

impl fmt::Display for ConcentrationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConcentrationLevel::Low => "low",
            ConcentrationLevel::Moderate => "moderate",
            ConcentrationLevel::High => "high",
            ConcentrationLevel::VeryHigh => "very_high",
        };
        write!(f, "{name}")
    }
}

/// Full concentration metrics for one funding stream.
///
/// Percentage fields are rounded to 1 decimal place, `hhi` to the nearest
/// integer, `normalized_hhi` and `gini_coefficient` to 2 decimal places.
/// Rounding happens only at assembly; intermediate values are exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ConcentrationResult {
    /// Herfindahl-Hirschman Index (0-10000)
    pub hhi: f64,
    /// Normalized HHI (0-1)
    pub normalized_hhi: f64,
    /// Classification of `hhi` against the merger-guidelines bands
    pub concentration_level: ConcentrationLevel,
    /// Share of funding from the top donor (%)
    pub top_donor_share: f64,
    /// Cumulative share of the top 3 donors (%)
    pub top3_donor_share: f64,
    /// Cumulative share of the top 5 donors (%)
    pub top5_donor_share: f64,
    /// Equivalent number of equal-sized donors (inverse HHI)
    pub effective_donors: f64,
    /// Gini coefficient over raw funding amounts (0-1)
    pub gini_coefficient: f64,
}

/// One donor's share of a funding stream, for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorShare {
    /// Display name of the donor.
    pub name: String,
    /// Funding amount in USD.
    pub funding: f64,
    /// Percentage of the stream total (0-100), 1 decimal place.
    pub share: f64,
}

/// A named group of donors, e.g. one country's or sector's funding stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationGroup {
    /// Display name of the group.
    pub name: String,
    /// The group's donor entries.
    pub donors: Vec<DonorFundingEntry>,
}

/// Concentration metrics for one group, from [`compare_concentration`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConcentration {
    /// Display name of the group.
    pub name: String,
    /// The group's concentration metrics.
    pub concentration: ConcentrationResult,
}

/// Calculate the Herfindahl-Hirschman Index from raw magnitudes.
///
/// Inputs are self-normalized to percentages of their own sum, so the
/// result is invariant under uniform scaling. Empty input or a zero sum
/// returns 0.
///
/// # Returns
///
/// HHI in (10000/n, 10000] for positive inputs; 0 for degenerate input.
pub fn hhi(shares: &[f64]) -> f64 {
    if shares.is_empty() {
        return 0.0;
    }

    let total: f64 = shares.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }

    shares
        .iter()
        .map(|s| {
            let pct = s / total * 100.0;
            pct * pct
        })
        .sum()
}

/// Normalize an HHI to [0, 1], adjusting for donor count so streams with
/// different numbers of donors are comparable.
///
/// Maps the equal-distribution HHI (10000/n) to 0 and the single-donor
/// HHI (10000) to 1. For `n <= 1` the stream is a monopoly by construction
/// and the result is 1.
pub fn normalized_hhi(hhi: f64, n: usize) -> f64 {
    if n <= 1 {
        return 1.0;
    }
    let min_hhi = 10_000.0 / n as f64;
    let max_hhi = 10_000.0;
    (hhi - min_hhi) / (max_hhi - min_hhi)
}

/// Classify an HHI against the DOJ/FTC merger-guidelines thresholds.
pub fn concentration_level(hhi: f64) -> ConcentrationLevel {
    if hhi < 1500.0 {
        ConcentrationLevel::Low
    } else if hhi < 2500.0 {
        ConcentrationLevel::Moderate
    } else if hhi < 5000.0 {
        ConcentrationLevel::High
    } else {
        ConcentrationLevel::VeryHigh
    }
}

/// Effective number of donors (inverse HHI): the number of equal-sized
/// donors that would produce the observed HHI. Zero HHI (no data) maps
/// to 0 rather than dividing.
pub fn effective_donors(hhi: f64) -> f64 {
    if hhi <= 0.0 {
        return 0.0;
    }
    10_000.0 / hhi
}

/// Calculate the Gini coefficient of a distribution of funding amounts.
///
/// 0 means perfect equality, 1 maximal inequality. Fewer than two values,
/// or an all-zero distribution, return 0 (no inequality definable). Stays
/// within [0, 1] for non-negative inputs.
pub fn gini_coefficient(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let total: f64 = sorted.iter().sum();

    if total <= 0.0 {
        return 0.0;
    }

    // G = 2·Σ(i·xᵢ) / (n·Σxᵢ) − (n+1)/n, 1-indexed over ascending values
    let weighted_sum: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (i + 1) as f64 * x)
        .sum();

    let n = n as f64;
    2.0 * weighted_sum / (n * total) - (n + 1.0) / n
}

/// Compute the full set of concentration metrics for a funding stream.
///
/// An empty stream, or one whose total share weight is zero, yields the
/// all-zero [`ConcentrationResult`] with a [`ConcentrationLevel::Low`]
/// classification; no input makes this function fail. Entries with
/// negative funding carry zero share weight.
pub fn analyze_concentration(donors: &[DonorFundingEntry]) -> ConcentrationResult {
    if donors.is_empty() {
        return ConcentrationResult::default();
    }

    log::debug!("analyzing concentration across {} donors", donors.len());

    // Negative entries carry no share weight
    let mut amounts: Vec<f64> = donors.iter().map(|d| d.funding.max(0.0)).collect();
    amounts.sort_by(|a, b| b.total_cmp(a));
    let total: f64 = amounts.iter().sum();

    if total <= 0.0 {
        return ConcentrationResult::default();
    }

    let shares: Vec<f64> = amounts.iter().map(|a| a / total * 100.0).collect();

    let hhi_value = hhi(&shares);
    // Level comes from the unrounded HHI
    let level = concentration_level(hhi_value);

    let top_donor_share = shares.first().copied().unwrap_or(0.0);
    let top3_donor_share: f64 = shares.iter().take(3).sum();
    let top5_donor_share: f64 = shares.iter().take(5).sum();

    ConcentrationResult {
        hhi: hhi_value.round(),
        normalized_hhi: round2(normalized_hhi(hhi_value, amounts.len())),
        concentration_level: level,
        top_donor_share: round1(top_donor_share),
        top3_donor_share: round1(top3_donor_share),
        top5_donor_share: round1(top5_donor_share),
        effective_donors: round1(effective_donors(hhi_value)),
        gini_coefficient: round2(gini_coefficient(&amounts)),
    }
}

/// Top donors with their percentage shares, sorted by funding descending
/// and truncated to `limit` entries ([`DEFAULT_SHARE_LIMIT`] is the
/// conventional cut for dashboards). A zero-total stream yields an empty
/// list.
pub fn donor_shares(donors: &[DonorFundingEntry], limit: usize) -> Vec<DonorShare> {
    let total: f64 = donors.iter().map(|d| d.funding.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut sorted: Vec<&DonorFundingEntry> = donors.iter().collect();
    sorted.sort_by(|a, b| b.funding.total_cmp(&a.funding));

    sorted
        .into_iter()
        .take(limit)
        .map(|d| DonorShare {
            name: d.name.clone(),
            funding: d.funding,
            share: round1(d.funding.max(0.0) / total * 100.0),
        })
        .collect()
}

/// Compare concentration across several funding streams (countries,
/// sectors, appeals). Returns one result per group, most concentrated
/// first.
pub fn compare_concentration(groups: &[ConcentrationGroup]) -> Vec<GroupConcentration> {
    let mut results: Vec<GroupConcentration> = groups
        .iter()
        .map(|group| GroupConcentration {
            name: group.name.clone(),
            concentration: analyze_concentration(&group.donors),
        })
        .collect();

    results.sort_by(|a, b| b.concentration.hhi.total_cmp(&a.concentration.hhi));
    results
}

/// Analyze raw warehouse rows, applying the safe-numeric coercion boundary
/// before any calculation. Row values may be JSON numbers, numeric strings,
/// or null; anything non-numeric contributes zero funding.
pub fn analyze_rows(rows: &[(String, Value)]) -> ConcentrationResult {
    let donors: Vec<DonorFundingEntry> = rows
        .iter()
        .map(|(name, value)| DonorFundingEntry {
            name: name.clone(),
            funding: safe_number(value),
        })
        .collect();
    analyze_concentration(&donors)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
