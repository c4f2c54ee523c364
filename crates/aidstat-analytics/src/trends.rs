//! Funding trend analytics.
//!
//! Characterizes the shape and momentum of a yearly series of funding or
//! population figures: growth rates, a one-period regression projection,
//! and volatility.
//!
//! ## Formula
//!
//! ```text
//! CAGR  = ((end / start)^(1/periods) − 1) × 100
//! gᵢ    = (vᵢ − vᵢ₋₁) / vᵢ₋₁ × 100          (skipped when vᵢ₋₁ ≤ 0)
//! slope = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)  (x = 0..n−1)
//! vol   = population std dev of the gᵢ        (percentage points)
//! ```
//!
//! Every function is total: short series and non-positive baselines yield
//! `None` for the affected metric, never an error. Classification
//! boundaries are deliberately asymmetric around zero (`>10`, `>3`,
//! `>=−3`, `>=−10`); downstream consumers depend on the exact comparators.

use aidstat_core::numeric::safe_yoy_change;
use aidstat_core::types::TrendSeries;
use crate::error::AnalyticsResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the most recent movement in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Recent change above +5%
    Up,
    /// Recent change below −5%
    Down,
    /// Recent change within ±5%, or too little data to tell
    #[default]
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        };
        write!(f, "{name}")
    }
}

/// Strength classification of a series' average growth rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TrendClass {
    /// Average growth above 10%
    StrongGrowth,
    /// Average growth in (3%, 10%]
    ModerateGrowth,
    /// Average growth in [−3%, 3%], or no growth rate available
    #[default]
    Stable,
    /// Average growth in [−10%, −3%)
    ModerateDecline,
    /// Average growth below −10%
    StrongDecline,
}

impl TrendClass {
    /// Arrow indicator for dashboards.
    pub fn indicator(&self) -> &'static str {
        match self {
            TrendClass::StrongGrowth => "\u{2191}\u{2191}",
            TrendClass::ModerateGrowth => "\u{2191}",
            TrendClass::Stable => "\u{2192}",
            TrendClass::ModerateDecline => "\u{2193}",
            TrendClass::StrongDecline => "\u{2193}\u{2193}",
        }
    }
}

impl fmt::Display for TrendClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrendClass::StrongGrowth => "strong_growth",
            TrendClass::ModerateGrowth => "moderate_growth",
            TrendClass::Stable => "stable",
            TrendClass::ModerateDecline => "moderate_decline",
            TrendClass::StrongDecline => "strong_decline",
        };
        write!(f, "{name}")
    }
}

/// Least-squares fit of a series against its indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    /// Change in value per period.
    pub slope: f64,
    /// Fitted value at index 0.
    pub intercept: f64,
}

/// Full trend metrics for one yearly series.
///
/// Metrics that are undefined for the input (too few observations,
/// non-positive baselines) are `None`; the result object itself is always
/// complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Direction of the most recent movement.
    pub direction: TrendDirection,
    /// Mean year-over-year growth rate (%).
    pub average_growth_rate: Option<f64>,
    /// Compound annual growth rate (%) over the whole series.
    pub cagr: Option<f64>,
    /// Regression projection of the next period's value.
    pub linear_projection: Option<f64>,
    /// Std dev of year-over-year growth rates (percentage points).
    pub volatility: Option<f64>,
    /// Strength classification of the average growth rate.
    pub trend: TrendClass,
}

/// Compound annual growth rate between two values over a number of
/// periods, as a percentage. `None` unless start, end, and periods are
/// all strictly positive.
pub fn cagr(start_value: f64, end_value: f64, periods: f64) -> Option<f64> {
    if start_value <= 0.0 || end_value <= 0.0 || periods <= 0.0 {
        return None;
    }
    Some(((end_value / start_value).powf(1.0 / periods) - 1.0) * 100.0)
}

/// Mean year-over-year growth rate, as a percentage.
///
/// Pairs whose earlier value is not strictly positive are skipped rather
/// than treated as errors; `None` when fewer than 2 values or no pair
/// survives the skip.
pub fn average_growth_rate(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let mut total_growth = 0.0;
    let mut valid_years = 0u32;

    for pair in values.windows(2) {
        if let Some(change) = safe_yoy_change(pair[1], pair[0]) {
            total_growth += change;
            valid_years += 1;
        }
    }

    if valid_years > 0 {
        Some(total_growth / f64::from(valid_years))
    } else {
        None
    }
}

/// Least-squares linear fit of a series against its indices (0..n−1).
///
/// `None` for fewer than 2 points or a degenerate denominator (cannot
/// occur for distinct indices, but guarded anyway).
pub fn linear_regression(values: &[f64]) -> Option<Regression> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;

    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let n = n as f64;
    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    Some(Regression { slope, intercept })
}

/// Project the next period's value by evaluating the regression one past
/// the last observed index.
pub fn project_next_value(values: &[f64]) -> Option<f64> {
    let regression = linear_regression(values)?;
    let next_index = values.len() as f64;
    Some(regression.slope * next_index + regression.intercept)
}

/// Volatility: population standard deviation of year-over-year growth
/// rates, in percentage points.
///
/// `None` for fewer than 3 values, or when fewer than 2 growth rates
/// survive the non-positive-baseline skip.
pub fn volatility(values: &[f64]) -> Option<f64> {
    if values.len() < 3 {
        return None;
    }

    let growth_rates: Vec<f64> = values
        .windows(2)
        .filter_map(|pair| safe_yoy_change(pair[1], pair[0]))
        .collect();

    if growth_rates.len() < 2 {
        return None;
    }

    let n = growth_rates.len() as f64;
    let mean = growth_rates.iter().sum::<f64>() / n;
    let variance = growth_rates
        .iter()
        .map(|r| (r - mean) * (r - mean))
        .sum::<f64>()
        / n;

    Some(variance.sqrt())
}

/// Direction of the most recent movement, judged on the last 3 values
/// (or the whole series when shorter). A non-positive baseline, or a
/// change within ±5%, reads as stable.
pub fn trend_direction(values: &[f64]) -> TrendDirection {
    if values.len() < 2 {
        return TrendDirection::Stable;
    }

    let recent = &values[values.len().saturating_sub(3)..];
    let first = recent[0];
    let last = recent[recent.len() - 1];

    if first <= 0.0 {
        return TrendDirection::Stable;
    }

    let change = (last - first) / first * 100.0;

    if change > 5.0 {
        TrendDirection::Up
    } else if change < -5.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

/// Classify the strength of an average growth rate.
///
/// The comparators are exact and asymmetric around zero: `>10`, `>3`,
/// `>=−3`, `>=−10`, else strong decline. `None` reads as stable.
pub fn classify_trend(avg_growth_rate: Option<f64>) -> TrendClass {
    let Some(rate) = avg_growth_rate else {
        return TrendClass::Stable;
    };

    if rate > 10.0 {
        TrendClass::StrongGrowth
    } else if rate > 3.0 {
        TrendClass::ModerateGrowth
    } else if rate >= -3.0 {
        TrendClass::Stable
    } else if rate >= -10.0 {
        TrendClass::ModerateDecline
    } else {
        TrendClass::StrongDecline
    }
}

/// Compute the full set of trend metrics for a yearly series.
///
/// CAGR uses the first and last value over `len − 1` periods and is only
/// attempted for series of at least 2 observations. Unavailable metrics
/// surface as `None` inside an otherwise complete result.
pub fn analyze_trend(series: &TrendSeries) -> TrendAnalysis {
    let values = series.values();

    log::debug!("analyzing trend over {} observations", values.len());

    let direction = trend_direction(values);
    let average_growth_rate = average_growth_rate(values);

    let cagr_value = if values.len() >= 2 {
        cagr(
            values[0],
            values[values.len() - 1],
            (values.len() - 1) as f64,
        )
    } else {
        None
    };

    TrendAnalysis {
        direction,
        average_growth_rate,
        cagr: cagr_value,
        linear_projection: project_next_value(values),
        volatility: volatility(values),
        trend: classify_trend(average_growth_rate),
    }
}

/// Analyze raw warehouse rows: parallel value/year arrays straight from a
/// grouped query. Fails only when the arrays disagree in length.
pub fn analyze_trend_rows(values: Vec<f64>, years: Vec<i32>) -> AnalyticsResult<TrendAnalysis> {
    let series = TrendSeries::new(values, years)?;
    Ok(analyze_trend(&series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cagr_growth() {
        // 100 -> 200 over 5 periods: (2^(1/5) - 1) * 100 ≈ 14.87
        assert_relative_eq!(cagr(100.0, 200.0, 5.0).unwrap(), 14.87, epsilon = 0.01);
    }

    #[test]
    fn test_cagr_decline() {
        assert_relative_eq!(cagr(200.0, 100.0, 5.0).unwrap(), -12.94, epsilon = 0.01);
    }

    #[test]
    fn test_cagr_invalid_inputs() {
        assert!(cagr(0.0, 100.0, 5.0).is_none());
        assert!(cagr(-50.0, 100.0, 5.0).is_none());
        assert!(cagr(100.0, 0.0, 5.0).is_none());
        assert!(cagr(100.0, 200.0, 0.0).is_none());
    }

    #[test]
    fn test_average_growth_rate() {
        // +10% then +10%
        assert_relative_eq!(
            average_growth_rate(&[100.0, 110.0, 121.0]).unwrap(),
            10.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_average_growth_rate_too_short() {
        assert!(average_growth_rate(&[100.0]).is_none());
        assert!(average_growth_rate(&[]).is_none());
    }

    #[test]
    fn test_average_growth_rate_skips_non_positive_baselines() {
        // Only the 100 -> 110 pair counts
        assert_relative_eq!(
            average_growth_rate(&[0.0, 100.0, 110.0]).unwrap(),
            10.0,
            epsilon = 1e-9
        );
        assert!(average_growth_rate(&[0.0, 0.0, 0.0]).is_none());
    }

    #[test]
    fn test_linear_regression_exact_line() {
        let reg = linear_regression(&[100.0, 200.0, 300.0, 400.0]).unwrap();
        assert_relative_eq!(reg.slope, 100.0, epsilon = 1e-9);
        assert_relative_eq!(reg.intercept, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_regression_too_short() {
        assert!(linear_regression(&[100.0]).is_none());
        assert!(linear_regression(&[]).is_none());
    }

    #[test]
    fn test_project_next_value() {
        assert_relative_eq!(
            project_next_value(&[100.0, 200.0, 300.0]).unwrap(),
            400.0,
            epsilon = 1e-9
        );
        assert!(project_next_value(&[100.0]).is_none());
    }

    #[test]
    fn test_volatility_low() {
        // Steady ~10% growth: growth rates nearly identical
        let vol = volatility(&[100.0, 110.0, 121.0, 133.0]).unwrap();
        assert!(vol < 2.0);
    }

    #[test]
    fn test_volatility_high() {
        let vol = volatility(&[100.0, 150.0, 110.0, 180.0]).unwrap();
        assert!(vol > 20.0);
    }

    #[test]
    fn test_volatility_too_short() {
        assert!(volatility(&[100.0, 200.0]).is_none());
        assert!(volatility(&[]).is_none());
    }

    #[test]
    fn test_volatility_too_few_valid_rates() {
        // Only one usable pair after skipping zero baselines
        assert!(volatility(&[0.0, 0.0, 100.0, 110.0]).is_none());
    }

    #[test]
    fn test_trend_direction() {
        assert_eq!(trend_direction(&[100.0, 110.0, 120.0]), TrendDirection::Up);
        assert_eq!(trend_direction(&[120.0, 110.0, 100.0]), TrendDirection::Down);
        assert_eq!(
            trend_direction(&[100.0, 101.0, 102.0]),
            TrendDirection::Stable
        );
        assert_eq!(trend_direction(&[100.0]), TrendDirection::Stable);
        assert_eq!(trend_direction(&[]), TrendDirection::Stable);
    }

    #[test]
    fn test_trend_direction_uses_last_three() {
        // Early collapse is ignored; last 3 values are flat
        assert_eq!(
            trend_direction(&[1000.0, 100.0, 100.0, 101.0]),
            TrendDirection::Stable
        );
    }

    #[test]
    fn test_trend_direction_non_positive_baseline() {
        assert_eq!(trend_direction(&[0.0, 50.0, 100.0]), TrendDirection::Stable);
    }

    #[test]
    fn test_classify_trend_boundaries() {
        assert_eq!(classify_trend(Some(15.0)), TrendClass::StrongGrowth);
        assert_eq!(classify_trend(Some(10.0)), TrendClass::ModerateGrowth);
        assert_eq!(classify_trend(Some(5.0)), TrendClass::ModerateGrowth);
        assert_eq!(classify_trend(Some(3.0)), TrendClass::Stable);
        assert_eq!(classify_trend(Some(0.0)), TrendClass::Stable);
        assert_eq!(classify_trend(Some(-3.0)), TrendClass::Stable);
        assert_eq!(classify_trend(Some(-5.0)), TrendClass::ModerateDecline);
        assert_eq!(classify_trend(Some(-10.0)), TrendClass::ModerateDecline);
        assert_eq!(classify_trend(Some(-15.0)), TrendClass::StrongDecline);
        assert_eq!(classify_trend(None), TrendClass::Stable);
    }

    #[test]
    fn test_analyze_trend_steady_growth() {
        let series = TrendSeries::new(
            vec![100.0, 110.0, 121.0, 133.0, 146.0],
            vec![2020, 2021, 2022, 2023, 2024],
        )
        .unwrap();
        let analysis = analyze_trend(&series);

        assert_eq!(analysis.direction, TrendDirection::Up);
        assert_relative_eq!(analysis.average_growth_rate.unwrap(), 10.0, epsilon = 0.2);
        assert_eq!(analysis.trend, TrendClass::ModerateGrowth);
        assert!(analysis.linear_projection.unwrap() > 150.0);
        assert_relative_eq!(analysis.cagr.unwrap(), 9.9, epsilon = 0.2);
        assert!(analysis.volatility.is_some());
    }

    #[test]
    fn test_analyze_trend_single_observation() {
        let series = TrendSeries::new(vec![100.0], vec![2024]).unwrap();
        let analysis = analyze_trend(&series);

        assert_eq!(analysis.direction, TrendDirection::Stable);
        assert!(analysis.average_growth_rate.is_none());
        assert!(analysis.cagr.is_none());
        assert!(analysis.linear_projection.is_none());
        assert!(analysis.volatility.is_none());
        assert_eq!(analysis.trend, TrendClass::Stable);
    }

    #[test]
    fn test_analyze_trend_empty() {
        let series = TrendSeries::new(vec![], vec![]).unwrap();
        let analysis = analyze_trend(&series);

        assert_eq!(analysis.direction, TrendDirection::Stable);
        assert!(analysis.average_growth_rate.is_none());
        assert_eq!(analysis.trend, TrendClass::Stable);
    }

    #[test]
    fn test_analyze_trend_rows() {
        let analysis = analyze_trend_rows(vec![100.0, 90.0, 80.0], vec![2022, 2023, 2024]).unwrap();
        assert_eq!(analysis.direction, TrendDirection::Down);
        assert_eq!(analysis.trend, TrendClass::StrongDecline);

        let err = analyze_trend_rows(vec![100.0], vec![2023, 2024]).unwrap_err();
        assert!(err.to_string().contains("length mismatch"));
    }

    #[test]
    fn test_serde_null_for_unavailable_metrics() {
        let series = TrendSeries::new(vec![100.0], vec![2024]).unwrap();
        let json = serde_json::to_value(analyze_trend(&series)).unwrap();

        assert_eq!(json["direction"], "stable");
        assert!(json["cagr"].is_null());
        assert!(json["volatility"].is_null());
        assert_eq!(json["trend"], "stable");
    }

    #[test]
    fn test_trend_class_indicator() {
        assert_eq!(TrendClass::StrongGrowth.indicator(), "↑↑");
        assert_eq!(TrendClass::Stable.indicator(), "→");
        assert_eq!(TrendClass::StrongDecline.indicator(), "↓↓");
    }
}
