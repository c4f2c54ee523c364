//! Safe numeric coercion at the warehouse boundary.
//!
//! Raw rows arrive from SQL aggregation as loosely-typed JSON values: a
//! funding total may be a number, a numeric string, or missing entirely.
//! Everything here collapses that mess into finite `f64`s exactly once, so
//! the pure analytics functions never have to defend against `NaN`,
//! infinities, or nulls.

use serde_json::Value;

/// Coerce a raw row value to a finite number, returning 0.0 for anything
/// that is null, non-numeric, or non-finite.
///
/// Accepts JSON numbers and numeric strings, matching what warehouse
/// drivers actually hand back for `SUM()` columns.
pub fn safe_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => safe_f64(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => safe_f64(s.trim().parse::<f64>().unwrap_or(0.0)),
        _ => 0.0,
    }
}

/// Map a possibly non-finite float to a finite one (`NaN`/`±∞` become 0.0).
pub fn safe_f64(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Year-over-year percentage change, or `None` when the inputs do not
/// support one (non-finite operands, or a previous value that is not
/// strictly positive).
pub fn safe_yoy_change(current: f64, previous: f64) -> Option<f64> {
    if !current.is_finite() || !previous.is_finite() || previous <= 0.0 {
        return None;
    }
    Some((current - previous) / previous * 100.0)
}

/// Divide two numbers, or `None` when the division is undefined
/// (non-finite operands, or a denominator that is not strictly positive).
pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
    if !numerator.is_finite() || !denominator.is_finite() || denominator <= 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    #[test]
    fn test_safe_number_json_number() {
        assert_relative_eq!(safe_number(&json!(1250.5)), 1250.5);
        assert_relative_eq!(safe_number(&json!(-3)), -3.0);
    }

    #[test]
    fn test_safe_number_numeric_string() {
        assert_relative_eq!(safe_number(&json!("1250.5")), 1250.5);
        assert_relative_eq!(safe_number(&json!("  42 ")), 42.0);
    }

    #[test]
    fn test_safe_number_invalid_values() {
        assert_relative_eq!(safe_number(&Value::Null), 0.0);
        assert_relative_eq!(safe_number(&json!("not a number")), 0.0);
        assert_relative_eq!(safe_number(&json!(true)), 0.0);
        assert_relative_eq!(safe_number(&json!({"total": 5})), 0.0);
        assert_relative_eq!(safe_number(&json!("inf")), 0.0);
    }

    #[test]
    fn test_safe_f64() {
        assert_relative_eq!(safe_f64(3.5), 3.5);
        assert_relative_eq!(safe_f64(f64::NAN), 0.0);
        assert_relative_eq!(safe_f64(f64::INFINITY), 0.0);
        assert_relative_eq!(safe_f64(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_safe_yoy_change() {
        assert_relative_eq!(safe_yoy_change(110.0, 100.0).unwrap(), 10.0);
        assert_relative_eq!(safe_yoy_change(90.0, 100.0).unwrap(), -10.0);
        assert!(safe_yoy_change(110.0, 0.0).is_none());
        assert!(safe_yoy_change(110.0, -5.0).is_none());
        assert!(safe_yoy_change(f64::NAN, 100.0).is_none());
    }

    #[test]
    fn test_safe_divide() {
        assert_relative_eq!(safe_divide(10.0, 4.0).unwrap(), 2.5);
        assert!(safe_divide(10.0, 0.0).is_none());
        assert!(safe_divide(10.0, -2.0).is_none());
        assert!(safe_divide(f64::INFINITY, 2.0).is_none());
    }
}
