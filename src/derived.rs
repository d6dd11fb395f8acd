//! Derived metrics computed from static or form-entered numbers
//!
//! Every ratio returns `None` when its denominator is zero (or the result is
//! not finite) instead of producing NaN/∞ for the templates.

/// Hectare count the calculator spreads projected costs over.
pub const CALCULATOR_HECTARES: f64 = 10.0;

/// Expected revenue used by the ROI figures. Fixed at zero in the current build.
pub const EXPECTED_REVENUE_INR: f64 = 0.0;

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// `(revenue - cost) / cost * 100`; undefined for zero cost.
pub fn roi_percent(revenue: f64, cost: f64) -> Option<f64> {
    if cost == 0.0 {
        return None;
    }
    finite((revenue - cost) / cost * 100.0)
}

pub fn cost_per_hectare(total: f64) -> f64 {
    total / CALCULATOR_HECTARES
}

/// Share of `part` in `total` as a percentage.
pub fn share_of_total(part: f64, total: f64) -> Option<f64> {
    if total == 0.0 {
        return None;
    }
    finite(part / total * 100.0)
}

/// Progress-bar fill in `[0, 100]`.
///
/// Efficiency metrics fill as `current / target`. Cost metrics improve as
/// they fall, so they fill as `target / current`.
pub fn progress_percent(current: f64, target: f64, lower_is_better: bool) -> Option<f64> {
    let (numerator, denominator) = if lower_is_better {
        (target, current)
    } else {
        (current, target)
    };
    if denominator == 0.0 {
        return None;
    }
    finite(numerator / denominator * 100.0).map(|v| v.clamp(0.0, 100.0))
}

/// Whole-number percentage of each value in the sum, as pie labels show them.
pub fn whole_percent_shares(values: &[f64]) -> Vec<Option<u32>> {
    let sum: f64 = values.iter().sum();
    values
        .iter()
        .map(|&v| share_of_total(v, sum).map(|p| p.round() as u32))
        .collect()
}
