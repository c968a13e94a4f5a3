//! Per-day summary statistics over an ensemble
//!
//! Percentiles use linear interpolation between closest ranks (Hyndman-Fan
//! type 7, the same rule numpy and R use by default): for a sorted column
//! `x` of `n` values and fraction `p`, `h = (n - 1) * p` and the result is
//! `x[floor(h)] + (h - floor(h)) * (x[ceil(h)] - x[floor(h)])`.

use crate::error::{Result, SimulationError};
use crate::model::{Ensemble, SummaryCurve};

/// Standard band fractions
pub mod standard {
    pub const P5: f64 = 0.05;
    pub const P95: f64 = 0.95;
}

/// Summarize with the standard 5th/95th percentile band
pub fn summarize(ensemble: &Ensemble) -> Result<SummaryCurve> {
    summarize_with_bands(ensemble, standard::P5, standard::P95)
}

/// Summarize with a custom band, given as fractions in `[0, 1]`
pub fn summarize_with_bands(ensemble: &Ensemble, lower: f64, upper: f64) -> Result<SummaryCurve> {
    if ensemble.is_empty() {
        return Err(SimulationError::invalid(
            "ensemble",
            "0 rows",
            "cannot summarize an empty ensemble",
        ));
    }
    for (name, p) in [("lower_percentile", lower), ("upper_percentile", upper)] {
        if !(0.0..=1.0).contains(&p) {
            return Err(SimulationError::invalid(name, p, "must be within [0, 1]"));
        }
    }
    if lower > upper {
        return Err(SimulationError::invalid(
            "lower_percentile",
            lower,
            "must not exceed upper_percentile",
        ));
    }

    let days = ensemble.total_days();
    let mut mean = Vec::with_capacity(days);
    let mut lower_band = Vec::with_capacity(days);
    let mut upper_band = Vec::with_capacity(days);

    for day in 0..days {
        let mut column = ensemble.column(day);
        mean.push(running_mean(&column));

        column.sort_by(f64::total_cmp);
        lower_band.push(percentile(&column, lower));
        upper_band.push(percentile(&column, upper));
    }

    Ok(SummaryCurve {
        mean,
        lower_band,
        upper_band,
        lower_percentile: lower,
        upper_percentile: upper,
    })
}

/// Incremental mean; exact when every value is equal, so a constant column
/// never lands outside its own percentile band.
fn running_mean(values: &[f64]) -> f64 {
    values
        .iter()
        .enumerate()
        .fold(0.0, |m, (k, x)| m + (x - m) / (k + 1) as f64)
}

/// Type-7 percentile of an ascending slice; `p` is clamped to `[0, 1]`.
///
/// Returns NaN for an empty slice.
#[must_use]
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted {
        [] => f64::NAN,
        [only] => *only,
        _ => {
            let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
            let lo = h.floor() as usize;
            let hi = h.ceil() as usize;
            sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
        }
    }
}
