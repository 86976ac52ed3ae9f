//! Hydrological error metrics for scoring simulated discharge.
//!
//! All metrics take observed and simulated slices and return a scalar score.
//!
//! Missing values are NaN. Observed and simulated values are compared
//! position by position, so a position missing from either series is
//! dropped from both before every sum and mean the metric takes.
//! Precipitation is filtered on its own before its mean.
use std::fmt;
use std::str::FromStr;

use crate::error::{HymodError, HymodResult};
use crate::forcing::check_same_length;

/// Statistic used to score a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorMetric {
    /// Root mean square error. Range: [0, inf), 0 = perfect.
    Rmse,
    /// Nash-Sutcliffe efficiency. Range: (-inf, 1], 1 = perfect.
    Nse,
    /// Runoff coefficient error. Range: [0, inf), 0 = perfect.
    Roce,
}

impl ErrorMetric {
    pub const ALL: [ErrorMetric; 3] = [ErrorMetric::Rmse, ErrorMetric::Nse, ErrorMetric::Roce];

    pub fn name(self) -> &'static str {
        match self {
            ErrorMetric::Rmse => "RMSE",
            ErrorMetric::Nse => "NSE",
            ErrorMetric::Roce => "ROCE",
        }
    }
}

impl fmt::Display for ErrorMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ErrorMetric {
    type Err = HymodError;

    /// Case-insensitive match on `RMSE`, `NSE` or `ROCE`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorMetric::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HymodError::InvalidMetric(s.to_string()))
    }
}

/// Positions where both observed and simulated values are present.
fn paired(
    metric: &'static str,
    observed: &[f64],
    simulated: &[f64],
) -> HymodResult<(Vec<f64>, Vec<f64>)> {
    check_same_length("observed", observed, "simulated", simulated)?;
    let (obs, sim): (Vec<f64>, Vec<f64>) = observed
        .iter()
        .zip(simulated)
        .filter(|(o, s)| !o.is_nan() && !s.is_nan())
        .map(|(&o, &s)| (o, s))
        .unzip();
    if obs.is_empty() {
        return Err(HymodError::NoValidData { metric });
    }
    Ok((obs, sim))
}

/// Mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Root Mean Square Error over paired positions.
pub fn rmse(observed: &[f64], simulated: &[f64]) -> HymodResult<f64> {
    let (obs, sim) = paired("RMSE", observed, simulated)?;
    let mse = obs
        .iter()
        .zip(&sim)
        .map(|(o, s)| (s - o).powi(2))
        .sum::<f64>()
        / obs.len() as f64;
    Ok(mse.sqrt())
}

/// Nash-Sutcliffe Efficiency over paired positions.
///
/// Constant observations give `-inf`, unless the simulation reproduces them
/// exactly, which scores a perfect `1`.
pub fn nse(observed: &[f64], simulated: &[f64]) -> HymodResult<f64> {
    let (obs, sim) = paired("NSE", observed, simulated)?;
    let mean_obs = mean(&obs);
    let numerator: f64 = obs.iter().zip(&sim).map(|(o, s)| (o - s).powi(2)).sum();
    let denominator: f64 = obs.iter().map(|o| (o - mean_obs).powi(2)).sum();
    if denominator == 0.0 {
        return Ok(if numerator == 0.0 { 1.0 } else { f64::NEG_INFINITY });
    }
    Ok(1.0 - numerator / denominator)
}

/// Runoff Coefficient Error: `|mean(sim) - mean(obs)| / mean(precip)`.
///
/// All three series must be aligned. Zero mean precipitation gives `+inf`.
pub fn roce(observed: &[f64], simulated: &[f64], precip: &[f64]) -> HymodResult<f64> {
    check_same_length("observed", observed, "precipitation", precip)?;
    let (obs, sim) = paired("ROCE", observed, simulated)?;
    let precip: Vec<f64> = precip.iter().copied().filter(|p| !p.is_nan()).collect();
    if precip.is_empty() {
        return Err(HymodError::NoValidData { metric: "ROCE" });
    }
    let mean_precip = mean(&precip);
    if mean_precip == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(((mean(&sim) - mean(&obs)) / mean_precip).abs())
}

/// Score a simulation with the chosen metric.
///
/// `precip` is only read by ROCE.
pub fn score(
    observed: &[f64],
    simulated: &[f64],
    precip: &[f64],
    metric: ErrorMetric,
) -> HymodResult<f64> {
    match metric {
        ErrorMetric::Rmse => rmse(observed, simulated),
        ErrorMetric::Nse => nse(observed, simulated),
        ErrorMetric::Roce => roce(observed, simulated, precip),
    }
}

/// Score a simulation with a metric given by name.
///
/// Unknown names fail with `InvalidMetric`.
pub fn score_by_name(
    observed: &[f64],
    simulated: &[f64],
    precip: &[f64],
    metric: &str,
) -> HymodResult<f64> {
    score(observed, simulated, precip, metric.parse()?)
}
