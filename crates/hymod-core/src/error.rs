//! Error type shared by parameter validation, the simulation loop and the
//! error metrics.
use thiserror::Error;

/// Failures raised by the HYMOD core.
///
/// Every variant is a local computation error: a failed run produces no
/// discharge series and there is nothing to resume.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HymodError {
    /// A parameter or initial storage lies outside its domain.
    #[error("{name} = {value} is outside its domain {domain}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        domain: &'static str,
    },

    /// Soil storage escaped `[0, C_max/(B_exp+1)]` beyond floating tolerance,
    /// so the store-capacity curve cannot be inverted.
    #[error(
        "soil storage {storage} exceeds store capacity {capacity} (inversion base {base})"
    )]
    NumericDomainError {
        storage: f64,
        capacity: f64,
        base: f64,
    },

    /// Metric name not in {RMSE, NSE, ROCE}.
    #[error("unknown error metric '{0}', expected one of RMSE, NSE, ROCE")]
    InvalidMetric(String),

    /// Two series that must be aligned have different lengths.
    #[error("{left_name} length {left} does not match {right_name} length {right}")]
    LengthMismatch {
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    },

    /// Forcing data rejected at construction.
    #[error("invalid forcing: {0}")]
    InvalidForcing(String),

    /// A flat array does not have the layout expected for decoding.
    #[error("expected {expected} {what} elements, got {got}")]
    ArrayLength {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// Nothing left to aggregate once missing values are removed.
    #[error("{metric}: no valid values left after removing missing entries")]
    NoValidData { metric: &'static str },
}

/// Convenience alias for `Result<T, HymodError>`.
pub type HymodResult<T> = Result<T, HymodError>;
