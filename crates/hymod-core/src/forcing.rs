use crate::error::{HymodError, HymodResult};

/// Temporal resolution of forcing data.
///
/// Ordered from finest to coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Resolution {
    Hourly,
    Daily,
    Monthly,
    Annual,
}

/// One timestep of forcing: precipitation and potential evapotranspiration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forcing {
    pub precip: f64,
    pub pet: f64,
}

/// Validated forcing series.
///
/// Both arrays have the same, non-zero length and hold finite,
/// non-negative amounts.
#[derive(Debug)]
pub struct ForcingData {
    pub precip: Vec<f64>,
    pub pet: Vec<f64>,
    pub resolution: Resolution,
}

impl ForcingData {
    /// Create new ForcingData with validation.
    ///
    /// Validates:
    /// - precip and pet have the same length
    /// - No NaN, infinite or negative values in either array
    /// - Arrays are non-empty
    pub fn new(precip: Vec<f64>, pet: Vec<f64>, resolution: Resolution) -> HymodResult<Self> {
        if precip.is_empty() {
            return Err(HymodError::InvalidForcing("precip array is empty".to_string()));
        }
        check_same_length("precip", &precip, "pet", &pet)?;
        check_amounts("precip", &precip)?;
        check_amounts("pet", &pet)?;
        Ok(Self {
            precip,
            pet,
            resolution,
        })
    }

    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.precip.len()
    }

    /// Returns `true` if there are no timesteps.
    pub fn is_empty(&self) -> bool {
        self.precip.is_empty()
    }

    /// Per-timestep forcing records.
    pub fn records(&self) -> Vec<Forcing> {
        zip_forcing(&self.precip, &self.pet)
    }
}

/// Fail with `LengthMismatch` unless both series have the same length.
pub(crate) fn check_same_length(
    left_name: &'static str,
    left: &[f64],
    right_name: &'static str,
    right: &[f64],
) -> HymodResult<()> {
    if left.len() != right.len() {
        return Err(HymodError::LengthMismatch {
            left_name,
            left: left.len(),
            right_name,
            right: right.len(),
        });
    }
    Ok(())
}

fn is_amount(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

/// Fail with `InvalidForcing` at the first value that is not a finite,
/// non-negative amount.
pub(crate) fn check_amounts(name: &'static str, values: &[f64]) -> HymodResult<()> {
    match values.iter().position(|&v| !is_amount(v)) {
        Some(i) => Err(HymodError::InvalidForcing(format!(
            "{name} has {} at index {i}, expected a finite amount >= 0",
            values[i]
        ))),
        None => Ok(()),
    }
}

/// Single-value form of [`check_amounts`].
pub(crate) fn check_amount(name: &'static str, value: f64) -> HymodResult<()> {
    if is_amount(value) {
        Ok(())
    } else {
        Err(HymodError::InvalidForcing(format!(
            "{name} is {value}, expected a finite amount >= 0"
        )))
    }
}

pub(crate) fn zip_forcing(precip: &[f64], pet: &[f64]) -> Vec<Forcing> {
    precip
        .iter()
        .zip(pet)
        .map(|(&precip, &pet)| Forcing { precip, pet })
        .collect()
}
