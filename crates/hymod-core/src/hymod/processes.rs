/// HYMOD soil moisture accounting.
///
/// The soil store is a population of point stores whose capacities follow
/// a Pareto distribution with maximum `C_max` and shape `B`. Its level is
/// tracked as the catchment-average storage `S`, related to the critical
/// capacity `C*` by `S = C_max/(B+1) * (1 - (1 - C*/C_max)^(B+1))`.
use super::constants::DRIFT_TOLERANCE;
use crate::error::{HymodError, HymodResult};

/// Result of one soil moisture accounting step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilMoistureUpdate {
    /// Saturation excess: rain falling on already-full point stores [mm].
    pub saturation_excess: f64,
    /// Water the store could not absorb while filling [mm].
    pub infiltration_excess: f64,
    /// Evaporation taken from the store [mm].
    pub actual_et: f64,
    /// Store level after rainfall and evaporation [mm].
    pub storage: f64,
}

impl SoilMoistureUpdate {
    /// Total effective rainfall leaving the store.
    pub fn excess(&self) -> f64 {
        self.saturation_excess + self.infiltration_excess
    }
}

/// Critical capacity `C*` for a catchment-average storage.
///
/// Inverts the store-capacity curve. A base within `DRIFT_TOLERANCE` below
/// zero is floating drift past the capacity and clamps to `C* = C_max`;
/// a base further below zero is a `NumericDomainError`.
pub fn critical_capacity(storage: f64, c_max: f64, b_exp: f64) -> HymodResult<f64> {
    let b1 = b_exp + 1.0;
    let base = 1.0 - b1 * storage / c_max;
    if base < -DRIFT_TOLERANCE || base.is_nan() {
        log::warn!("soil inversion base {base} out of domain for storage {storage}");
        return Err(HymodError::NumericDomainError {
            storage,
            capacity: c_max / b1,
            base,
        });
    }
    if base < 0.0 {
        log::trace!("clamping soil inversion base {base} to 0");
    }
    Ok(c_max * (1.0 - base.max(0.0).powf(1.0 / b1)))
}

/// Catchment-average storage for a critical capacity fraction `C*/C_max`.
///
/// The fraction is clamped to 1 so the power base stays non-negative.
pub fn storage_at(fraction: f64, c_max: f64, b_exp: f64) -> f64 {
    let b1 = b_exp + 1.0;
    (c_max / b1) * (1.0 - (1.0 - fraction.min(1.0)).powf(b1))
}

/// Run one timestep of the soil moisture store.
///
/// 1. Rain above the remaining headroom `C_max - C*` spills as saturation excess.
/// 2. The rest raises `C*`; what the average storage does not gain is
///    infiltration excess.
/// 3. Evaporation is `PET` scaled by the filled fraction of the store.
pub fn soil_moisture_update(
    storage: f64,
    c_max: f64,
    b_exp: f64,
    precip: f64,
    pet: f64,
) -> HymodResult<SoilMoistureUpdate> {
    let c_prev = critical_capacity(storage, c_max, b_exp)?;

    let saturation_excess = (precip - c_max + c_prev).max(0.0);
    let remaining = precip - saturation_excess;

    let filled = storage_at((c_prev + remaining) / c_max, c_max, b_exp);
    let infiltration_excess = (remaining - (filled - storage)).max(0.0);

    let capacity = c_max / (b_exp + 1.0);
    let evap = (1.0 - (capacity - filled) / capacity) * pet;
    let new_storage = (filled - evap).max(0.0);

    Ok(SoilMoistureUpdate {
        saturation_excess,
        infiltration_excess,
        actual_et: filled - new_storage,
        storage: new_storage,
    })
}
