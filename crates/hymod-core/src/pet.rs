//! Temperature-based potential evapotranspiration (Hamon).
//!
//! Only needed when a catchment has temperature records but no PET series.
//! The simulation never calls into this module.
use crate::error::HymodResult;
use crate::forcing::check_same_length;

/// Saturation vapour pressure [hPa] at air temperature `temp` [°C] (Tetens).
#[inline]
pub fn saturation_vapor_pressure(temp: f64) -> f64 {
    6.108 * ((17.27 * temp) / (temp + 237.3)).exp()
}

/// Hamon PET [mm/day].
///
/// - `k`: proportionality coefficient [-]
/// - `temp`: mean air temperature [°C]
/// - `daylight_hours`: day length [h]
#[inline]
pub fn estimate_pet(k: f64, temp: f64, daylight_hours: f64) -> f64 {
    let e_sat = saturation_vapor_pressure(temp);
    k * 0.165 * 216.7 * daylight_hours * (e_sat / (temp + 273.3))
}

/// Hamon PET for a temperature series with per-step day lengths.
///
/// Fails with `LengthMismatch` if the two slices differ in length.
pub fn pet_series(k: f64, temps: &[f64], daylight_hours: &[f64]) -> HymodResult<Vec<f64>> {
    check_same_length("temps", temps, "daylight_hours", daylight_hours)?;
    Ok(temps
        .iter()
        .zip(daylight_hours)
        .map(|(&t, &n)| estimate_pet(k, t, n))
        .collect())
}
