use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use hymod_core::pet;

use crate::convert::{contiguous_slice, to_py_err};

#[pyfunction]
fn saturation_vapor_pressure(temp: f64) -> f64 {
    pet::saturation_vapor_pressure(temp)
}

/// Hamon PET [mm/day] for one day.
#[pyfunction]
fn estimate_pet(k: f64, temp: f64, daylight_hours: f64) -> f64 {
    pet::estimate_pet(k, temp, daylight_hours)
}

#[pyfunction]
fn pet_series<'py>(
    py: Python<'py>,
    k: f64,
    temps: PyReadonlyArray1<'py, f64>,
    daylight_hours: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let series = pet::pet_series(
        k,
        contiguous_slice(&temps)?,
        contiguous_slice(&daylight_hours)?,
    )
    .map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, series))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "pet")?;
    m.add_function(wrap_pyfunction!(saturation_vapor_pressure, &m)?)?;
    m.add_function(wrap_pyfunction!(estimate_pet, &m)?)?;
    m.add_function(wrap_pyfunction!(pet_series, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
