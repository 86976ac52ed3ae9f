use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use hymod_core::metrics;

use crate::convert::{contiguous_slice, to_py_err};

/// Score `simulated` against `observed` with `RMSE`, `NSE` or `ROCE`.
///
/// NaN marks a missing value.
#[pyfunction]
fn score(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    precip: PyReadonlyArray1<'_, f64>,
    metric: &str,
) -> PyResult<f64> {
    metrics::score_by_name(
        contiguous_slice(&observed)?,
        contiguous_slice(&simulated)?,
        contiguous_slice(&precip)?,
        metric,
    )
    .map_err(to_py_err)
}

#[pyfunction]
fn rmse(observed: PyReadonlyArray1<'_, f64>, simulated: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    metrics::rmse(contiguous_slice(&observed)?, contiguous_slice(&simulated)?).map_err(to_py_err)
}

#[pyfunction]
fn nse(observed: PyReadonlyArray1<'_, f64>, simulated: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    metrics::nse(contiguous_slice(&observed)?, contiguous_slice(&simulated)?).map_err(to_py_err)
}

#[pyfunction]
fn roce(
    observed: PyReadonlyArray1<'_, f64>,
    simulated: PyReadonlyArray1<'_, f64>,
    precip: PyReadonlyArray1<'_, f64>,
) -> PyResult<f64> {
    metrics::roce(
        contiguous_slice(&observed)?,
        contiguous_slice(&simulated)?,
        contiguous_slice(&precip)?,
    )
    .map_err(to_py_err)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "metrics")?;
    m.add_function(wrap_pyfunction!(score, &m)?)?;
    m.add_function(wrap_pyfunction!(rmse, &m)?)?;
    m.add_function(wrap_pyfunction!(nse, &m)?)?;
    m.add_function(wrap_pyfunction!(roce, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
