use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{checked_slice, contiguous_slice, to_py_err};

use hymod_core::hymod::constants::{LUMPED_STATE_SIZE, N_PARAMS};
use hymod_core::hymod::params::Parameters;
use hymod_core::hymod::run;
use hymod_core::hymod::state::State;
use hymod_core::traits::{ModelParams, ModelState};

for_each_flux!(define_flux_classes! {});

fn parse_params(params: &PyReadonlyArray1<'_, f64>) -> PyResult<Parameters> {
    let p_slice = checked_slice(params, N_PARAMS, "params")?;
    Parameters::from_array(p_slice).map_err(to_py_err)
}

fn parse_state(state: &PyReadonlyArray1<'_, f64>, params: &Parameters, name: &str) -> PyResult<State> {
    let s_slice = checked_slice(state, params.n_reservoirs + LUMPED_STATE_SIZE, name)?;
    let s = State::from_slice(s_slice).map_err(to_py_err)?;
    s.check(params).map_err(to_py_err)?;
    Ok(s)
}

fn run_core(
    params: &PyReadonlyArray1<'_, f64>,
    precip: &PyReadonlyArray1<'_, f64>,
    pet: &PyReadonlyArray1<'_, f64>,
    initial_state: Option<&PyReadonlyArray1<'_, f64>>,
) -> PyResult<hymod_core::hymod::fluxes::FluxesTimeseries> {
    let p = parse_params(params)?;
    let precip_slice = contiguous_slice(precip)?;
    let pet_slice = contiguous_slice(pet)?;

    let state = match initial_state {
        Some(s) => Some(parse_state(s, &p, "initial_state")?),
        None => None,
    };

    run::run(&p, precip_slice, pet_slice, state.as_ref()).map_err(to_py_err)
}

// ---------------------------------------------------------------------------
// Dict-returning functions
// ---------------------------------------------------------------------------

/// Run HYMOD over a timeseries.
///
/// `params` is `[n_reservoirs, c_max, b_exp, alpha, kq, ks]`; the optional
/// state is `[soil, quick_0, ..., quick_{N-1}, slow]`.
#[pyfunction]
#[pyo3(signature = (params, precip, pet, initial_state=None))]
fn hymod_run<'py>(
    py: Python<'py>,
    params: PyReadonlyArray1<'py, f64>,
    precip: PyReadonlyArray1<'py, f64>,
    pet: PyReadonlyArray1<'py, f64>,
    initial_state: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<Bound<'py, PyDict>> {
    let result = run_core(&params, &precip, &pet, initial_state.as_ref())?;
    HYMODResult::from_timeseries(py, result).to_dict(py)
}

/// Execute one timestep of HYMOD.
///
/// Returns (new_state_array, fluxes_dict).
#[pyfunction]
fn hymod_step<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    params: PyReadonlyArray1<'py, f64>,
    precip: f64,
    pet: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyDict>)> {
    let p = parse_params(&params)?;
    let s = parse_state(&state, &p, "state")?;

    let (new_state, fluxes) = run::step(&s, &p, precip, pet).map_err(to_py_err)?;

    let state_arr = PyArray1::from_vec(py, new_state.to_vec());
    let dict = HYMODStepFluxes::from_fluxes(&fluxes).to_dict(py)?;
    Ok((state_arr, dict))
}

// ---------------------------------------------------------------------------
// Typed variants
// ---------------------------------------------------------------------------

/// Same as `hymod_run`, returning a `HYMODResult`.
#[pyfunction]
#[pyo3(signature = (params, precip, pet, initial_state=None))]
fn hymod_run_result<'py>(
    py: Python<'py>,
    params: PyReadonlyArray1<'py, f64>,
    precip: PyReadonlyArray1<'py, f64>,
    pet: PyReadonlyArray1<'py, f64>,
    initial_state: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<HYMODResult> {
    let result = run_core(&params, &precip, &pet, initial_state.as_ref())?;
    Ok(HYMODResult::from_timeseries(py, result))
}

/// Same as `hymod_step`, returning a `HYMODStepFluxes`.
#[pyfunction]
fn hymod_step_result<'py>(
    py: Python<'py>,
    state: PyReadonlyArray1<'py, f64>,
    params: PyReadonlyArray1<'py, f64>,
    precip: f64,
    pet: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, HYMODStepFluxes)> {
    let p = parse_params(&params)?;
    let s = parse_state(&state, &p, "state")?;

    let (new_state, fluxes) = run::step(&s, &p, precip, pet).map_err(to_py_err)?;
    Ok((
        PyArray1::from_vec(py, new_state.to_vec()),
        HYMODStepFluxes::from_fluxes(&fluxes),
    ))
}

/// Discharge series from flat parameters and initial levels.
#[pyfunction]
#[pyo3(signature = (
    precip, pet, n_reservoirs, c_max, b_exp, alpha, kq, ks,
    soil_initial=0.0, quick_initial=0.0, slow_initial=0.0
))]
#[allow(clippy::too_many_arguments)]
fn simulate<'py>(
    py: Python<'py>,
    precip: PyReadonlyArray1<'py, f64>,
    pet: PyReadonlyArray1<'py, f64>,
    n_reservoirs: usize,
    c_max: f64,
    b_exp: f64,
    alpha: f64,
    kq: f64,
    ks: f64,
    soil_initial: f64,
    quick_initial: f64,
    slow_initial: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let q = run::simulate(
        contiguous_slice(&precip)?,
        contiguous_slice(&pet)?,
        n_reservoirs,
        c_max,
        b_exp,
        alpha,
        kq,
        ks,
        soil_initial,
        quick_initial,
        slow_initial,
    )
    .map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, q))
}

/// Calibration bounds as `{name: (low, high)}`.
#[pyfunction]
fn hymod_param_bounds(py: Python<'_>) -> PyResult<Bound<'_, PyDict>> {
    let dict = PyDict::new(py);
    for (name, bounds) in Parameters::PARAM_NAMES.iter().zip(Parameters::PARAM_BOUNDS) {
        dict.set_item(*name, *bounds)?;
    }
    Ok(dict)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "hymod")?;
    m.add_function(wrap_pyfunction!(hymod_run, &m)?)?;
    m.add_function(wrap_pyfunction!(hymod_step, &m)?)?;
    m.add_function(wrap_pyfunction!(hymod_run_result, &m)?)?;
    m.add_function(wrap_pyfunction!(hymod_step_result, &m)?)?;
    m.add_function(wrap_pyfunction!(simulate, &m)?)?;
    m.add_function(wrap_pyfunction!(hymod_param_bounds, &m)?)?;
    m.add_class::<HYMODResult>()?;
    m.add_class::<HYMODStepFluxes>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
