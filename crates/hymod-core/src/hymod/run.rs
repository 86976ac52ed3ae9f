/// HYMOD model orchestration functions.
///
/// - `step()`: Execute a single timestep → (State, Fluxes)
/// - `run()`: Execute over a timeseries → FluxesTimeseries
/// - `simulate()`: Flat-argument entry point → discharge series
use super::constants::SUPPORTED_RESOLUTIONS;
use super::fluxes::{Fluxes, FluxesTimeseries};
use super::params::Parameters;
use super::processes;
use super::routing;
use super::state::State;
use crate::error::{HymodError, HymodResult};
use crate::forcing::{
    check_amount, check_amounts, check_same_length, zip_forcing, Forcing, ForcingData,
};
use crate::traits::HydrologicalModel;

/// Execute one timestep of HYMOD.
///
/// Takes current state + forcing, returns new state + all fluxes.
/// The input state is not modified. Forcing must be finite and
/// non-negative.
pub fn step(
    state: &State,
    params: &Parameters,
    precip: f64,
    pet: f64,
) -> HymodResult<(State, Fluxes)> {
    check_amount("precip", precip)?;
    check_amount("pet", pet)?;

    // 1. Soil moisture accounting
    let soil = processes::soil_moisture_update(
        state.soil_storage,
        params.c_max,
        params.b_exp,
        precip,
        pet,
    )?;
    let excess = soil.excess();

    // 2. Quick flow
    let quick_inflow = params.alpha * excess;
    let (quick_storage, quick_outflow) =
        routing::quick_flow_cascade(&state.quick_storage, quick_inflow, params.kq);

    // 3. Slow flow
    let slow_inflow = (1.0 - params.alpha) * excess;
    let (slow_storage, slow_outflow) =
        routing::slow_flow_reservoir(state.slow_storage, slow_inflow, params.ks);

    let new_state = State {
        soil_storage: soil.storage,
        quick_storage,
        slow_storage,
    };

    let fluxes = Fluxes {
        precip,
        pet,
        saturation_excess: soil.saturation_excess,
        infiltration_excess: soil.infiltration_excess,
        actual_et: soil.actual_et,
        soil_storage: soil.storage,
        quick_inflow,
        slow_inflow,
        quick_storage: new_state.quick_total(),
        slow_storage,
        quick_outflow,
        slow_outflow,
        streamflow: quick_outflow + slow_outflow,
    };

    Ok((new_state, fluxes))
}

/// Marker type for the HYMOD trait implementation.
pub struct Hymod;

impl HydrologicalModel for Hymod {
    const NAME: &'static str = "HYMOD";
    type Params = Parameters;
    type State = State;
    type Forcing = Forcing;
    type Fluxes = Fluxes;
    type FluxesTimeseries = FluxesTimeseries;

    fn initialize_state(params: &Self::Params) -> Self::State {
        State::initialize(params)
    }

    fn rest_fluxes(state: &Self::State) -> Self::Fluxes {
        Fluxes {
            precip: 0.0,
            pet: 0.0,
            saturation_excess: 0.0,
            infiltration_excess: 0.0,
            actual_et: 0.0,
            soil_storage: state.soil_storage,
            quick_inflow: 0.0,
            slow_inflow: 0.0,
            quick_storage: state.quick_total(),
            slow_storage: state.slow_storage,
            quick_outflow: 0.0,
            slow_outflow: 0.0,
            streamflow: 0.0,
        }
    }

    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
    ) -> HymodResult<(Self::State, Self::Fluxes)> {
        step(state, params, forcing.precip, forcing.pet)
    }
}

/// Run HYMOD over a timeseries.
///
/// Output index 0 is the initial state with zero flow; index `t + 1` is the
/// result of stepping forcing `t`. If no initial state is provided, every
/// store starts empty; a provided state is checked against `params`.
/// Forcing values must be finite and non-negative.
pub fn run(
    params: &Parameters,
    precip: &[f64],
    pet: &[f64],
    initial_state: Option<&State>,
) -> HymodResult<FluxesTimeseries> {
    check_same_length("precip", precip, "pet", pet)?;
    check_amounts("precip", precip)?;
    check_amounts("pet", pet)?;
    if let Some(s) = initial_state {
        s.check(params)?;
    }

    log::debug!(
        "running {} over {} timesteps with {} quick reservoirs",
        Hymod::NAME,
        precip.len(),
        params.n_reservoirs
    );
    let outputs = Hymod::run(params, &zip_forcing(precip, pet), initial_state)?;
    log::debug!("{} run finished", Hymod::NAME);

    Ok(outputs)
}

/// Run HYMOD over validated forcing data.
///
/// The parameter set is calibrated for daily steps; other resolutions fail
/// with `InvalidForcing`.
pub fn run_forcing(
    params: &Parameters,
    forcing: &ForcingData,
    initial_state: Option<&State>,
) -> HymodResult<FluxesTimeseries> {
    if !SUPPORTED_RESOLUTIONS.contains(&forcing.resolution) {
        return Err(HymodError::InvalidForcing(format!(
            "{} supports {:?} forcing, got {:?}",
            Hymod::NAME,
            SUPPORTED_RESOLUTIONS,
            forcing.resolution
        )));
    }
    run(params, &forcing.precip, &forcing.pet, initial_state)
}

/// Simulate discharge from flat arguments.
///
/// Validates the parameters and initial levels, then runs the model. The
/// quick initial level is applied to every reservoir of the cascade.
/// Returns a discharge series as long as the inputs, starting at 0.
#[allow(clippy::too_many_arguments)]
pub fn simulate(
    precip: &[f64],
    pet: &[f64],
    n_reservoirs: usize,
    c_max: f64,
    b_exp: f64,
    alpha: f64,
    kq: f64,
    ks: f64,
    soil_initial: f64,
    quick_initial: f64,
    slow_initial: f64,
) -> HymodResult<Vec<f64>> {
    let params = Parameters::new(n_reservoirs, c_max, b_exp, alpha, kq, ks)?;
    let state = State::from_initial(&params, soil_initial, quick_initial, slow_initial)?;
    Ok(run(&params, precip, pet, Some(&state))?.streamflow)
}
