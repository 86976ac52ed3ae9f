use crate::error::HymodResult;

/// Core trait for lumped hydrological models.
///
/// Defines the interface a model implements: initialize state, describe the
/// state at rest, step, and run over a timeseries.
pub trait HydrologicalModel {
    const NAME: &'static str;
    type Params;
    type State: Clone;
    type Forcing: Copy;
    type Fluxes;
    type FluxesTimeseries: FluxesTimeseriesOps<Self::Fluxes>;

    /// Create a default initial state from parameters.
    fn initialize_state(params: &Self::Params) -> Self::State;

    /// Flux record for a state before any routing has happened.
    fn rest_fluxes(state: &Self::State) -> Self::Fluxes;

    /// Execute one timestep: given state, params and forcing, return the new
    /// state and fluxes.
    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
    ) -> HymodResult<(Self::State, Self::Fluxes)>;

    /// Run the model over a forcing timeseries.
    ///
    /// Record 0 is the rest record of the initial state. Record `t + 1` is
    /// produced by stepping forcing `t`, so the last forcing entry only
    /// closes the window and the output has the same length as the input.
    fn run(
        params: &Self::Params,
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
    ) -> HymodResult<Self::FluxesTimeseries> {
        let mut state = match initial_state {
            Some(s) => s.clone(),
            None => Self::initialize_state(params),
        };

        let n = forcing.len();
        let mut outputs = Self::FluxesTimeseries::with_capacity(n);
        if n == 0 {
            return Ok(outputs);
        }

        outputs.push(&Self::rest_fluxes(&state));
        for f in &forcing[..n - 1] {
            let (new_state, fluxes) = Self::step(&state, params, f)?;
            outputs.push(&fluxes);
            state = new_state;
        }

        Ok(outputs)
    }
}

/// Operations required on the timeseries collection type.
pub trait FluxesTimeseriesOps<F> {
    fn with_capacity(n: usize) -> Self;
    fn push(&mut self, f: &F);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// Parameter sets that round-trip through a flat `f64` array.
pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];
    const PARAM_BOUNDS: &'static [(f64, f64)];

    fn from_array(arr: &[f64]) -> HymodResult<Self>;
    fn to_array(&self) -> Vec<f64>;
}

/// Model states that round-trip through a flat `f64` array.
pub trait ModelState: Sized {
    fn to_vec(&self) -> Vec<f64>;
    fn from_slice(arr: &[f64]) -> HymodResult<Self>;
    fn array_len(&self) -> usize;
}
