/// HYMOD flux outputs.
///
/// Two levels: `Fluxes` holds a single output index, `FluxesTimeseries`
/// holds the full simulation (Vec of each field).
use crate::traits::FluxesTimeseriesOps;

/// Single-index fluxes, returned by `step()`.
///
/// Storages are end-of-step levels; flows are totals over the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fluxes {
    pub precip: f64,              // forcing consumed [mm/day]
    pub pet: f64,                 // forcing consumed [mm/day]
    pub saturation_excess: f64,   // rain on saturated point stores [mm/day]
    pub infiltration_excess: f64, // rain the store could not absorb [mm/day]
    pub actual_et: f64,           // evaporation from the soil store [mm/day]
    pub soil_storage: f64,        // soil store level [mm]
    pub quick_inflow: f64,        // alpha * excess [mm/day]
    pub slow_inflow: f64,         // (1 - alpha) * excess [mm/day]
    pub quick_storage: f64,       // water held in the whole cascade [mm]
    pub slow_storage: f64,        // slow reservoir level [mm]
    pub quick_outflow: f64,       // release of the last quick reservoir [mm/day]
    pub slow_outflow: f64,        // slow reservoir release [mm/day]
    pub streamflow: f64,          // quick + slow outflow [mm/day]
}

/// Full timeseries of fluxes, returned by `run()`.
#[derive(Debug)]
pub struct FluxesTimeseries {
    pub precip: Vec<f64>,
    pub pet: Vec<f64>,
    pub saturation_excess: Vec<f64>,
    pub infiltration_excess: Vec<f64>,
    pub actual_et: Vec<f64>,
    pub soil_storage: Vec<f64>,
    pub quick_inflow: Vec<f64>,
    pub slow_inflow: Vec<f64>,
    pub quick_storage: Vec<f64>,
    pub slow_storage: Vec<f64>,
    pub quick_outflow: Vec<f64>,
    pub slow_outflow: Vec<f64>,
    pub streamflow: Vec<f64>,
}

impl FluxesTimeseries {
    /// Pre-allocate all vectors for `n` timesteps.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            precip: Vec::with_capacity(n),
            pet: Vec::with_capacity(n),
            saturation_excess: Vec::with_capacity(n),
            infiltration_excess: Vec::with_capacity(n),
            actual_et: Vec::with_capacity(n),
            soil_storage: Vec::with_capacity(n),
            quick_inflow: Vec::with_capacity(n),
            slow_inflow: Vec::with_capacity(n),
            quick_storage: Vec::with_capacity(n),
            slow_storage: Vec::with_capacity(n),
            quick_outflow: Vec::with_capacity(n),
            slow_outflow: Vec::with_capacity(n),
            streamflow: Vec::with_capacity(n),
        }
    }

    /// Push a single timestep's fluxes into the timeseries.
    pub fn push(&mut self, f: &Fluxes) {
        self.precip.push(f.precip);
        self.pet.push(f.pet);
        self.saturation_excess.push(f.saturation_excess);
        self.infiltration_excess.push(f.infiltration_excess);
        self.actual_et.push(f.actual_et);
        self.soil_storage.push(f.soil_storage);
        self.quick_inflow.push(f.quick_inflow);
        self.slow_inflow.push(f.slow_inflow);
        self.quick_storage.push(f.quick_storage);
        self.slow_storage.push(f.slow_storage);
        self.quick_outflow.push(f.quick_outflow);
        self.slow_outflow.push(f.slow_outflow);
        self.streamflow.push(f.streamflow);
    }

    /// Number of timesteps.
    pub fn len(&self) -> usize {
        self.streamflow.len()
    }

    /// Returns `true` if there are no timesteps.
    pub fn is_empty(&self) -> bool {
        self.streamflow.is_empty()
    }
}

impl FluxesTimeseriesOps<Fluxes> for FluxesTimeseries {
    fn with_capacity(n: usize) -> Self {
        FluxesTimeseries::with_capacity(n)
    }

    fn push(&mut self, f: &Fluxes) {
        FluxesTimeseries::push(self, f)
    }

    fn len(&self) -> usize {
        FluxesTimeseries::len(self)
    }

    fn is_empty(&self) -> bool {
        FluxesTimeseries::is_empty(self)
    }
}
