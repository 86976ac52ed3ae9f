/// HYMOD, a lumped conceptual rainfall-runoff model.
///
/// A probability-distributed soil moisture store feeds a cascade of
/// quick-flow linear reservoirs and a single slow-flow linear reservoir.
/// Six parameters, 2 + N state stores, daily timestep.
pub mod constants;
pub mod fluxes;
pub mod params;
pub mod processes;
pub mod routing;
pub mod run;
pub mod state;
