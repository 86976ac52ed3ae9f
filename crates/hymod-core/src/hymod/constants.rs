/// HYMOD numerical constants and model contract.
///
/// Centralises the fixed values used throughout the model.
use crate::forcing::Resolution;

// -- Numerical safeguards --

/// Relative tolerance on the soil-store inversion base `1 - (B+1) S / C_max`.
///
/// Bases in `[-DRIFT_TOLERANCE, 0)` are floating drift and clamp to 0;
/// anything more negative is a domain violation.
pub const DRIFT_TOLERANCE: f64 = 1e-9;

/// Longest quick-flow cascade accepted by `Parameters::new`.
pub const MAX_N_RESERVOIRS: usize = 100;

// -- Model contract constants --

/// Parameter names in canonical order.
pub const PARAM_NAMES: &[&str] = &["n_reservoirs", "c_max", "b_exp", "alpha", "kq", "ks"];

/// Number of parameters.
pub const N_PARAMS: usize = 6;

/// Number of scalar stores besides the quick-flow cascade (soil, slow).
pub const LUMPED_STATE_SIZE: usize = 2;

/// Supported temporal resolutions for forcing data.
pub const SUPPORTED_RESOLUTIONS: &[Resolution] = &[Resolution::Daily];

// -- Defaults --

/// Parameter values the interactive front-end starts from.
pub const DEFAULT_N_RESERVOIRS: usize = 3;
pub const DEFAULT_C_MAX: f64 = 100.0;
pub const DEFAULT_B_EXP: f64 = 2.0;
pub const DEFAULT_ALPHA: f64 = 0.30;
pub const DEFAULT_KQ: f64 = 0.33;
pub const DEFAULT_KS: f64 = 0.07;

// -- Parameter bounds --

/// Parameter bounds for calibration: (min, max).
///
/// These are the usual search ranges. The hard domains enforced by
/// `Parameters::new` are wider.
pub const PARAM_BOUNDS: &[(f64, f64)] = &[
    (1.0, 7.0),     // n_reservoirs
    (10.0, 2000.0), // c_max [mm]
    (0.0, 7.0),     // b_exp [-]
    (0.0, 1.0),     // alpha [-]
    (0.15, 1.0),    // kq [1/day]
    (0.0, 0.15),    // ks [1/day]
];
