/// HYMOD parameters.
///
/// Six values fixed for the duration of a run:
///
/// - `n_reservoirs`: number of quick-flow reservoirs in series
/// - `c_max`: maximum soil moisture storage capacity [mm]
/// - `b_exp`: shape of the store-capacity distribution [-]
/// - `alpha`: fraction of excess rainfall routed as quick flow [-]
/// - `kq`: quick-flow reservoir rate [1/day]
/// - `ks`: slow-flow reservoir rate [1/day]
use super::constants::{
    DEFAULT_ALPHA, DEFAULT_B_EXP, DEFAULT_C_MAX, DEFAULT_KQ, DEFAULT_KS, DEFAULT_N_RESERVOIRS,
    MAX_N_RESERVOIRS, N_PARAMS, PARAM_BOUNDS, PARAM_NAMES,
};
use crate::error::{HymodError, HymodResult};
use crate::traits::ModelParams;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub n_reservoirs: usize,
    pub c_max: f64,
    pub b_exp: f64,
    pub alpha: f64,
    pub kq: f64,
    pub ks: f64,
}

impl Parameters {
    /// Create new Parameters, rejecting any value outside its domain.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn new(
        n_reservoirs: usize,
        c_max: f64,
        b_exp: f64,
        alpha: f64,
        kq: f64,
        ks: f64,
    ) -> HymodResult<Self> {
        if !(1..=MAX_N_RESERVOIRS).contains(&n_reservoirs) {
            return Err(invalid("n_reservoirs", n_reservoirs as f64, "[1, 100]"));
        }
        // Negated comparisons so NaN is rejected too.
        if !(c_max > 0.0 && c_max.is_finite()) {
            return Err(invalid("c_max", c_max, "(0, inf)"));
        }
        if !(b_exp > -1.0 && b_exp.is_finite()) {
            return Err(invalid("b_exp", b_exp, "(-1, inf)"));
        }
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid("alpha", alpha, "[0, 1]"));
        }
        if !(kq > 0.0 && kq < 1.0) {
            return Err(invalid("kq", kq, "(0, 1)"));
        }
        if !(0.0..1.0).contains(&ks) {
            return Err(invalid("ks", ks, "[0, 1)"));
        }
        Ok(Self {
            n_reservoirs,
            c_max,
            b_exp,
            alpha,
            kq,
            ks,
        })
    }

    /// Largest storage the soil store can hold: `C_max / (B_exp + 1)`.
    pub fn soil_capacity(&self) -> f64 {
        self.c_max / (self.b_exp + 1.0)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            n_reservoirs: DEFAULT_N_RESERVOIRS,
            c_max: DEFAULT_C_MAX,
            b_exp: DEFAULT_B_EXP,
            alpha: DEFAULT_ALPHA,
            kq: DEFAULT_KQ,
            ks: DEFAULT_KS,
        }
    }
}

pub(crate) fn invalid(name: &'static str, value: f64, domain: &'static str) -> HymodError {
    HymodError::InvalidParameter {
        name,
        value,
        domain,
    }
}

impl ModelParams for Parameters {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;
    const PARAM_BOUNDS: &'static [(f64, f64)] = PARAM_BOUNDS;

    /// `n_reservoirs` travels as the first element and must be integral.
    fn from_array(arr: &[f64]) -> HymodResult<Self> {
        if arr.len() != N_PARAMS {
            return Err(HymodError::ArrayLength {
                what: "parameter",
                expected: N_PARAMS,
                got: arr.len(),
            });
        }
        let n = arr[0];
        if !((1.0..=MAX_N_RESERVOIRS as f64).contains(&n) && n.fract() == 0.0) {
            return Err(invalid("n_reservoirs", n, "integer in [1, 100]"));
        }
        Self::new(n as usize, arr[1], arr[2], arr[3], arr[4], arr[5])
    }

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.n_reservoirs as f64,
            self.c_max,
            self.b_exp,
            self.alpha,
            self.kq,
            self.ks,
        ]
    }
}
