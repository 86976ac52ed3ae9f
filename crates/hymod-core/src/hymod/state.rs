/// HYMOD model state variables.
///
/// Evolves during simulation:
/// - `soil_storage`: soil moisture store level [mm], in `[0, C_max/(B+1)]`
/// - `quick_storage`: one level per quick-flow reservoir [mm]
/// - `slow_storage`: slow-flow reservoir level [mm]
use smallvec::SmallVec;

use super::constants::LUMPED_STATE_SIZE;
use super::params::{invalid, Parameters};
use crate::error::{HymodError, HymodResult};
use crate::traits::ModelState;

/// Quick-flow cascade storages. Seven reservoirs covers the usual range
/// without spilling to the heap.
pub type CascadeStorage = SmallVec<[f64; 8]>;

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub soil_storage: f64,
    pub quick_storage: CascadeStorage,
    pub slow_storage: f64,
}

impl State {
    /// Create initial state from parameters: every store empty.
    pub fn initialize(params: &Parameters) -> Self {
        Self {
            soil_storage: 0.0,
            quick_storage: smallvec::smallvec![0.0; params.n_reservoirs],
            slow_storage: 0.0,
        }
    }

    /// Create initial state from caller-supplied levels.
    ///
    /// `quick` fills every reservoir of the cascade. All levels must be
    /// non-negative and `soil` may not exceed the store capacity.
    pub fn from_initial(params: &Parameters, soil: f64, quick: f64, slow: f64) -> HymodResult<Self> {
        let state = Self {
            soil_storage: soil,
            quick_storage: smallvec::smallvec![quick; params.n_reservoirs],
            slow_storage: slow,
        };
        state.check(params)?;
        Ok(state)
    }

    /// Check that this state can start a run with `params`.
    ///
    /// The cascade must have `n_reservoirs` stores, every level must be a
    /// finite amount `>= 0`, and the soil level may not exceed the store
    /// capacity.
    pub fn check(&self, params: &Parameters) -> HymodResult<()> {
        if self.n_reservoirs() != params.n_reservoirs {
            return Err(HymodError::ArrayLength {
                what: "quick reservoir",
                expected: params.n_reservoirs,
                got: self.n_reservoirs(),
            });
        }
        if !(0.0..=params.soil_capacity()).contains(&self.soil_storage) {
            return Err(invalid(
                "soil_initial",
                self.soil_storage,
                "[0, c_max / (b_exp + 1)]",
            ));
        }
        if let Some(&q) = self.quick_storage.iter().find(|&&q| !is_level(q)) {
            return Err(invalid("quick_initial", q, "[0, inf)"));
        }
        if !is_level(self.slow_storage) {
            return Err(invalid("slow_initial", self.slow_storage, "[0, inf)"));
        }
        Ok(())
    }

    /// Number of quick-flow reservoirs.
    pub fn n_reservoirs(&self) -> usize {
        self.quick_storage.len()
    }

    /// Water held across the whole quick-flow cascade.
    pub fn quick_total(&self) -> f64 {
        self.quick_storage.iter().sum()
    }
}

fn is_level(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

impl ModelState for State {
    /// Layout: `[soil, quick_0, ..., quick_{N-1}, slow]`.
    fn to_vec(&self) -> Vec<f64> {
        let mut arr = Vec::with_capacity(self.array_len());
        arr.push(self.soil_storage);
        arr.extend_from_slice(&self.quick_storage);
        arr.push(self.slow_storage);
        arr
    }

    fn from_slice(arr: &[f64]) -> HymodResult<Self> {
        if arr.len() <= LUMPED_STATE_SIZE {
            return Err(HymodError::ArrayLength {
                what: "state",
                expected: LUMPED_STATE_SIZE + 1,
                got: arr.len(),
            });
        }
        if let Some(&v) = arr.iter().find(|&&v| !is_level(v)) {
            return Err(invalid("state", v, "[0, inf)"));
        }
        let last = arr.len() - 1;
        Ok(Self {
            soil_storage: arr[0],
            quick_storage: SmallVec::from_slice(&arr[1..last]),
            slow_storage: arr[last],
        })
    }

    fn array_len(&self) -> usize {
        self.n_reservoirs() + LUMPED_STATE_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_params() -> Parameters {
        Parameters::new(3, 100.0, 2.0, 0.3, 0.33, 0.07).unwrap()
    }

    #[test]
    fn initialize_is_empty() {
        let s = State::initialize(&test_params());
        assert_eq!(s.soil_storage, 0.0);
        assert_eq!(s.quick_storage.as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(s.slow_storage, 0.0);
    }

    #[test]
    fn from_initial_fills_every_quick_reservoir() {
        let s = State::from_initial(&test_params(), 10.0, 2.0, 5.0).unwrap();
        assert_eq!(s.quick_storage.as_slice(), &[2.0, 2.0, 2.0]);
        assert_eq!(s.quick_total(), 6.0);
    }

    #[test]
    fn from_initial_rejects_soil_above_capacity() {
        let err = State::from_initial(&test_params(), 40.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            HymodError::InvalidParameter { name: "soil_initial", .. }
        ));
    }

    #[test]
    fn from_initial_rejects_negative_stores() {
        assert!(State::from_initial(&test_params(), 0.0, -1.0, 0.0).is_err());
        assert!(State::from_initial(&test_params(), 0.0, 0.0, -1.0).is_err());
    }

    #[test]
    fn model_state_roundtrip() {
        let mut s = State::initialize(&test_params());
        s.soil_storage = 12.0;
        s.quick_storage[2] = 4.0;
        s.slow_storage = 7.0;
        let v = s.to_vec();
        assert_eq!(v, vec![12.0, 0.0, 0.0, 4.0, 7.0]);
        let s2 = State::from_slice(&v).unwrap();
        assert_eq!(s2, s);
        assert_eq!(s2.array_len(), 5);
    }

    #[test]
    fn model_state_too_short() {
        assert!(State::from_slice(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn model_state_rejects_negative_levels() {
        let err = State::from_slice(&[-5.0, -1.0, -1.0, -1.0, -10.0]).unwrap_err();
        assert!(matches!(err, HymodError::InvalidParameter { name: "state", .. }));
        assert!(State::from_slice(&[0.0, f64::NAN, 0.0]).is_err());
    }

    #[test]
    fn check_rejects_soil_above_capacity_and_wrong_cascade() {
        let p = test_params();
        let s = State::from_slice(&[50.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            s.check(&p),
            Err(HymodError::InvalidParameter { name: "soil_initial", .. })
        ));

        let short = State::from_slice(&[0.0, 0.0, 0.0]).unwrap();
        assert!(matches!(
            short.check(&p),
            Err(HymodError::ArrayLength { expected: 3, got: 1, .. })
        ));
    }
}
