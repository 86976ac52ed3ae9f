//! Whole-run properties of the HYMOD simulation.
//!
//! - Water is conserved by every store, step by step
//! - Storages and discharge stay non-negative
//! - Without rain the routing stores drain and the soil store never grows
//! - Runs are deterministic

use approx::assert_abs_diff_eq;
use hymod_core::hymod::params::Parameters;
use hymod_core::hymod::run::{run, simulate, step};
use hymod_core::hymod::state::State;
use hymod_core::metrics::{score, score_by_name, ErrorMetric};
use hymod_core::HymodError;

/// A wet spell followed by a dry recession, two months of daily data.
fn forcing() -> (Vec<f64>, Vec<f64>) {
    let precip: Vec<f64> = (0..60)
        .map(|t| match t {
            3 => 45.0,
            4 => 80.0,
            5..=9 => 12.0,
            20 => 30.0,
            _ if t % 7 == 0 => 2.5,
            _ => 0.0,
        })
        .collect();
    let pet: Vec<f64> = (0..60).map(|t| 1.5 + (t % 5) as f64 * 0.5).collect();
    (precip, pet)
}

mod conservation {
    use super::*;

    /// Soil, cascade and slow reservoir together: rain in equals
    /// evaporation plus discharge plus change in storage.
    #[test]
    fn whole_model_water_balance() {
        let params = Parameters::default();
        let (precip, pet) = forcing();

        let mut state = State::from_initial(&params, 10.0, 1.0, 20.0).unwrap();
        for t in 0..precip.len() {
            let before = state.soil_storage + state.quick_total() + state.slow_storage;
            let (next, f) = step(&state, &params, precip[t], pet[t]).unwrap();
            let after = next.soil_storage + next.quick_total() + next.slow_storage;

            assert_abs_diff_eq!(
                precip[t] - f.actual_et - f.streamflow,
                after - before,
                epsilon = 1e-9
            );
            state = next;
        }
    }

    #[test]
    fn cascade_balance_every_step() {
        let params = Parameters::default();
        let (precip, pet) = forcing();

        let mut state = State::initialize(&params);
        for t in 0..precip.len() {
            let (next, f) = step(&state, &params, precip[t], pet[t]).unwrap();
            assert_abs_diff_eq!(
                next.quick_total() - state.quick_total(),
                f.quick_inflow - f.quick_outflow,
                epsilon = 1e-9
            );
            assert_abs_diff_eq!(
                next.slow_storage - state.slow_storage,
                f.slow_inflow - f.slow_outflow,
                epsilon = 1e-9
            );
            state = next;
        }
    }
}

mod bounds {
    use super::*;

    #[test]
    fn storages_and_discharge_non_negative() {
        let (precip, pet) = forcing();
        for n in 1..=5 {
            let params = Parameters {
                n_reservoirs: n,
                ..Parameters::default()
            };
            let result = run(&params, &precip, &pet, None).unwrap();
            let capacity = params.soil_capacity();

            for t in 0..result.len() {
                assert!(result.streamflow[t] >= 0.0, "negative discharge at t={t}");
                assert!(result.quick_storage[t] >= 0.0);
                assert!(result.slow_storage[t] >= 0.0);
                assert!((0.0..=capacity).contains(&result.soil_storage[t]));
            }
        }
    }

    #[test]
    fn saturating_rain_never_breaks_the_soil_store() {
        let params = Parameters::new(2, 50.0, 0.5, 0.6, 0.5, 0.1).unwrap();
        let precip = vec![500.0; 30];
        let pet = vec![0.0; 30];
        let q = simulate(
            &precip, &pet, 2, 50.0, 0.5, 0.6, 0.5, 0.1, params.soil_capacity(), 0.0, 0.0,
        )
        .unwrap();
        assert!(q.iter().all(|v| v.is_finite() && *v >= 0.0));
    }
}

mod recession {
    use super::*;

    #[test]
    fn every_store_drains_monotonically_without_forcing() {
        let params = Parameters::default();
        let n = 200;
        let mut precip = vec![0.0; n];
        precip[0] = 60.0;
        let pet = vec![0.0; n];

        let result = run(&params, &precip, &pet, None).unwrap();

        // After the storm has entered the cascade, routing only removes water.
        // The soil store can still leak rounding-level excess into it.
        let start = params.n_reservoirs + 1;
        for t in start..n {
            assert!(result.quick_storage[t] <= result.quick_storage[t - 1] + 1e-12);
            assert!(result.slow_storage[t] <= result.slow_storage[t - 1] + 1e-12);
            assert!(result.soil_storage[t] <= result.soil_storage[t - 1] + 1e-12);
        }
        assert!(result.quick_storage[n - 1] < 1e-6);
        assert!(result.slow_storage[n - 1] < result.slow_storage[start]);
    }

    #[test]
    fn evaporation_drains_soil_store() {
        let params = Parameters::default();
        let n = 400;
        let precip = vec![0.0; n];
        let pet = vec![3.0; n];
        let initial = State::from_initial(&params, params.soil_capacity(), 0.0, 0.0).unwrap();

        let result = run(&params, &precip, &pet, Some(&initial)).unwrap();
        for t in 1..n {
            assert!(result.soil_storage[t] <= result.soil_storage[t - 1]);
        }
        assert!(result.soil_storage[n - 1] < 1e-3);
    }
}

mod determinism {
    use super::*;

    #[test]
    fn identical_inputs_identical_outputs() {
        let (precip, pet) = forcing();
        let a = simulate(&precip, &pet, 4, 250.0, 1.2, 0.4, 0.5, 0.05, 30.0, 2.0, 10.0).unwrap();
        let b = simulate(&precip, &pet, 4, 250.0, 1.2, 0.4, 0.5, 0.05, 30.0, 2.0, 10.0).unwrap();
        assert_eq!(a, b);
    }
}

mod scoring {
    use super::*;

    #[test]
    fn simulation_scored_against_itself_is_perfect() {
        let (precip, pet) = forcing();
        let q = simulate(&precip, &pet, 3, 100.0, 2.0, 0.3, 0.33, 0.07, 0.0, 0.0, 0.0).unwrap();

        assert_abs_diff_eq!(score(&q, &q, &precip, ErrorMetric::Rmse).unwrap(), 0.0);
        assert_abs_diff_eq!(score(&q, &q, &precip, ErrorMetric::Nse).unwrap(), 1.0);
        assert_abs_diff_eq!(score(&q, &q, &precip, ErrorMetric::Roce).unwrap(), 0.0);
    }

    #[test]
    fn gaps_in_observations_are_tolerated() {
        let (precip, pet) = forcing();
        let q = simulate(&precip, &pet, 3, 100.0, 2.0, 0.3, 0.33, 0.07, 0.0, 0.0, 0.0).unwrap();
        let mut observed: Vec<f64> = q.iter().map(|v| v * 1.1).collect();
        observed[10] = f64::NAN;
        observed[11] = f64::NAN;

        for name in ["RMSE", "NSE", "ROCE"] {
            let v = score_by_name(&observed, &q, &precip, name).unwrap();
            assert!(v.is_finite(), "{name} not finite");
        }
        assert!(matches!(
            score_by_name(&observed, &q, &precip, "KGE"),
            Err(HymodError::InvalidMetric(_))
        ));
    }
}
