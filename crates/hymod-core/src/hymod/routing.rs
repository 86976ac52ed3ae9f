/// HYMOD routing functions.
///
/// Quick flow passes through a cascade of identical linear reservoirs,
/// slow flow through a single linear reservoir.
use super::state::CascadeStorage;

/// Route quick flow through the reservoir cascade.
///
/// Each reservoir releases `kq` times its level at the start of the step.
/// Reservoir 0 receives `inflow`, reservoir `i` receives the release of
/// reservoir `i - 1`. Returns (new_storages, release of the last reservoir).
pub fn quick_flow_cascade(storages: &[f64], inflow: f64, kq: f64) -> (CascadeStorage, f64) {
    let mut next = CascadeStorage::with_capacity(storages.len());
    let mut upstream = inflow;

    for &s in storages {
        let out = kq * s;
        next.push(s - out + upstream);
        upstream = out;
    }

    (next, upstream)
}

/// Route slow flow through a single linear reservoir.
///
/// The release is taken from the level after the inflow has been added
/// and the reservoir drained: `S' = (1 - ks)(S + I)`, `Q = ks/(1 - ks) S'`.
/// Returns (new_storage, outflow).
pub fn slow_flow_reservoir(storage: f64, inflow: f64, ks: f64) -> (f64, f64) {
    let next = (1.0 - ks) * (storage + inflow);
    let outflow = (ks / (1.0 - ks)) * next;
    (next, outflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} +/- {tol}, got {actual}"
        );
    }

    // -- Quick-flow cascade --

    #[test]
    fn cascade_releases_from_pre_update_levels() {
        let (next, out) = quick_flow_cascade(&[10.0, 20.0, 30.0], 5.0, 0.5);
        // out = [5, 10, 15]
        assert_approx(next[0], 10.0 - 5.0 + 5.0, 1e-12);
        assert_approx(next[1], 20.0 - 10.0 + 5.0, 1e-12);
        assert_approx(next[2], 30.0 - 15.0 + 10.0, 1e-12);
        assert_approx(out, 15.0, 1e-12);
    }

    #[test]
    fn cascade_conserves_mass_each_step() {
        let storages = [3.0, 7.5, 1.25, 0.0];
        let inflow = 12.0;
        let (next, out) = quick_flow_cascade(&storages, inflow, 0.33);
        let delta: f64 = next.iter().zip(&storages).map(|(n, s)| n - s).sum();
        assert_approx(delta, inflow - out, 1e-12);
    }

    #[test]
    fn cascade_delays_one_reservoir_per_step() {
        let mut storages: CascadeStorage = smallvec::smallvec![0.0; 3];
        let mut outflows = Vec::new();
        for inflow in [10.0, 0.0, 0.0, 0.0] {
            let (next, out) = quick_flow_cascade(&storages, inflow, 0.5);
            storages = next;
            outflows.push(out);
        }
        assert_eq!(outflows[0], 0.0);
        assert_eq!(outflows[1], 0.0);
        assert_eq!(outflows[2], 0.0);
        assert!(outflows[3] > 0.0);
    }

    #[test]
    fn cascade_flushes_total_input() {
        let mut storages: CascadeStorage = smallvec::smallvec![0.0; 3];
        let mut total_out = 0.0;
        let (next, out) = quick_flow_cascade(&storages, 100.0, 0.6);
        storages = next;
        total_out += out;
        for _ in 0..200 {
            let (next, out) = quick_flow_cascade(&storages, 0.0, 0.6);
            storages = next;
            total_out += out;
        }
        assert_approx(total_out, 100.0, 1e-9);
    }

    #[test]
    fn cascade_empty_stays_empty() {
        let (next, out) = quick_flow_cascade(&[0.0, 0.0], 0.0, 0.4);
        assert_eq!(next.as_slice(), &[0.0, 0.0]);
        assert_eq!(out, 0.0);
    }

    // -- Slow-flow reservoir --

    #[test]
    fn slow_reservoir_known_value() {
        // S' = 0.9 * (50 + 10) = 54, Q = 0.1/0.9 * 54 = 6
        let (next, out) = slow_flow_reservoir(50.0, 10.0, 0.1);
        assert_approx(next, 54.0, 1e-12);
        assert_approx(out, 6.0, 1e-12);
    }

    #[test]
    fn slow_reservoir_conserves_mass() {
        let (storage, inflow) = (42.0, 3.5);
        let (next, out) = slow_flow_reservoir(storage, inflow, 0.07);
        assert_approx(next - storage, inflow - out, 1e-12);
    }

    #[test]
    fn slow_reservoir_zero_rate_holds_water() {
        let (next, out) = slow_flow_reservoir(20.0, 5.0, 0.0);
        assert_eq!(next, 25.0);
        assert_eq!(out, 0.0);
    }

    // -- Single-reservoir cascade vs. slow reservoir --

    #[test]
    fn single_cascade_matches_slow_reservoir_without_inflow() {
        let k = 0.25;
        let (c_next, c_out) = quick_flow_cascade(&[40.0], 0.0, k);
        let (s_next, s_out) = slow_flow_reservoir(40.0, 0.0, k);
        assert_approx(c_next[0], s_next, 1e-12);
        assert_approx(c_out, s_out, 1e-12);
    }

    #[test]
    fn single_cascade_differs_from_slow_reservoir_by_outflow_timing() {
        // The cascade drains the level before the inflow arrives, the slow
        // reservoir drains after, so the slow one releases an extra k * inflow.
        let (k, storage, inflow) = (0.25, 40.0, 8.0);
        let (c_next, c_out) = quick_flow_cascade(&[storage], inflow, k);
        let (s_next, s_out) = slow_flow_reservoir(storage, inflow, k);

        assert_approx(c_out, k * storage, 1e-12);
        assert_approx(s_out, k * (storage + inflow), 1e-12);
        assert_approx(s_out - c_out, k * inflow, 1e-12);
        assert_approx(c_next[0] - s_next, k * inflow, 1e-12);
    }
}
