/// Expand `$mac! { $prefix ... field, field, ... }` over the HYMOD flux
/// fields, in output order. Keeps the Python classes and dicts in step
/// with `hymod_core::hymod::fluxes::Fluxes`.
macro_rules! for_each_flux {
    ($mac:ident! { $($prefix:tt)* }) => {
        $mac! {
            $($prefix)*
            precip, pet, saturation_excess, infiltration_excess, actual_et,
            soil_storage, quick_inflow, slow_inflow, quick_storage, slow_storage,
            quick_outflow, slow_outflow, streamflow
        }
    };
}

/// Frozen result classes for a full run (`HYMODResult`, one numpy array
/// per flux) and a single step (`HYMODStepFluxes`, one float per flux).
/// Both convert to a plain dict keyed by flux name.
macro_rules! define_flux_classes {
    ($($field:ident),+ $(,)?) => {
        /// HYMOD run results with typed numpy array attributes.
        #[pyo3::pyclass(frozen)]
        pub struct HYMODResult {
            $(
                #[pyo3(get)]
                pub $field: pyo3::Py<numpy::PyArray1<f64>>,
            )+
        }

        impl HYMODResult {
            pub fn from_timeseries(
                py: pyo3::Python<'_>,
                ts: hymod_core::hymod::fluxes::FluxesTimeseries,
            ) -> Self {
                Self {
                    $(
                        $field: numpy::PyArray1::from_vec(py, ts.$field).unbind(),
                    )+
                }
            }

            pub fn to_dict<'py>(
                &self,
                py: pyo3::Python<'py>,
            ) -> pyo3::PyResult<pyo3::Bound<'py, pyo3::types::PyDict>> {
                let dict = pyo3::types::PyDict::new(py);
                $(
                    dict.set_item(stringify!($field), self.$field.bind(py))?;
                )+
                Ok(dict)
            }
        }

        /// HYMOD single-timestep flux results.
        #[pyo3::pyclass(frozen)]
        pub struct HYMODStepFluxes {
            $(
                #[pyo3(get)]
                pub $field: f64,
            )+
        }

        impl HYMODStepFluxes {
            pub fn from_fluxes(f: &hymod_core::hymod::fluxes::Fluxes) -> Self {
                Self {
                    $(
                        $field: f.$field,
                    )+
                }
            }

            pub fn to_dict<'py>(
                &self,
                py: pyo3::Python<'py>,
            ) -> pyo3::PyResult<pyo3::Bound<'py, pyo3::types::PyDict>> {
                let dict = pyo3::types::PyDict::new(py);
                $(
                    dict.set_item(stringify!($field), self.$field)?;
                )+
                Ok(dict)
            }
        }
    };
}
