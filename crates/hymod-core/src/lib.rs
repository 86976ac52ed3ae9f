//! hymod-core: the HYMOD rainfall-runoff model in Rust.
//!
//! Pure simulation engine: soil moisture accounting, quick and slow flow
//! routing, the daily time-stepping driver and goodness-of-fit metrics.
//! No I/O happens here; callers supply aligned forcing series.
pub mod error;
pub mod forcing;
pub mod hymod;
pub mod metrics;
#[cfg(feature = "pet")]
pub mod pet;
pub mod traits;

pub use error::{HymodError, HymodResult};
pub use hymod::run::simulate;
pub use metrics::{score, ErrorMetric};
