//! Analytic wave theories behind a common capability set.
//!
//! Each theory computes surface elevation, particle velocity, and pressure
//! from closed-form kinematic relations, for use as boundary data in a
//! free-surface flow simulation (e.g. a wave-generation boundary in a
//! numerical flume).
//!
//! # Available Theories
//!
//! | Name | Theory |
//! |------|--------|
//! | `solitary` | Solitary wave (Dean & Dalrymple, pp. 314-317) |
//! | `airy` | Linear (Airy) finite-depth wave |
//!
//! Models are constructed by name through [`WaveModelRegistry`] from a
//! [`WaveParameters`] map of already-parsed scalars, then queried every
//! step for elevation, velocity, and pressure at the caller's points:
//!
//! ```
//! use wavekin::{WaveModelRegistry, WaveParameters};
//!
//! let params = WaveParameters::new()
//!     .with("offset", 0.0)
//!     .with("depth", 1.0);
//! let wave = WaveModelRegistry::shared().create("solitary", &params).unwrap();
//!
//! let eta = wave.elevation(10.0, 0.0, &[0.0, 1.0, 2.0]);
//! assert_eq!(eta.len(), 3);
//! ```
//!
//! Evaluation is stateless: derived quantities (wavenumber, amplitude
//! ramp, celerity) are recomputed from `t` on every call, so a single
//! instance may be queried from multiple threads, and clones are fully
//! independent.

mod airy;
mod parameters;
mod registry;
mod solitary;
mod traits;

pub use airy::Airy;
pub use parameters::WaveParameters;
pub use registry::{WaveModelConstructor, WaveModelRegistry};
pub use solitary::Solitary;
pub use traits::{Vec2, WaveModel};

use thiserror::Error;

/// Standard gravitational acceleration (m/s²).
pub const STANDARD_GRAVITY: f64 = 9.81;

/// Reference seawater density (kg/m³).
pub const RHO_0: f64 = 1025.0;

/// Error type for wave-model construction.
///
/// All variants are raised at construction time; evaluation is total over
/// finite inputs and never fails.
#[derive(Debug, Error)]
pub enum WaveModelError {
    /// Requested theory name is not in the registry.
    #[error("unknown wave model \"{name}\" (known models: {})", .known.join(", "))]
    UnknownModel {
        /// The offending name, as requested
        name: String,
        /// Registered names, sorted
        known: Vec<String>,
    },

    /// A required fixed parameter is absent from the parameter map.
    #[error("wave model \"{model}\": missing required parameter \"{name}\"")]
    MissingParameter {
        model: &'static str,
        name: &'static str,
    },

    /// A fixed parameter is non-finite or outside its physical range.
    #[error("wave model \"{model}\": parameter \"{name}\" = {value} violates {constraint}")]
    InvalidParameter {
        model: &'static str,
        name: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

/// Validate a fixed parameter: finite and satisfying `admissible`.
pub(crate) fn check(
    model: &'static str,
    name: &'static str,
    value: f64,
    admissible: bool,
    constraint: &'static str,
) -> Result<f64, WaveModelError> {
    if value.is_finite() && admissible {
        Ok(value)
    } else {
        Err(WaveModelError::InvalidParameter {
            model,
            name,
            value,
            constraint,
        })
    }
}
