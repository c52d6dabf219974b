//! # wavekin
//!
//! Analytic wave-kinematics models for free-surface flow simulations.
//!
//! Each wave theory supplies time- and space-varying boundary values
//! (surface elevation, particle velocity, dynamic pressure) for a
//! wave-generation boundary, e.g. in a numerical flume. The flow solver
//! selects a theory by name, clones it as needed for simultaneous sources
//! or parallel sub-domains, and queries it every step at its current
//! boundary points.
//!
//! This crate provides:
//! - The [`WaveModel`] capability set shared by all theories
//! - A name-keyed [`WaveModelRegistry`] for construction from parsed
//!   configuration
//! - The solitary-wave theory (Dean & Dalrymple)
//! - The Airy (linear) finite-depth theory
//! - A smooth generation [`Ramp`] shared by all theories
//! - Bulk sampling helpers, optionally parallel via the `parallel` feature

pub mod ramp;
pub mod sampling;
pub mod waves;

// Re-export main types for convenience
pub use ramp::Ramp;
pub use sampling::{elevation_chunked, pressure_chunked, velocity_chunked};
pub use waves::{
    Airy, Solitary, Vec2, WaveModel, WaveModelConstructor, WaveModelError, WaveModelRegistry,
    WaveParameters, RHO_0, STANDARD_GRAVITY,
};

#[cfg(feature = "parallel")]
pub use sampling::{elevation_par, pressure_par, velocity_par};
