//! The wave-model capability set.
//!
//! Every wave theory implements [`WaveModel`], so the surrounding
//! simulation can hold a `Box<dyn WaveModel>` and stay agnostic to which
//! theory is generating the boundary data. New theories are added by
//! implementing the trait and registering a constructor; callers and the
//! trait itself never change.

use std::fmt;

/// A 2-component vector in the wave's local frame.
///
/// `x` is the horizontal coordinate aligned with the mean current, `z` the
/// vertical coordinate aligned opposite gravity (z = 0 at the still-water
/// level, z = -depth at the bed). Used both for sample points and for
/// velocity vectors.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub z: f64,
}

impl Vec2 {
    /// Create a new 2-component vector.
    #[inline]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// An analytic wave theory evaluated at the simulation's points.
///
/// Implementations carry only immutable fixed parameters set at
/// construction, so every method takes `&self`, concurrent calls need no
/// synchronization, and [`clone_model`](WaveModel::clone_model) is a plain
/// copy of the parameter struct.
///
/// Contract shared by all evaluators:
/// - outputs are freshly allocated, matching the input length and order;
/// - an empty input slice yields an empty output, never an error;
/// - all derived quantities are recomputed from `t` on every call (no
///   caching, no retained state between calls);
/// - non-finite `t`, `u`, or coordinates are a caller contract violation
///   and are not guarded.
pub trait WaveModel: fmt::Debug + Send + Sync {
    /// The registered name of this theory.
    fn name(&self) -> &'static str;

    /// Wave elevation at time `t`, mean velocity `u`, and local
    /// coordinates `x`. Local x is aligned with the mean velocity.
    fn elevation(&self, t: f64, u: f64, x: &[f64]) -> Vec<f64>;

    /// Particle velocity at time `t`, mean velocity `u`, and local
    /// coordinates `xz`. Local x is aligned with the mean velocity, and z
    /// with negative gravity.
    fn velocity(&self, t: f64, u: f64, xz: &[Vec2]) -> Vec<Vec2>;

    /// Pressure (dynamic + hydrostatic) at time `t`, mean velocity `u`,
    /// and local coordinates `xz`.
    fn pressure(&self, t: f64, u: f64, xz: &[Vec2]) -> Vec<f64>;

    /// Write the fixed parameters in human-readable key/value form, for
    /// diagnostics and checkpoint description. Not meant for round-trip
    /// parsing.
    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// An independent copy with identical fixed parameters.
    ///
    /// The copy shares no state with the original; both may be used (and
    /// dropped) independently, e.g. one per parallel sub-domain.
    fn clone_model(&self) -> Box<dyn WaveModel>;
}

impl Clone for Box<dyn WaveModel> {
    fn clone(&self) -> Self {
        self.clone_model()
    }
}
