//! Solitary wave theory.
//!
//! A single non-periodic crest of permanent form, propagating in shallow
//! water. The instantaneous amplitude is `alpha(t) * depth`, where `alpha`
//! rises from 0 to 1 over the generation ramp; wavenumber and celerity
//! follow the amplitude through the shallow-water solitary relations, so
//! the wave steepens and speeds up as it grows.
//!
//! # Reference
//!
//! "Water Wave Mechanics for Engineers and Scientists",
//! R. G. Dean and R. A. Dalrymple, pp. 314-317.

use std::fmt;

use crate::ramp::Ramp;

use super::parameters::WaveParameters;
use super::traits::{Vec2, WaveModel};
use super::{check, WaveModelError, RHO_0, STANDARD_GRAVITY};

/// Phase magnitude beyond which sech² is below 1e-30. Clamping here keeps
/// cosh finite for points arbitrarily far from the crest.
const PHASE_CLAMP: f64 = 34.6;

/// Overflow-safe sech²: monotone decay from 1 at zero phase toward 0.
#[inline]
fn sech_sq(phase: f64) -> f64 {
    let s = 1.0 / phase.abs().min(PHASE_CLAMP).cosh();
    s * s
}

/// Solitary wave model.
///
/// Fixed parameters (all immutable after construction):
///
/// | Name | Required | Default | Constraint |
/// |------|----------|---------|------------|
/// | `offset` | yes | - | finite (time origin of generation, s) |
/// | `depth` | yes | - | > 0 (still-water depth, m) |
/// | `gravity` | no | 9.81 | > 0 |
/// | `density` | no | 1025 | > 0 |
/// | `ramp_duration` | no | 10·√(depth/g) | > 0 |
/// | `min_alpha` | no | 0 | in [0, 1) |
///
/// The crest passes local x = 0 at `t = offset` and then travels at
/// `celerity(t) - u` in the frame moving with the mean current.
#[derive(Clone, Debug)]
pub struct Solitary {
    offset: f64,
    depth: f64,
    gravity: f64,
    density: f64,
    min_alpha: f64,
    ramp: Ramp,
}

impl Solitary {
    /// Registered theory name.
    pub const NAME: &'static str = "solitary";

    /// Construct with required parameters only; the rest take defaults.
    pub fn new(offset: f64, depth: f64) -> Result<Self, WaveModelError> {
        Self::from_parameters(
            &WaveParameters::new()
                .with("offset", offset)
                .with("depth", depth),
        )
    }

    /// Construct from a parameter map, validating physical admissibility.
    ///
    /// Validation guarantees real, positive wavenumber and celerity over
    /// the whole ramp range of `alpha`, so evaluation never fails.
    pub fn from_parameters(params: &WaveParameters) -> Result<Self, WaveModelError> {
        let offset = params.require(Self::NAME, "offset")?;
        let offset = check(Self::NAME, "offset", offset, true, "offset finite")?;

        let depth = params.require(Self::NAME, "depth")?;
        let depth = check(Self::NAME, "depth", depth, depth > 0.0, "depth > 0")?;

        let gravity = params.get_or("gravity", STANDARD_GRAVITY);
        let gravity = check(Self::NAME, "gravity", gravity, gravity > 0.0, "gravity > 0")?;

        let density = params.get_or("density", RHO_0);
        let density = check(Self::NAME, "density", density, density > 0.0, "density > 0")?;

        // About ten shallow-water time scales by default
        let ramp_duration = params.get_or("ramp_duration", 10.0 * (depth / gravity).sqrt());
        let ramp_duration = check(
            Self::NAME,
            "ramp_duration",
            ramp_duration,
            ramp_duration > 0.0,
            "ramp_duration > 0",
        )?;

        let min_alpha = params.get_or("min_alpha", 0.0);
        let min_alpha = check(
            Self::NAME,
            "min_alpha",
            min_alpha,
            (0.0..1.0).contains(&min_alpha),
            "min_alpha in [0, 1)",
        )?;

        Ok(Self {
            offset,
            depth,
            gravity,
            density,
            min_alpha,
            ramp: Ramp::new(offset, ramp_duration),
        })
    }

    /// Registry constructor.
    pub fn boxed(params: &WaveParameters) -> Result<Box<dyn WaveModel>, WaveModelError> {
        Ok(Box::new(Self::from_parameters(params)?))
    }

    /// Get the offset.
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Get the depth.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// The dimensionless amplitude [1].
    ///
    /// Instantaneous wave amplitude as a fraction of depth: 0 (or the
    /// configured `min_alpha`) at `t = offset`, rising smoothly to 1 once
    /// the generation ramp completes.
    pub fn alpha(&self, t: f64) -> f64 {
        self.ramp.factor(t).max(self.min_alpha)
    }

    /// The wavenumber [1/m].
    ///
    /// Shallow-water solitary relation for the instantaneous amplitude
    /// `alpha(t) * depth`.
    pub fn k(&self, t: f64) -> f64 {
        (0.75 * self.alpha(t)).sqrt() / self.depth
    }

    /// The wave celerity [m/s].
    ///
    /// Grows with the amplitude-to-depth ratio: √(g·depth·(1 + alpha)).
    pub fn celerity(&self, t: f64) -> f64 {
        (self.gravity * self.depth * (1.0 + self.alpha(t))).sqrt()
    }

    /// The evolution parameter [1].
    ///
    /// This is analogous to the oscillation angle of a periodic wave: per
    /// point, the phase `k(t)·(x - (celerity(t) - u)·(t - offset))`, zero
    /// at the instantaneous crest.
    pub fn parameter(&self, t: f64, u: f64, x: &[f64]) -> Vec<f64> {
        let k = self.k(t);
        let crest = (self.celerity(t) - u) * (t - self.offset);
        x.iter().map(|&xi| k * (xi - crest)).collect()
    }

    /// The dimensionless elevation [1].
    ///
    /// sech² of the evolution parameter: exactly 1 at the crest, even
    /// about it, decaying monotonically toward 0, finite for any finite
    /// input.
    pub fn pi(&self, t: f64, u: f64, x: &[f64]) -> Vec<f64> {
        self.parameter(t, u, x)
            .into_iter()
            .map(sech_sq)
            .collect()
    }

    /// Height fraction above the bed: 0 at z = -depth, 1 at the
    /// still-water level. Clamped below the bed.
    #[inline]
    fn bed_fraction(&self, z: f64) -> f64 {
        (1.0 + z / self.depth).max(0.0)
    }
}

impl WaveModel for Solitary {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn elevation(&self, t: f64, u: f64, x: &[f64]) -> Vec<f64> {
        let scale = self.depth * self.alpha(t);
        self.pi(t, u, x).into_iter().map(|p| scale * p).collect()
    }

    fn velocity(&self, t: f64, u: f64, xz: &[Vec2]) -> Vec<Vec2> {
        let a = self.alpha(t);
        let c = self.celerity(t);
        let k = self.k(t);
        let crest = (c - u) * (t - self.offset);

        xz.iter()
            .map(|point| {
                let phase = k * (point.x - crest);
                let p = sech_sq(phase);
                let th = phase.tanh();
                let zf = self.bed_fraction(point.z);
                let z2 = zf * zf;

                // Second-order solitary kinematics (Dean & Dalrymple).
                // The vertical component is proportional to the height
                // fraction, so it vanishes at the bed.
                let horizontal = c * a / 4.0
                    * ((4.0 + 2.0 * a - 6.0 * a * z2) * p + (-7.0 * a + 9.0 * a * z2) * p * p);
                let vertical = c * a * (3.0 * a).sqrt() / 2.0 * th * zf
                    * ((2.0 + a - a * z2) * p + (-7.0 * a + 3.0 * a * z2) * p * p);

                Vec2::new(horizontal, vertical)
            })
            .collect()
    }

    fn pressure(&self, t: f64, u: f64, xz: &[Vec2]) -> Vec<f64> {
        let scale = self.depth * self.alpha(t);
        let k = self.k(t);
        let crest = (self.celerity(t) - u) * (t - self.offset);
        let rho_g = self.density * self.gravity;

        // Long-wave pressure: hydrostatic beneath the instantaneous
        // surface. Zero at z = elevation, ρ·g·(elevation + depth) at the
        // bed.
        xz.iter()
            .map(|point| {
                let eta = scale * sech_sq(k * (point.x - crest));
                rho_g * (eta - point.z)
            })
            .collect()
    }

    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "model {}", Self::NAME)?;
        writeln!(out, "offset {}", self.offset)?;
        writeln!(out, "depth {}", self.depth)?;
        writeln!(out, "gravity {}", self.gravity)?;
        writeln!(out, "density {}", self.density)?;
        writeln!(out, "ramp_duration {}", self.ramp.duration)?;
        writeln!(out, "min_alpha {}", self.min_alpha)
    }

    fn clone_model(&self) -> Box<dyn WaveModel> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn model() -> Solitary {
        Solitary::new(0.0, 1.0).unwrap()
    }

    #[test]
    fn test_alpha_ramp() {
        let wave = model();

        assert!(wave.alpha(-1.0).abs() < TOL);
        assert!(wave.alpha(0.0).abs() < TOL);
        assert!((wave.alpha(100.0) - 1.0).abs() < TOL);

        // Non-decreasing over the ramp
        let mut prev = -1.0;
        for i in 0..=200 {
            let a = wave.alpha(i as f64 * 0.05);
            assert!(a >= prev);
            prev = a;
        }
    }

    #[test]
    fn test_min_alpha_floor() {
        let params = WaveParameters::new()
            .with("offset", 0.0)
            .with("depth", 1.0)
            .with("min_alpha", 0.1);
        let wave = Solitary::from_parameters(&params).unwrap();

        assert!((wave.alpha(-10.0) - 0.1).abs() < TOL);
        assert!((wave.alpha(1e6) - 1.0).abs() < TOL);
        assert!(wave.k(-10.0) > 0.0);
        assert!(wave.celerity(-10.0) > 0.0);
    }

    #[test]
    fn test_wavenumber_and_celerity() {
        let wave = model();
        let t = 100.0; // ramp complete, alpha = 1

        assert!((wave.k(t) - 0.75_f64.sqrt()).abs() < TOL);
        assert!((wave.celerity(t) - (2.0 * STANDARD_GRAVITY).sqrt()).abs() < TOL);
    }

    #[test]
    fn test_parameter_zero_at_crest() {
        let wave = model();
        let t = 50.0;
        let u = 0.3;
        let crest = (wave.celerity(t) - u) * t;

        let phase = wave.parameter(t, u, &[crest]);
        assert!(phase[0].abs() < TOL);
    }

    #[test]
    fn test_pi_crest_and_symmetry() {
        let wave = model();
        let t = 50.0;
        let crest = wave.celerity(t) * t;

        let pi = wave.pi(t, 0.0, &[crest, crest - 0.7, crest + 0.7]);
        assert!((pi[0] - 1.0).abs() < TOL);
        assert!((pi[1] - pi[2]).abs() < TOL);
        assert!(pi[1] < 1.0);
    }

    #[test]
    fn test_pi_far_field_finite() {
        let wave = model();
        let t = 50.0;

        // Phases of order 1e6: must not overflow, must be ~0
        let pi = wave.pi(t, 0.0, &[-1e6, 1e6]);
        assert!(pi[0].is_finite() && pi[0] >= 0.0 && pi[0] < 1e-20);
        assert!(pi[1].is_finite() && pi[1] >= 0.0 && pi[1] < 1e-20);
    }

    #[test]
    fn test_invalid_depth_rejected() {
        assert!(Solitary::new(0.0, 0.0).is_err());
        assert!(Solitary::new(0.0, -1.0).is_err());
        assert!(Solitary::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_invalid_optional_parameters_rejected() {
        let base = WaveParameters::new().with("offset", 0.0).with("depth", 1.0);

        assert!(Solitary::from_parameters(&base.clone().with("gravity", 0.0)).is_err());
        assert!(Solitary::from_parameters(&base.clone().with("ramp_duration", -1.0)).is_err());
        assert!(Solitary::from_parameters(&base.clone().with("min_alpha", 1.0)).is_err());
        assert!(Solitary::from_parameters(&base.clone().with("min_alpha", -0.1)).is_err());
        assert!(Solitary::from_parameters(&base).is_ok());
    }

    #[test]
    fn test_error_names_parameter() {
        let err = Solitary::new(0.0, -2.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("depth"));
        assert!(message.contains("solitary"));
        assert!(message.contains("-2"));
    }

    #[test]
    fn test_write_lists_fixed_parameters() {
        let wave = model();
        let mut out = String::new();
        wave.write(&mut out).unwrap();

        assert!(out.contains("model solitary"));
        assert!(out.contains("offset 0"));
        assert!(out.contains("depth 1"));
        assert!(out.contains("ramp_duration"));
    }
}
