//! Airy (linear) wave theory.
//!
//! Small-amplitude periodic waves in finite depth. Celerity follows the
//! linear dispersion relation c² = (g/k)·tanh(k·depth); the depth decay of
//! velocity and pressure uses hyperbolic ratios evaluated in
//! negative-exponent form, so large k·depth degrades smoothly to the
//! deep-water e^(kz) limit instead of overflowing.

use std::fmt;

use crate::ramp::Ramp;

use super::parameters::WaveParameters;
use super::traits::{Vec2, WaveModel};
use super::{check, WaveModelError, RHO_0, STANDARD_GRAVITY};

use std::f64::consts::PI;

/// cosh(k(z+d)) / sinh(kd), for z in [-d, 0] and kd > 0.
///
/// Both exponentials have non-positive arguments, so the ratio stays
/// finite for arbitrarily large kd and tends to e^(kz) in deep water.
#[inline]
fn cosh_by_sinh(k: f64, z: f64, d: f64) -> f64 {
    let e1 = (k * z).exp();
    let e2 = (-k * (z + 2.0 * d)).exp();
    (e1 + e2) / (1.0 - (-2.0 * k * d).exp())
}

/// sinh(k(z+d)) / sinh(kd), for z in [-d, 0] and kd > 0.
///
/// Exactly zero at the bed (z = -d).
#[inline]
fn sinh_by_sinh(k: f64, z: f64, d: f64) -> f64 {
    let e1 = (k * z).exp();
    let e2 = (-k * (z + 2.0 * d)).exp();
    (e1 - e2) / (1.0 - (-2.0 * k * d).exp())
}

/// cosh(k(z+d)) / cosh(kd), the pressure response factor. Exactly 1 at
/// the still-water level.
#[inline]
fn cosh_by_cosh(k: f64, z: f64, d: f64) -> f64 {
    let e1 = (k * z).exp();
    let e2 = (-k * (z + 2.0 * d)).exp();
    (e1 + e2) / (1.0 + (-2.0 * k * d).exp())
}

/// Airy wave model.
///
/// Fixed parameters (all immutable after construction):
///
/// | Name | Required | Default | Constraint |
/// |------|----------|---------|------------|
/// | `depth` | yes | - | > 0 (still-water depth, m) |
/// | `amplitude` | yes | - | > 0 (target amplitude, m) |
/// | `length` | yes | - | > 0 (wavelength, m) |
/// | `offset` | no | 0 | finite (time origin, s) |
/// | `phase` | no | 0 | finite (rad) |
/// | `gravity` | no | 9.81 | > 0 |
/// | `density` | no | 1025 | > 0 |
/// | `ramp_duration` | no | one wave period | > 0 |
#[derive(Clone, Debug)]
pub struct Airy {
    depth: f64,
    amplitude: f64,
    length: f64,
    offset: f64,
    phase: f64,
    gravity: f64,
    density: f64,
    ramp: Ramp,
}

impl Airy {
    /// Registered theory name.
    pub const NAME: &'static str = "airy";

    /// Construct with required parameters only; the rest take defaults.
    pub fn new(depth: f64, amplitude: f64, length: f64) -> Result<Self, WaveModelError> {
        Self::from_parameters(
            &WaveParameters::new()
                .with("depth", depth)
                .with("amplitude", amplitude)
                .with("length", length),
        )
    }

    /// Construct from a parameter map, validating physical admissibility.
    pub fn from_parameters(params: &WaveParameters) -> Result<Self, WaveModelError> {
        let depth = params.require(Self::NAME, "depth")?;
        let depth = check(Self::NAME, "depth", depth, depth > 0.0, "depth > 0")?;

        let amplitude = params.require(Self::NAME, "amplitude")?;
        let amplitude = check(
            Self::NAME,
            "amplitude",
            amplitude,
            amplitude > 0.0,
            "amplitude > 0",
        )?;

        let length = params.require(Self::NAME, "length")?;
        let length = check(Self::NAME, "length", length, length > 0.0, "length > 0")?;

        let offset = params.get_or("offset", 0.0);
        let offset = check(Self::NAME, "offset", offset, true, "offset finite")?;

        let phase = params.get_or("phase", 0.0);
        let phase = check(Self::NAME, "phase", phase, true, "phase finite")?;

        let gravity = params.get_or("gravity", STANDARD_GRAVITY);
        let gravity = check(Self::NAME, "gravity", gravity, gravity > 0.0, "gravity > 0")?;

        let density = params.get_or("density", RHO_0);
        let density = check(Self::NAME, "density", density, density > 0.0, "density > 0")?;

        // Default ramp: one wave period at the linear celerity
        let k = 2.0 * PI / length;
        let celerity = (gravity / k * (k * depth).tanh()).sqrt();
        let ramp_duration = params.get_or("ramp_duration", length / celerity);
        let ramp_duration = check(
            Self::NAME,
            "ramp_duration",
            ramp_duration,
            ramp_duration > 0.0,
            "ramp_duration > 0",
        )?;

        Ok(Self {
            depth,
            amplitude,
            length,
            offset,
            phase,
            gravity,
            density,
            ramp: Ramp::new(offset, ramp_duration),
        })
    }

    /// Registry constructor.
    pub fn boxed(params: &WaveParameters) -> Result<Box<dyn WaveModel>, WaveModelError> {
        Ok(Box::new(Self::from_parameters(params)?))
    }

    /// Get the depth.
    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Get the target amplitude.
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// The wavenumber [1/m]: 2π / length.
    pub fn k(&self) -> f64 {
        2.0 * PI / self.length
    }

    /// The wave celerity [m/s] from the finite-depth dispersion relation
    /// c² = (g/k)·tanh(k·depth).
    pub fn celerity(&self) -> f64 {
        let k = self.k();
        (self.gravity / k * (k * self.depth).tanh()).sqrt()
    }

    /// The ramped amplitude [m] at time t.
    pub fn amplitude_at(&self, t: f64) -> f64 {
        self.amplitude * self.ramp.factor(t)
    }

    /// The oscillation angle [rad] at a horizontal coordinate.
    fn angle(&self, t: f64, u: f64, x: f64) -> f64 {
        self.phase + self.k() * (x - (self.celerity() - u) * (t - self.offset))
    }

    /// Vertical coordinate used by the depth-decay factors, clamped to
    /// the water column [-depth, 0].
    #[inline]
    fn column_z(&self, z: f64) -> f64 {
        z.clamp(-self.depth, 0.0)
    }
}

impl WaveModel for Airy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn elevation(&self, t: f64, u: f64, x: &[f64]) -> Vec<f64> {
        let a = self.amplitude_at(t);
        x.iter()
            .map(|&xi| a * self.angle(t, u, xi).cos())
            .collect()
    }

    fn velocity(&self, t: f64, u: f64, xz: &[Vec2]) -> Vec<Vec2> {
        let a = self.amplitude_at(t);
        let k = self.k();
        let omega = k * self.celerity();

        xz.iter()
            .map(|point| {
                let theta = self.angle(t, u, point.x);
                let z = self.column_z(point.z);
                let horizontal = a * omega * cosh_by_sinh(k, z, self.depth) * theta.cos();
                let vertical = a * omega * sinh_by_sinh(k, z, self.depth) * theta.sin();
                Vec2::new(horizontal, vertical)
            })
            .collect()
    }

    fn pressure(&self, t: f64, u: f64, xz: &[Vec2]) -> Vec<f64> {
        let a = self.amplitude_at(t);
        let k = self.k();
        let rho_g = self.density * self.gravity;

        xz.iter()
            .map(|point| {
                let eta = a * self.angle(t, u, point.x).cos();
                let response = cosh_by_cosh(k, self.column_z(point.z), self.depth);
                rho_g * (eta * response - point.z)
            })
            .collect()
    }

    fn write(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        writeln!(out, "model {}", Self::NAME)?;
        writeln!(out, "depth {}", self.depth)?;
        writeln!(out, "amplitude {}", self.amplitude)?;
        writeln!(out, "length {}", self.length)?;
        writeln!(out, "offset {}", self.offset)?;
        writeln!(out, "phase {}", self.phase)?;
        writeln!(out, "gravity {}", self.gravity)?;
        writeln!(out, "density {}", self.density)?;
        writeln!(out, "ramp_duration {}", self.ramp.duration)
    }

    fn clone_model(&self) -> Box<dyn WaveModel> {
        Box::new(self.clone())
    }
}
