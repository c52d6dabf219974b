//! Smooth startup ramp for wave generation.
//!
//! A wave boundary must not switch on instantaneously: an impulsive free
//! surface displacement excites spurious transients in the flow solver.
//! Every wave theory in this crate scales its target amplitude by a ramp
//! factor that rises smoothly from 0 to 1 over a configured duration.

/// Smooth Hermite startup ramp.
///
/// The factor is 0 for `t <= start`, 1 for `t >= start + duration`, and
/// the cubic Hermite interpolant 3τ² − 2τ³ in between, so both the factor
/// and its first derivative are continuous everywhere (zero slope at both
/// endpoints).
#[derive(Clone, Copy, Debug)]
pub struct Ramp {
    /// Time at which generation starts (s)
    pub start: f64,
    /// Ramp-up duration (s)
    pub duration: f64,
}

impl Ramp {
    /// Create a ramp starting at `start` and completing at
    /// `start + duration`.
    pub fn new(start: f64, duration: f64) -> Self {
        Self { start, duration }
    }

    /// Ramp factor at time t.
    ///
    /// Returns:
    /// - 0 for t <= start
    /// - 1 for t >= start + duration
    /// - Smooth Hermite interpolation in between: 3τ² - 2τ³
    pub fn factor(&self, t: f64) -> f64 {
        if t <= self.start {
            0.0
        } else if t >= self.start + self.duration {
            1.0
        } else {
            let tau = (t - self.start) / self.duration;
            tau * tau * (3.0 - 2.0 * tau)
        }
    }

    /// Time derivative of the ramp factor.
    ///
    /// Zero at both endpoints, so the forcing has no kink when generation
    /// starts or completes.
    pub fn derivative(&self, t: f64) -> f64 {
        if t <= self.start || t >= self.start + self.duration {
            0.0
        } else {
            // d/dt [3τ² - 2τ³] = 6τ(1 - τ) / duration
            let tau = (t - self.start) / self.duration;
            6.0 * tau * (1.0 - tau) / self.duration
        }
    }

    /// Whether the ramp has reached full amplitude at time t.
    pub fn is_complete(&self, t: f64) -> bool {
        t >= self.start + self.duration
    }
}
