//! Physics properties of the Airy (linear) wave theory.
//!
//! These tests verify:
//! - The finite-depth dispersion relation and its limits
//! - Amplitude bound and ramp behaviour
//! - No-flow-through-bed condition, including very deep water
//! - Surface kinematics and pressure consistency

use wavekin::{Airy, Vec2, WaveModel, WaveParameters, RHO_0, STANDARD_GRAVITY};

const TOL: f64 = 1e-12;

fn wave() -> Airy {
    Airy::new(1.0, 0.2, 10.0).unwrap()
}

/// Time at which the default ramp (one wave period) is complete.
fn ramped(wave: &Airy) -> f64 {
    10.0 * 10.0 / wave.celerity()
}

#[test]
fn test_dispersion_relation() {
    let wave = wave();
    let k = wave.k();
    let c = wave.celerity();

    assert!((k - 2.0 * std::f64::consts::PI / 10.0).abs() < TOL);
    assert!((c * c - STANDARD_GRAVITY / k * (k * 1.0).tanh()).abs() < TOL);
}

#[test]
fn test_elevation_bounded_by_amplitude() {
    let wave = wave();
    let x: Vec<f64> = (0..200).map(|i| i as f64 * 0.17).collect();

    for t in [0.0, 1.0, 10.0, 100.0] {
        for eta in wave.elevation(t, 0.0, &x) {
            assert!(eta.abs() <= 0.2 + TOL);
        }
    }
}

#[test]
fn test_elevation_ramps_from_zero() {
    let wave = wave();
    let x = [0.0, 1.0, 3.3];

    for eta in wave.elevation(0.0, 0.0, &x) {
        assert!(eta.abs() < TOL);
    }

    // After one period the crest has full amplitude
    let t = ramped(&wave);
    let crest_x = (wave.celerity()) * t; // theta = 0 there (phase = 0)
    let eta = wave.elevation(t, 0.0, &[crest_x]);
    assert!((eta[0] - 0.2).abs() < 1e-9);
}

#[test]
fn test_no_flow_through_bed() {
    let wave = wave();
    let t = ramped(&wave);

    for u in [0.0, 0.5] {
        let bed: Vec<Vec2> = (0..20).map(|i| Vec2::new(i as f64 * 0.7, -1.0)).collect();
        for v in wave.velocity(t, u, &bed) {
            assert!(v.z.abs() < TOL);
        }
    }
}

#[test]
fn test_deep_water_stays_finite() {
    // k·depth = 2π/10 * 10000 ≈ 6283: naive hyperbolics overflow
    let deep = Airy::new(10_000.0, 0.2, 10.0).unwrap();
    let t = ramped(&deep);

    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, -5.0),
        Vec2::new(2.0, -100.0),
        Vec2::new(3.0, -10_000.0),
    ];
    for v in deep.velocity(t, 0.0, &points) {
        assert!(v.x.is_finite());
        assert!(v.z.is_finite());
    }
    for p in deep.pressure(t, 0.0, &points) {
        assert!(p.is_finite());
    }

    // Bed condition holds even at this depth
    let v_bed = deep.velocity(t, 0.0, &[Vec2::new(0.0, -10_000.0)]);
    assert!(v_bed[0].z.abs() < TOL);

    // Orbital motion is negligible 100 m down a 10 m wave
    let v_down = deep.velocity(t, 0.0, &[Vec2::new(1.0, -100.0)]);
    assert!(v_down[0].x.abs() < 1e-9);
}

#[test]
fn test_surface_vertical_velocity_matches_elevation_rate() {
    let wave = wave();
    let t = ramped(&wave) + 3.0;
    let x = 1.7;

    // Linear surface kinematics: w(z=0) = ∂η/∂t for zero mean current
    let dt = 1e-6;
    let eta_rate = (wave.elevation(t + dt, 0.0, &[x])[0] - wave.elevation(t - dt, 0.0, &[x])[0])
        / (2.0 * dt);
    let w = wave.velocity(t, 0.0, &[Vec2::new(x, 0.0)])[0].z;

    assert!((w - eta_rate).abs() < 1e-5);
}

#[test]
fn test_pressure_at_still_water_level() {
    let wave = wave();
    let t = ramped(&wave) + 1.0;
    let rho_g = RHO_0 * STANDARD_GRAVITY;

    // At z = 0 the response factor is 1, so p = ρ·g·η exactly
    for x in [0.0, 1.3, 4.9] {
        let eta = wave.elevation(t, 0.0, &[x])[0];
        let p = wave.pressure(t, 0.0, &[Vec2::new(x, 0.0)])[0];
        assert!((p - rho_g * eta).abs() < 1e-6);
    }
}

#[test]
fn test_pressure_attenuates_with_depth() {
    let wave = Airy::new(20.0, 0.5, 10.0).unwrap();
    let t = ramped(&wave);
    let crest_x = wave.celerity() * t;
    let rho_g = RHO_0 * STANDARD_GRAVITY;

    // Dynamic part (p - hydrostatic) decays monotonically downward
    let mut prev = f64::INFINITY;
    for i in 0..=10 {
        let z = -2.0 * i as f64;
        let p = wave.pressure(t, 0.0, &[Vec2::new(crest_x, z)])[0];
        let dynamic = p - rho_g * (-z);
        assert!(dynamic > 0.0);
        assert!(dynamic < prev);
        prev = dynamic;
    }
}

#[test]
fn test_phase_parameter_shifts_wave() {
    let base = Airy::new(1.0, 0.2, 10.0).unwrap();
    let shifted = Airy::from_parameters(
        &WaveParameters::new()
            .with("depth", 1.0)
            .with("amplitude", 0.2)
            .with("length", 10.0)
            .with("phase", std::f64::consts::PI),
    )
    .unwrap();

    let t = ramped(&base) + 2.0;
    let x = [0.0, 1.0, 2.0];
    let eta = base.elevation(t, 0.0, &x);
    let eta_shifted = shifted.elevation(t, 0.0, &x);

    // A π phase shift flips the sign of the displacement
    for (a, b) in eta.iter().zip(&eta_shifted) {
        assert!((a + b).abs() < 1e-9);
    }
}
