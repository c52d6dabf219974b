//! Samples a solitary-wave boundary over a line of points, the way a
//! numerical flume would query it each step.
//!
//! Run with: `cargo run --example wave_flume`

use wavekin::{WaveModelRegistry, WaveParameters};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let params = WaveParameters::new().with("offset", 0.0).with("depth", 1.0);
    let wave = WaveModelRegistry::shared().create("solitary", &params)?;

    let mut description = String::new();
    wave.write(&mut description)?;
    println!("{description}");

    let x: Vec<f64> = (0..=400).map(|i| i as f64 * 0.1).collect();

    println!("{:>8} {:>14} {:>12}", "t (s)", "max eta (m)", "at x (m)");
    for step in 0..=10 {
        let t = step as f64;
        let eta = wave.elevation(t, 0.0, &x);
        let (i_max, eta_max) = eta
            .iter()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |(i_best, best), (i, &e)| {
                if e > best { (i, e) } else { (i_best, best) }
            });
        println!("{:>8.1} {:>14.4} {:>12.1}", t, eta_max, x[i_max]);
    }

    Ok(())
}
