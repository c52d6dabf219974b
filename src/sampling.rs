//! Bulk sampling helpers over coordinate arrays.
//!
//! Evaluation cost is linear in the number of points and every model is
//! stateless, so large boundary patches can be split into chunks and
//! evaluated independently. The parallel variants (behind the `parallel`
//! feature) fan chunks out across the Rayon pool and reassemble results in
//! input order; they are bit-identical to the serial path because each
//! chunk recomputes the same per-call quantities from `t`.

use crate::waves::{Vec2, WaveModel};

/// Default number of points per chunk.
pub const DEFAULT_CHUNK: usize = 1024;

/// Serial chunked elevation: identical to `model.elevation`, evaluated
/// chunk by chunk.
pub fn elevation_chunked(
    model: &dyn WaveModel,
    t: f64,
    u: f64,
    x: &[f64],
    chunk_size: usize,
) -> Vec<f64> {
    let chunk_size = chunk_size.max(1);
    let mut out = Vec::with_capacity(x.len());
    for chunk in x.chunks(chunk_size) {
        out.extend(model.elevation(t, u, chunk));
    }
    out
}

/// Serial chunked velocity.
pub fn velocity_chunked(
    model: &dyn WaveModel,
    t: f64,
    u: f64,
    xz: &[Vec2],
    chunk_size: usize,
) -> Vec<Vec2> {
    let chunk_size = chunk_size.max(1);
    let mut out = Vec::with_capacity(xz.len());
    for chunk in xz.chunks(chunk_size) {
        out.extend(model.velocity(t, u, chunk));
    }
    out
}

/// Serial chunked pressure.
pub fn pressure_chunked(
    model: &dyn WaveModel,
    t: f64,
    u: f64,
    xz: &[Vec2],
    chunk_size: usize,
) -> Vec<f64> {
    let chunk_size = chunk_size.max(1);
    let mut out = Vec::with_capacity(xz.len());
    for chunk in xz.chunks(chunk_size) {
        out.extend(model.pressure(t, u, chunk));
    }
    out
}

/// Parallel elevation over chunks of [`DEFAULT_CHUNK`] points.
///
/// Results are reassembled in input order and equal the serial path
/// exactly.
#[cfg(feature = "parallel")]
pub fn elevation_par(model: &dyn WaveModel, t: f64, u: f64, x: &[f64]) -> Vec<f64> {
    use rayon::prelude::*;

    let chunks: Vec<Vec<f64>> = x
        .par_chunks(DEFAULT_CHUNK)
        .map(|chunk| model.elevation(t, u, chunk))
        .collect();
    chunks.concat()
}

/// Parallel velocity over chunks of [`DEFAULT_CHUNK`] points.
#[cfg(feature = "parallel")]
pub fn velocity_par(model: &dyn WaveModel, t: f64, u: f64, xz: &[Vec2]) -> Vec<Vec2> {
    use rayon::prelude::*;

    let chunks: Vec<Vec<Vec2>> = xz
        .par_chunks(DEFAULT_CHUNK)
        .map(|chunk| model.velocity(t, u, chunk))
        .collect();
    chunks.concat()
}

/// Parallel pressure over chunks of [`DEFAULT_CHUNK`] points.
#[cfg(feature = "parallel")]
pub fn pressure_par(model: &dyn WaveModel, t: f64, u: f64, xz: &[Vec2]) -> Vec<f64> {
    use rayon::prelude::*;

    let chunks: Vec<Vec<f64>> = xz
        .par_chunks(DEFAULT_CHUNK)
        .map(|chunk| model.pressure(t, u, chunk))
        .collect();
    chunks.concat()
}
