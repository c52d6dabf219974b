//! Named scalar parameters for wave-model construction.
//!
//! The surrounding simulation parses its configuration (dictionary, file,
//! CLI) itself; this crate receives the result as a flat name → value map.
//! Constructors pull their fixed parameters out of the map with contextual
//! errors for anything missing.

use std::collections::BTreeMap;

use super::WaveModelError;

/// A name-keyed map of scalar parameters, the construction input of every
/// wave theory.
///
/// ```
/// use wavekin::WaveParameters;
///
/// let params = WaveParameters::new()
///     .with("offset", 0.0)
///     .with("depth", 1.0);
/// assert_eq!(params.get("depth"), Some(1.0));
/// assert_eq!(params.get_or("gravity", 9.81), 9.81);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WaveParameters {
    values: BTreeMap<String, f64>,
}

impl WaveParameters {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, name: &str, value: f64) {
        self.values.insert(name.to_string(), value);
    }

    /// Look up a parameter.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Look up an optional parameter, falling back to a default.
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    /// Look up a required parameter on behalf of `model`.
    pub fn require(&self, model: &'static str, name: &'static str) -> Result<f64, WaveModelError> {
        self.get(name)
            .ok_or(WaveModelError::MissingParameter { model, name })
    }

    /// Parameter names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}
