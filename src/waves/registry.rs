//! Name-keyed construction of wave models.
//!
//! The registry maps theory names to constructor functions, so the
//! surrounding simulation can select a theory from configuration without
//! knowing any concrete type. New theories are added by registering a
//! name/constructor pair; existing entries and calling code never change.
//!
//! Registration happens at startup, single-threaded; after that the
//! registry is read-only. The process-wide
//! [`shared`](WaveModelRegistry::shared) registry holds the built-in
//! theories; callers with custom theories build their own registry value.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::airy::Airy;
use super::parameters::WaveParameters;
use super::solitary::Solitary;
use super::traits::WaveModel;
use super::WaveModelError;

/// A constructor taking fixed parameters and returning a live model.
pub type WaveModelConstructor =
    fn(&WaveParameters) -> Result<Box<dyn WaveModel>, WaveModelError>;

/// Registry of wave-model constructors, keyed by theory name.
///
/// ```
/// use wavekin::{WaveModelRegistry, WaveParameters};
///
/// let registry = WaveModelRegistry::with_builtins();
/// assert!(registry.contains("solitary"));
///
/// let params = WaveParameters::new().with("offset", 0.0).with("depth", 1.0);
/// let wave = registry.create("solitary", &params).unwrap();
/// assert_eq!(wave.name(), "solitary");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WaveModelRegistry {
    constructors: BTreeMap<String, WaveModelConstructor>,
}

impl WaveModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in theories registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Solitary::NAME, Solitary::boxed);
        registry.register(Airy::NAME, Airy::boxed);
        registry
    }

    /// Register a constructor under a theory name.
    ///
    /// Idempotent and order-independent: the first registration of a name
    /// wins, re-registering is a no-op. Returns whether the entry was
    /// inserted.
    pub fn register(&mut self, name: &str, constructor: WaveModelConstructor) -> bool {
        if self.constructors.contains_key(name) {
            false
        } else {
            self.constructors.insert(name.to_string(), constructor);
            true
        }
    }

    /// Whether a theory name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered theory names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.constructors.keys().cloned().collect()
    }

    /// Construct a model by name from fixed parameters.
    ///
    /// An unregistered name is a configuration error naming the offending
    /// identifier; there is no fallback theory. A registered name
    /// delegates to the constructor, which validates the parameters — no
    /// partial or degraded model is ever returned.
    pub fn create(
        &self,
        name: &str,
        params: &WaveParameters,
    ) -> Result<Box<dyn WaveModel>, WaveModelError> {
        match self.constructors.get(name) {
            Some(constructor) => constructor(params),
            None => Err(WaveModelError::UnknownModel {
                name: name.to_string(),
                known: self.names(),
            }),
        }
    }

    /// The process-wide registry of built-in theories.
    ///
    /// Populated on first use, read-only for the rest of the process
    /// lifetime.
    pub fn shared() -> &'static WaveModelRegistry {
        static SHARED: OnceLock<WaveModelRegistry> = OnceLock::new();
        SHARED.get_or_init(WaveModelRegistry::with_builtins)
    }
}
