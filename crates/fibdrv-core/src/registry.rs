//! Calculator factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::calculator::{Algorithm, Calculator, FibCalculator, FibError};

/// Factory trait for creating calculators.
pub trait CalculatorFactory: Send + Sync {
    /// Get or create a calculator by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError>;

    /// List all available calculator names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<&'static str, Arc<dyn Calculator>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Get the calculator for a known algorithm.
    #[must_use]
    pub fn for_algorithm(&self, algorithm: Algorithm) -> Arc<dyn Calculator> {
        // Aliases share one entry under the canonical key
        let key = algorithm.key();
        if let Some(calc) = self.cache.read().get(key) {
            return Arc::clone(calc);
        }

        // Create and cache
        let calc: Arc<dyn Calculator> = Arc::new(FibCalculator::new(algorithm.core()));
        self.cache
            .write()
            .entry(key)
            .or_insert(calc)
            .clone()
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Calculator>, FibError> {
        let algorithm: Algorithm = name.parse()?;
        Ok(self.for_algorithm(algorithm))
    }

    fn available(&self) -> Vec<&str> {
        Algorithm::ALL.iter().map(|a| a.key()).collect()
    }
}
