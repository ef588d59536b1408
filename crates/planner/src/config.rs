//! Configuration for sheet count estimation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use cutlist_core::{Error, Result, DEFAULT_KERF};

/// Configuration parameters for [`crate::StockPlanner`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Saw kerf in millimetres, lost once per fitted slot along each axis.
    /// Set to 0.0 for a zero-width cut.
    pub kerf: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { kerf: DEFAULT_KERF }
    }
}

impl PlannerConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the kerf.
    pub fn with_kerf(mut self, kerf: f64) -> Self {
        self.kerf = kerf;
        self
    }

    /// Rejects a negative or non-finite kerf.
    pub fn validate(&self) -> Result<()> {
        if !self.kerf.is_finite() || self.kerf < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "kerf must be a non-negative number, got {}",
                self.kerf
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.kerf, 4.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = PlannerConfig::new().with_kerf(3.2);
        assert_eq!(config.kerf, 3.2);
    }

    #[test]
    fn test_invalid_kerf() {
        assert!(PlannerConfig::new().with_kerf(-1.0).validate().is_err());
        assert!(PlannerConfig::new().with_kerf(f64::NAN).validate().is_err());
        assert!(PlannerConfig::new().with_kerf(0.0).validate().is_ok());
    }
}
