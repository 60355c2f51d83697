//! Tunable heuristic parameters

use crate::error::{AssistantError, Result};

/// Configuration for an assistant session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AssistantConfig {
    /// Rounds played in EXPLORE before switching to GUESS
    pub explore_rounds: usize,
    /// Confirmed positions that switch to GUESS regardless of round
    pub exact_threshold: usize,
    /// Multiplier on vowel letter scores in EXPLORE (below 1 favours consonants)
    pub vowel_weight: f64,
    /// Guess limit for simulated games
    pub max_rounds: usize,
}

impl AssistantConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            explore_rounds: 2,
            exact_threshold: 2,
            vowel_weight: 1.0,
            max_rounds: 6,
        }
    }

    /// Check the parameters are usable
    ///
    /// # Errors
    /// Returns `AssistantError::InvalidConfiguration` for a non-finite or negative vowel
    /// weight or a zero round limit.
    pub fn validate(&self) -> Result<()> {
        if !self.vowel_weight.is_finite() || self.vowel_weight < 0.0 {
            return Err(AssistantError::InvalidConfiguration(format!(
                "vowel weight must be a non-negative number, got {}",
                self.vowel_weight
            )));
        }
        if self.max_rounds == 0 {
            return Err(AssistantError::InvalidConfiguration(
                "max rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = AssistantConfig::default();
        assert_eq!(config.explore_rounds, 2);
        assert_eq!(config.exact_threshold, 2);
        assert_eq!(config.max_rounds, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let config = AssistantConfig {
            vowel_weight: f64::NAN,
            ..AssistantConfig::new()
        };
        assert!(config.validate().is_err());

        let config = AssistantConfig {
            vowel_weight: -1.0,
            ..AssistantConfig::new()
        };
        assert!(config.validate().is_err());

        let config = AssistantConfig {
            max_rounds: 0,
            ..AssistantConfig::new()
        };
        assert!(config.validate().is_err());
    }
}
