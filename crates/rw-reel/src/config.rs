//! Reel layout configuration

use serde::{Deserialize, Serialize};

use crate::error::{ReelError, ReelResult};

/// Fixed layout of one reel: slot count and slot pitch
///
/// Both values are frozen once the reel is built. `symbol_size` is the
/// width and height of a slot as well as the distance between neighboring
/// slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReelConfig {
    pub symbol_count: usize,
    pub symbol_size: f32,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self {
            symbol_count: 5,
            symbol_size: 100.0,
        }
    }
}

impl ReelConfig {
    /// Create a config; preconditions are checked at reel construction
    pub fn new(symbol_count: usize, symbol_size: f32) -> Self {
        Self {
            symbol_count,
            symbol_size,
        }
    }

    /// Check the construction preconditions
    pub fn validate(&self) -> ReelResult<()> {
        if self.symbol_count == 0 {
            return Err(ReelError::InvalidConfig(
                "symbol_count must be >= 1".to_string(),
            ));
        }
        if !self.symbol_size.is_finite() || self.symbol_size <= 0.0 {
            return Err(ReelError::InvalidConfig(format!(
                "symbol_size must be > 0, got {}",
                self.symbol_size
            )));
        }
        Ok(())
    }

    /// Width of the wrap band, `symbol_count * symbol_size`
    ///
    /// Offsets live in `[-symbol_size, band_width())` and wrap by this
    /// modulus.
    #[inline]
    pub fn band_width(&self) -> f32 {
        self.symbol_count as f32 * self.symbol_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = ReelConfig::default();
        assert_eq!(config.symbol_count, 5);
        assert_eq!(config.symbol_size, 100.0);
        assert_eq!(config.band_width(), 500.0);
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(ReelConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_count() {
        let config = ReelConfig::new(0, 100.0);
        assert!(matches!(
            config.validate(),
            Err(ReelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_size() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = ReelConfig::new(3, size);
            assert!(config.validate().is_err(), "size {} should fail", size);
        }
    }
}
