//! Meter geometry and curve shape.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Decibels};

/// Number of rows in the meter matrix.
pub const MATRIX_HEIGHT: usize = 5;
/// Decibel span covered by the logarithmic component, top row to bottom row.
pub const DYNAMIC_RANGE_DB: Decibels = 40.0;
/// Share of each threshold taken from the linear component.
pub const LINEAR_BLEND: f32 = 0.3;
/// Threshold of the top row; every other row scales down from it.
pub const MAX_LEVEL: f32 = 0.4;

/// The four parameters that fully determine a threshold table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeterConfig {
    pub rows: usize,
    pub dynamic_range_db: Decibels,
    pub linear_blend: f32,
    pub max_level: f32,
}

impl MeterConfig {
    pub const DEFAULT: Self = Self {
        rows: MATRIX_HEIGHT,
        dynamic_range_db: DYNAMIC_RANGE_DB,
        linear_blend: LINEAR_BLEND,
        max_level: MAX_LEVEL,
    };

    /// Builds a config, rejecting values that cannot describe a meter.
    pub fn new(
        rows: usize,
        dynamic_range_db: Decibels,
        linear_blend: f32,
        max_level: f32,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            rows,
            dynamic_range_db,
            linear_blend,
            max_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants table generation relies on.
    ///
    /// A single row would put the normalised position at `0 / 0`, so at
    /// least two rows are required.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 2 {
            return Err(ConfigError::TooFewRows { rows: self.rows });
        }
        if !self.dynamic_range_db.is_finite() || self.dynamic_range_db <= 0.0 {
            return Err(ConfigError::DynamicRange(self.dynamic_range_db));
        }
        if !(0.0..=1.0).contains(&self.linear_blend) {
            return Err(ConfigError::LinearBlend(self.linear_blend));
        }
        if !self.max_level.is_finite() || self.max_level <= 0.0 {
            return Err(ConfigError::MaxLevel(self.max_level));
        }
        Ok(())
    }

    /// Normalised position of `row`: 0.0 at the top, 1.0 at the bottom.
    #[inline]
    pub(crate) fn position(&self, row: usize) -> f32 {
        row as f32 / (self.rows - 1) as f32
    }
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(MeterConfig::DEFAULT.validate(), Ok(()));
        assert_eq!(MeterConfig::default(), MeterConfig::DEFAULT);
    }

    #[test]
    fn single_row_is_rejected() {
        assert_eq!(
            MeterConfig::new(1, 40.0, 0.3, 0.4),
            Err(ConfigError::TooFewRows { rows: 1 })
        );
        assert_eq!(
            MeterConfig::new(0, 40.0, 0.3, 0.4),
            Err(ConfigError::TooFewRows { rows: 0 })
        );
    }

    #[test]
    fn curve_parameters_are_range_checked() {
        assert!(matches!(
            MeterConfig::new(5, 0.0, 0.3, 0.4),
            Err(ConfigError::DynamicRange(_))
        ));
        assert!(matches!(
            MeterConfig::new(5, f32::INFINITY, 0.3, 0.4),
            Err(ConfigError::DynamicRange(_))
        ));
        assert!(matches!(
            MeterConfig::new(5, 40.0, 1.5, 0.4),
            Err(ConfigError::LinearBlend(_))
        ));
        assert!(matches!(
            MeterConfig::new(5, 40.0, f32::NAN, 0.4),
            Err(ConfigError::LinearBlend(_))
        ));
        assert!(matches!(
            MeterConfig::new(5, 40.0, 0.3, -0.4),
            Err(ConfigError::MaxLevel(_))
        ));
    }

    #[test]
    fn blend_endpoints_are_allowed() {
        assert!(MeterConfig::new(5, 40.0, 0.0, 0.4).is_ok());
        assert!(MeterConfig::new(5, 40.0, 1.0, 0.4).is_ok());
    }

    #[test]
    fn positions_span_unit_interval() {
        let config = MeterConfig::DEFAULT;
        assert_eq!(config.position(0), 0.0);
        assert_eq!(config.position(2), 0.5);
        assert_eq!(config.position(4), 1.0);
    }
}
