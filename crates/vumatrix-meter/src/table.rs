//! Threshold table generation.

use serde::Serialize;

use crate::db::db_to_linear;
use crate::{ConfigError, MeterConfig, MATRIX_HEIGHT};

const _: () = assert!(MATRIX_HEIGHT >= 2, "the built-in meter needs at least 2 rows");

/// Activation levels for every row of a meter, top row first.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ThresholdTable {
    config: MeterConfig,
    thresholds: Vec<f32>,
}

impl ThresholdTable {
    /// Table for the built-in meter constants.
    pub fn default_table() -> Self {
        debug_assert_eq!(MeterConfig::DEFAULT.validate(), Ok(()));
        Self::build(MeterConfig::DEFAULT)
    }

    /// Evaluates every row. `config` must already be validated.
    fn build(config: MeterConfig) -> Self {
        let thresholds = (0..config.rows)
            .map(|row| row_threshold(&config, row))
            .collect();
        Self { config, thresholds }
    }

    pub fn config(&self) -> &MeterConfig {
        &self.config
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    #[inline]
    pub fn get(&self, row: usize) -> Option<f32> {
        self.thresholds.get(row).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.thresholds
    }

    /// Yields `(row, threshold)` pairs in ascending row order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.thresholds.iter().copied().enumerate()
    }
}

impl<'a> IntoIterator for &'a ThresholdTable {
    type Item = (usize, f32);
    type IntoIter = std::iter::Enumerate<std::iter::Copied<std::slice::Iter<'a, f32>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.thresholds.iter().copied().enumerate()
    }
}

/// The logarithmic part falls from unity to `-dynamic_range_db` over the
/// height of the meter while the linear part falls from `linear_blend` to
/// zero. Their weights always sum to one before scaling by `max_level`.
#[inline]
fn row_threshold(config: &MeterConfig, row: usize) -> f32 {
    let n = config.position(row);
    let log_level = db_to_linear(-config.dynamic_range_db * n);
    let linear_level = (1.0 - n) * config.linear_blend;
    let log_scaled = log_level * (1.0 - config.linear_blend);
    (log_scaled + linear_level) * config.max_level
}

/// Threshold for a single row, without building the whole table.
pub fn threshold_at(config: &MeterConfig, row: usize) -> Result<f32, ConfigError> {
    config.validate()?;
    if row >= config.rows {
        return Err(ConfigError::RowOutOfRange {
            row,
            rows: config.rows,
        });
    }
    Ok(row_threshold(config, row))
}

/// Computes the threshold of every row described by `config`.
pub fn generate(config: MeterConfig) -> Result<ThresholdTable, ConfigError> {
    config.validate()?;
    let table = ThresholdTable::build(config);
    tracing::debug!(
        rows = config.rows,
        dynamic_range_db = config.dynamic_range_db,
        linear_blend = config.linear_blend,
        max_level = config.max_level,
        "generated threshold table"
    );
    Ok(table)
}
