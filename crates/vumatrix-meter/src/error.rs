use thiserror::Error;

/// Reasons a [`MeterConfig`](crate::MeterConfig) cannot produce a threshold.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("a meter needs at least 2 rows, got {rows}")]
    TooFewRows { rows: usize },
    #[error("dynamic range must be a positive number of decibels, got {0}")]
    DynamicRange(f32),
    #[error("linear blend must lie within 0..=1, got {0}")]
    LinearBlend(f32),
    #[error("max level must be positive, got {0}")]
    MaxLevel(f32),
    #[error("row {row} is outside a meter of {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
}
