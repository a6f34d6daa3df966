//! Row thresholds for LED/LCD level-meter matrices.
//!
//! Each row of the meter gets an activation level that blends a decibel
//! falloff with a straight-line falloff. Row 0 is the top of the meter and
//! sits at full scale.

pub mod config;
pub mod db;
pub mod error;
pub mod report;
pub mod table;

pub use config::{MeterConfig, DYNAMIC_RANGE_DB, LINEAR_BLEND, MATRIX_HEIGHT, MAX_LEVEL};
pub use error::ConfigError;
pub use report::{report, report_json};
pub use table::{generate, threshold_at, ThresholdTable};

/// Convenience type alias for values expressed in decibels.
pub type Decibels = f32;
