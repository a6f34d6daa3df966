//! Decibel to linear conversion.

use crate::Decibels;

/// Converts decibels to a linear gain factor.
///
/// Never clamps to silence, so a meter with a very wide dynamic range still
/// gets a non-zero bottom row.
#[inline]
pub fn db_to_linear(db: Decibels) -> f32 {
    10.0f32.powf(db * 0.05)
}
