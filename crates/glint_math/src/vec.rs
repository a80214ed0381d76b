//! Fallible vector operations.
//!
//! `glam` provides the component-wise arithmetic, dot/cross products and
//! length queries. What it does not provide is a normalization that fails
//! loudly: `Vec3::normalize` on a zero vector quietly produces NaN
//! components that poison every downstream computation. Intersection and
//! shading code normalizes untrusted directions, so the checked variant
//! lives here.

use glam::Vec3;
use thiserror::Error;

/// Error for vector operations with violated preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidVectorError {
    #[error("cannot normalize a degenerate vector (length = {length})")]
    DegenerateLength { length: f32 },
}

/// Normalize `v` to unit length.
///
/// Fails with [`InvalidVectorError`] if `v` has zero or non-finite length,
/// instead of silently propagating NaN/infinities.
pub fn unit_vector(v: Vec3) -> Result<Vec3, InvalidVectorError> {
    let length = v.length();
    if length == 0.0 || !length.is_finite() {
        return Err(InvalidVectorError::DegenerateLength { length });
    }
    Ok(v / length)
}
