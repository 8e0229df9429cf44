//! Precondition checks shared by the generators.

use lab_core::{LabError, Result};

/// Dimensions must be finite and strictly positive.
pub(crate) fn require_dimension(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LabError::InvalidArgument(format!(
            "{name} must be a positive finite number, got {value}"
        )))
    }
}

pub(crate) fn require_segments(name: &str, value: u32, min: u32) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(LabError::InvalidArgument(format!(
            "{name} must be at least {min}, got {value}"
        )))
    }
}

/// Every vertex must stay addressable by a `u32` index.
pub(crate) fn require_addressable(shape: &str, vertex_count: u64) -> Result<()> {
    if vertex_count <= u64::from(u32::MAX) {
        Ok(())
    } else {
        Err(LabError::InvalidArgument(format!(
            "{shape} would need {vertex_count} vertices, more than a u32 index can address"
        )))
    }
}
