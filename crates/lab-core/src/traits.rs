use crate::error::Result;

/// Validate structural integrity of a mesh or derived state.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
