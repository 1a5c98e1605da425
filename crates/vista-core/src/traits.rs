use crate::error::Result;

/// Check that a configuration or geometric description is usable before it
/// reaches the tessellator.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
