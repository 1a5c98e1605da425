pub mod error;
pub mod id;
pub mod traits;

pub use error::{Result, VistaError};
pub use id::ListHandle;
pub use traits::Validate;
