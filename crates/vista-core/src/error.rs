use thiserror::Error;

#[derive(Debug, Error)]
pub enum VistaError {
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    #[error("Degenerate curve: cannot build a cross-section basis at corner {corner}")]
    DegenerateBasis { corner: usize },

    #[error("Non-finite position at point {index}")]
    NonFinitePoint { index: usize },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, VistaError>;
