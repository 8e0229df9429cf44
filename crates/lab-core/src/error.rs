use thiserror::Error;

#[derive(Debug, Error)]
pub enum LabError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Topology error: {0}")]
    Topology(String),

    #[error("Geometry error: {0}")]
    Geometry(String),
}

pub type Result<T> = std::result::Result<T, LabError>;
