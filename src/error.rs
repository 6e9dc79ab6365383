use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum SecurityError {
    #[error("Security repository unavailable: {0}")]
    RepositoryUnavailable(String),

    #[error("Unknown sensor: {0}")]
    UnknownSensor(String),

    #[error("Image analysis failed: {0}")]
    ImageAnalysisFailed(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SecurityError>;
