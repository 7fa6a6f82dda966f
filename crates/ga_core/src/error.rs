use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() {
            AnalysisError::Deserialization(err.to_string())
        } else {
            AnalysisError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
