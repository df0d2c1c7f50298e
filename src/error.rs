use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source error ({source_name}): {message}")]
    Source {
        source_name: String,
        message: String,
    },

    #[error("Rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Task timed out after {0}ms")]
    Timeout(u64),

    #[error("Price series is empty")]
    EmptySeries,

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl PipelineError {
    pub fn upstream(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::Source {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
