use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Model error: {0}")]
    ModelError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Evaluation failed: {0}")]
    EvalFailed(String),
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::ModelError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
