use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("deployment method failed: {0}")]
    Failed(String),

    #[error("no such deployment method: {0}")]
    MissingMethod(String),

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for InvocationError {
    fn from(e: std::io::Error) -> Self {
        InvocationError::Io(e.to_string())
    }
}
