use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown target name: {0}")]
    UnknownTarget(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
