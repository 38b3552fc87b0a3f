pub type KenBurnsResult<T> = Result<T, KenBurnsError>;

#[derive(thiserror::Error, Debug)]
pub enum KenBurnsError {
    #[error("invalid transition: {0}")]
    InvalidTransition(String),

    #[error("no bounds: {0}")]
    NoBounds(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KenBurnsError {
    pub fn invalid_transition(msg: impl Into<String>) -> Self {
        Self::InvalidTransition(msg.into())
    }

    pub fn no_bounds(msg: impl Into<String>) -> Self {
        Self::NoBounds(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
