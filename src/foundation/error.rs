/// Convenience result type used across motio.
pub type MotioResult<T> = Result<T, MotioError>;

/// Top-level error taxonomy used by the core APIs.
#[derive(thiserror::Error, Debug)]
pub enum MotioError {
    /// Arithmetic or keyframe insertion attempted across conflicting value variants.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A sequence id, template id or parameter index that was promised present is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// Structurally invalid persisted data (project file or template descriptor).
    #[error("malformed project file: {0}")]
    MalformedProjectFile(String),

    /// Scoped read/write of a file or directory failed.
    #[error("io failure: {0}")]
    IoFailure(String),

    /// Invalid arguments to a constructor or mutation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MotioError {
    /// Build a [`MotioError::TypeMismatch`] value.
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    /// Build a [`MotioError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`MotioError::MalformedProjectFile`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedProjectFile(msg.into())
    }

    /// Build a [`MotioError::IoFailure`] value.
    pub fn io_failure(msg: impl Into<String>) -> Self {
        Self::IoFailure(msg.into())
    }

    /// Build a [`MotioError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
