/// Convenience result type used across the crate.
pub type LayersResult<T> = Result<T, LayersError>;

/// Top-level error taxonomy used by compositing and layer APIs.
#[derive(thiserror::Error, Debug)]
pub enum LayersError {
    /// A dynamic operand or pixel node had the wrong type.
    #[error("type error: {0}")]
    Type(String),

    /// Pixel or alpha data that does not reshape to 8x8 (or 8x8x3).
    #[error("shape error: {0}")]
    Shape(String),

    /// Invalid effect or animation configuration.
    #[error("config error: {0}")]
    Config(String),

    /// A layer with the same name already exists in the stack.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// A layer name did not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    /// A layer reference that is neither a name nor a valid index.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Fieldless category of a [`LayersError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`LayersError::Type`].
    Type,
    /// See [`LayersError::Shape`].
    Shape,
    /// See [`LayersError::Config`].
    Config,
    /// See [`LayersError::DuplicateName`].
    DuplicateName,
    /// See [`LayersError::NotFound`].
    NotFound,
    /// See [`LayersError::InvalidArgument`].
    InvalidArgument,
    /// See [`LayersError::Other`].
    Other,
}

impl LayersError {
    /// Build a [`LayersError::Type`] value.
    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }

    /// Build a [`LayersError::Shape`] value.
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Build a [`LayersError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`LayersError::DuplicateName`] value.
    pub fn duplicate_name(msg: impl Into<String>) -> Self {
        Self::DuplicateName(msg.into())
    }

    /// Build a [`LayersError::NotFound`] value.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Build a [`LayersError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(_) => ErrorKind::Type,
            Self::Shape(_) => ErrorKind::Shape,
            Self::Config(_) => ErrorKind::Config,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
