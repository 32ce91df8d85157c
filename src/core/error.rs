//! Error taxonomy for the recommendation engine

use thiserror::Error;

/// Errors surfaced by the engine and its data collaborators
#[derive(Debug, Error)]
pub enum EngineError {
    /// An upstream read failed or returned malformed data
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// A caller passed an argument outside its valid range (e.g. a negative limit)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The backing store could not be read
    #[error("failed to read data store: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store is not valid TOML for the expected schema
    #[error("failed to parse data store: {0}")]
    Parse(#[from] toml::de::Error),
}

impl EngineError {
    /// Shorthand for a [`EngineError::DataUnavailable`] error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable(message.into())
    }

    /// Whether this error came from upstream data rather than the caller
    #[must_use]
    pub const fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable(_) | Self::Io(_) | Self::Parse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_category() {
        let err = EngineError::unavailable("course 'x' missing");
        assert_eq!(err.to_string(), "data unavailable: course 'x' missing");

        let err = EngineError::InvalidArgument("limit must be >= 0, got -1".to_string());
        assert!(err.to_string().starts_with("invalid argument"));
        assert!(!err.is_data_unavailable());
    }

    #[test]
    fn io_errors_count_as_unavailable_data() {
        let err: EngineError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_data_unavailable());
    }
}
