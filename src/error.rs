//! Error types for OAuth 1.0 signing.

/// Result type returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure raised while building or signing a base string.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input that cannot enter the pipeline (relative URI, malformed header, unknown method).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Key material that cannot be used for the requested signature method.
    #[error("key configuration error: {0}")]
    KeyConfiguration(String),
}

impl Error {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }

    pub(crate) fn key_configuration(msg: impl Into<String>) -> Self {
        Error::KeyConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::invalid_input("uri has no scheme").to_string(),
            "invalid input: uri has no scheme"
        );
        assert_eq!(
            Error::key_configuration("not an RSA key").to_string(),
            "key configuration error: not an RSA key"
        );
    }
}
