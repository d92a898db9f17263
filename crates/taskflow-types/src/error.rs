//! # Client Error Taxonomy
//!
//! Errors that cross the network boundary. Local form-validation failures
//! never become an `ApiError`; they stay field-scoped in the form layer.

use thiserror::Error;

/// Anything that can go wrong talking to the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server answered with a fail/error envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed (DNS, refused connection, offline).
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but was not what the client expects.
    #[error("malformed response: {0}")]
    Decode(String),
}

/// High-level buckets for routing an error to the right UI treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Rejected input the user can correct (4xx other than auth/not-found)
    Input,
    /// Missing or rejected credentials
    Auth,
    /// Connectivity problems, usually transient
    Network,
    /// The referenced resource (or token) no longer exists
    NotFound,
    /// Server-side failure or a response the client cannot read
    Server,
}

impl ErrorCategory {
    /// Whether a retry without user action has a chance of succeeding.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network | Self::Server)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Invalid input",
            Self::Auth => "Not authorized",
            Self::Network => "Network",
            Self::NotFound => "Not found",
            Self::Server => "Server error",
        }
    }
}

impl ApiError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Api { status, .. } => match status {
                401 | 403 => ErrorCategory::Auth,
                404 | 410 => ErrorCategory::NotFound,
                400..=499 => ErrorCategory::Input,
                _ => ErrorCategory::Server,
            },
            Self::Network(_) => ErrorCategory::Network,
            Self::Decode(_) => ErrorCategory::Server,
        }
    }

    /// True for 401/403 responses.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        self.category() == ErrorCategory::Auth
    }

    /// Message suitable for a user-facing notice. Network and decode
    /// failures get a retry-suggesting text instead of internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Network(_) => "Connection problem. Please try again.".to_string(),
            Self::Decode(_) => "Unexpected server response. Please try again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_categories() {
        let auth = ApiError::Api {
            status: 401,
            message: "no".into(),
        };
        assert_eq!(auth.category(), ErrorCategory::Auth);
        assert!(auth.is_auth());

        let missing = ApiError::Api {
            status: 404,
            message: "gone".into(),
        };
        assert_eq!(missing.category(), ErrorCategory::NotFound);

        let invalid = ApiError::Api {
            status: 422,
            message: "bad".into(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Input);

        let broken = ApiError::Api {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(broken.category(), ErrorCategory::Server);
    }

    #[test]
    fn network_errors_are_transient_and_generic() {
        let err = ApiError::Network("fetch failed".into());
        assert!(err.category().is_transient());
        assert!(err.user_message().contains("try again"));
    }
}
