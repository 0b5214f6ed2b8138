//! API Error Taxonomy
//!
//! Every failure mode collapses to one generic user-facing alert per
//! operation; these variants exist for the diagnostic channel and for the
//! auth forms, which surface the server's message.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Detected locally, before any request is issued.
    PasswordMismatch,
    /// The fetch itself was rejected (offline, DNS, CORS).
    Network(String),
    /// Non-2xx response; message comes from the body when present.
    Server { status: u16, message: String },
    /// 2xx response with an unexpected body shape.
    Decode(String),
}

impl ApiError {
    pub(crate) fn network(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }

    pub(crate) fn decode(err: gloo_net::Error) -> Self {
        ApiError::Decode(err.to_string())
    }

    /// Server-provided message for display, if there is one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::PasswordMismatch => write!(f, "passwords do not match"),
            ApiError::Network(detail) => write!(f, "network error: {detail}"),
            ApiError::Server { status, message } if message.is_empty() => {
                write!(f, "server returned status {status}")
            }
            ApiError::Server { status, message } => {
                write!(f, "server returned status {status}: {message}")
            }
            ApiError::Decode(detail) => write!(f, "unexpected response shape: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_only_when_present() {
        let err = ApiError::Server {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.server_message(), Some("Invalid credentials"));

        let bare = ApiError::Server {
            status: 500,
            message: String::new(),
        };
        assert_eq!(bare.server_message(), None);
        assert!(ApiError::PasswordMismatch.server_message().is_none());
    }
}
