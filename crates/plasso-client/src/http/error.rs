/*
[INPUT]:  Error sources (transport, status, serialization, GraphQL)
[OUTPUT]: Structured error types carrying the failing request context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::{Method, StatusCode};
use thiserror::Error;

/// Main error type for the Plasso client
#[derive(Error, Debug)]
pub enum PlassoError {
    /// HTTP transport failed (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered outside the 2xx range
    #[error("{method} {status} {url} {body}")]
    Status {
        method: Method,
        status: u16,
        url: String,
        body: String,
    },

    /// GraphQL endpoint reported errors in its payload
    #[error("GraphQL error: {0}")]
    GraphQl(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response parsed but did not carry what we asked for
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Session cookie could not be encoded or decoded
    #[error("Invalid session cookie: {0}")]
    Cookie(String),
}

impl PlassoError {
    /// Build a status error from a completed request
    pub fn status_error(
        method: Method,
        status: StatusCode,
        url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        PlassoError::Status {
            method,
            status: status.as_u16(),
            url: url.into(),
            body: body.into(),
        }
    }

    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            PlassoError::Status { status, .. } => Some(*status),
            PlassoError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if error indicates the member token was rejected
    pub fn is_auth_error(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

/// Result type alias for Plasso operations
pub type Result<T> = std::result::Result<T, PlassoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = PlassoError::status_error(
            Method::POST,
            StatusCode::BAD_REQUEST,
            "https://plasso.com/api/payments",
            r#"{"error":"card declined"}"#,
        );

        assert_eq!(
            err.to_string(),
            r#"POST 400 https://plasso.com/api/payments {"error":"card declined"}"#
        );
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_error_is_auth_error() {
        let unauthorized =
            PlassoError::status_error(Method::POST, StatusCode::UNAUTHORIZED, "u", "");
        let forbidden = PlassoError::status_error(Method::DELETE, StatusCode::FORBIDDEN, "u", "");
        let server = PlassoError::status_error(Method::POST, StatusCode::BAD_GATEWAY, "u", "");

        assert!(unauthorized.is_auth_error());
        assert!(forbidden.is_auth_error());
        assert!(!server.is_auth_error());
        assert!(!PlassoError::GraphQl("no member".to_string()).is_auth_error());
    }

    #[test]
    fn test_non_status_errors_have_no_status() {
        let err = PlassoError::InvalidResponse("member missing".to_string());
        assert_eq!(err.status(), None);
    }
}
