//! Error types for the HTTP scoring adapter

use compass_application::GatewayError;
use thiserror::Error;

/// Result type alias for HTTP adapter operations
pub type Result<T> = std::result::Result<T, HttpError>;

/// Errors that can occur when talking to the scoring service over HTTP
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Not found")]
    NotFound,

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl From<HttpError> for GatewayError {
    fn from(err: HttpError) -> Self {
        match err {
            HttpError::Transport(e) if e.is_timeout() => GatewayError::Timeout,
            HttpError::Transport(e) => GatewayError::ConnectionError(e.to_string()),
            HttpError::Status { status, body } => GatewayError::HttpStatus {
                status,
                message: body,
            },
            HttpError::NotFound => GatewayError::NotFound,
            e @ (HttpError::ParseError { .. } | HttpError::UnexpectedResponse(_)) => {
                GatewayError::InvalidResponse(e.to_string())
            }
            HttpError::ClientBuild(msg) => GatewayError::Other(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_http_status() {
        let err: GatewayError = HttpError::Status {
            status: 503,
            body: "down".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::HttpStatus { status: 503, .. }));
    }

    #[test]
    fn test_parse_error_maps_to_invalid_response() {
        let err: GatewayError = HttpError::ParseError {
            error: "expected value".to_string(),
            raw: "<html>".to_string(),
        }
        .into();
        assert!(matches!(err, GatewayError::InvalidResponse(_)));
    }

    #[test]
    fn test_not_found_is_preserved() {
        let err: GatewayError = HttpError::NotFound.into();
        assert!(matches!(err, GatewayError::NotFound));
    }
}
