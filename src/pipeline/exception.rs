//! Error-to-status translation.
//!
//! # Responsibilities
//! - Map dispatch errors escaping the chain to HTTP responses
//! - Attach the authentication challenge header on 401s
//! - Log server-side failures
//!
//! # Design Decisions
//! - Translation is synchronous and infallible
//! - 5xx logged at error level, 4xx at debug
//! - Response body is the error's own message, plain text

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::dispatch::DispatchError;

/// Translates errors escaping the filter chain into responses.
pub trait ExceptionHandler: Send + Sync {
    fn handle(&self, error: DispatchError) -> Response;
}

/// Default translator: each error becomes its mapped status with a short
/// plain-text body.
#[derive(Debug, Default)]
pub struct ResponseStatusHandler;

impl ExceptionHandler for ResponseStatusHandler {
    fn handle(&self, error: DispatchError) -> Response {
        let status = error.status();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %error, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %error, "Request rejected");
        }

        let mut response = (status, error.to_string()).into_response();

        if let DispatchError::Unauthorized { realm } = &error {
            if let Ok(challenge) = format!("Basic realm=\"{}\"", realm).parse() {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, challenge);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn not_found_becomes_404() {
        let response = ResponseStatusHandler.handle(DispatchError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn handler_failure_becomes_500() {
        let response = ResponseStatusHandler.handle(DispatchError::handler("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unauthorized_carries_challenge() {
        let response = ResponseStatusHandler.handle(DispatchError::Unauthorized {
            realm: "test-realm".into(),
        });
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            "Basic realm=\"test-realm\""
        );
    }
}
