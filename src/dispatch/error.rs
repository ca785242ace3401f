//! Dispatch error definitions.

use axum::http::StatusCode;
use thiserror::Error;

use crate::encode::EncodeError;

/// Errors that can occur while dispatching a request through the pipeline.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No registered mapping matched the request path.
    #[error("no handler mapped to the request path")]
    NotFound,

    /// A mapping matched the path but not the request method.
    #[error("request method not allowed for this path")]
    MethodNotAllowed,

    /// The request failed an authentication filter.
    #[error("authentication required")]
    Unauthorized {
        /// Realm announced back to the client in the challenge.
        realm: String,
    },

    /// The request was malformed.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A handler failed while producing its value.
    #[error("handler failed: {0}")]
    Handler(String),

    /// The handler value could not be rendered into a response body.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl DispatchError {
    /// The HTTP status this error translates to.
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::NotFound => StatusCode::NOT_FOUND,
            DispatchError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            DispatchError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            DispatchError::BadRequest(_) => StatusCode::BAD_REQUEST,
            DispatchError::Handler(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DispatchError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Wrap an arbitrary handler failure.
    pub fn handler(err: impl std::fmt::Display) -> Self {
        DispatchError::Handler(err.to_string())
    }
}
