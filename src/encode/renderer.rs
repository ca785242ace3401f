//! Handler value rendering.
//!
//! # Responsibilities
//! - Turn a handler value into a full HTTP response
//! - Resolve body-producing values against the encoder list
//! - Stamp the winning encoder's content type
//!
//! # Design Decisions
//! - Status-only and pre-built responses bypass the encoders
//! - First accepting encoder wins (registration order)
//! - A value no encoder accepts is an error, not a silent empty body

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::Response;

use crate::dispatch::HandlerValue;
use crate::encode::encoder::{ByteEncoder, Encoder, EncodeError, JsonEncoder, TextEncoder};

/// Renders handler values into responses using an ordered encoder list.
pub struct ResponseRenderer {
    encoders: Vec<Arc<dyn Encoder>>,
}

impl ResponseRenderer {
    /// Build a renderer over an explicit encoder list.
    pub fn new(encoders: Vec<Arc<dyn Encoder>>) -> Self {
        Self { encoders }
    }

    /// Build a renderer with the default byte, text, and JSON encoders.
    pub fn with_defaults() -> Self {
        Self::new(vec![
            Arc::new(ByteEncoder),
            Arc::new(TextEncoder),
            Arc::new(JsonEncoder),
        ])
    }

    /// Number of registered encoders.
    pub fn encoder_count(&self) -> usize {
        self.encoders.len()
    }

    /// Render a handler value into a response.
    pub fn render(&self, value: HandlerValue) -> Result<Response, EncodeError> {
        match value {
            HandlerValue::Empty => Ok(empty_response(StatusCode::OK)),
            HandlerValue::Status(status) => Ok(empty_response(status)),
            HandlerValue::Response(response) => {
                let (parts, body) = response.into_parts();
                Ok(Response::from_parts(parts, Body::from(body)))
            }
            value => {
                for encoder in &self.encoders {
                    if encoder.can_encode(&value) {
                        let bytes = encoder.encode(&value)?;
                        return Ok(Response::builder()
                            .status(StatusCode::OK)
                            .header(header::CONTENT_TYPE, encoder.content_type())
                            .body(Body::from(bytes))
                            .unwrap_or_else(|_| empty_response(StatusCode::OK)));
                    }
                }
                Err(EncodeError::NoEncoder)
            }
        }
    }
}

fn empty_response(status: StatusCode) -> Response {
    let mut response = Response::new(Body::empty());
    *response.status_mut() = status;
    response
}
