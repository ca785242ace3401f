//! Response body encoders.

use bytes::Bytes;
use thiserror::Error;

use crate::dispatch::HandlerValue;

/// Errors that can occur while encoding a handler value.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// JSON serialization failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// No registered encoder accepts the value.
    #[error("no encoder accepts the handler value")]
    NoEncoder,
}

/// Renders one shape of handler value into response bytes.
///
/// Encoders are consulted in registration order; the first one whose
/// `can_encode` accepts the value wins and stamps its content type.
pub trait Encoder: Send + Sync {
    /// Content type stamped on responses this encoder produces.
    fn content_type(&self) -> &'static str;

    /// Whether this encoder accepts the value.
    fn can_encode(&self, value: &HandlerValue) -> bool;

    /// Encode the value into body bytes.
    fn encode(&self, value: &HandlerValue) -> Result<Bytes, EncodeError>;
}

/// Passes raw byte payloads through.
#[derive(Debug, Default)]
pub struct ByteEncoder;

impl Encoder for ByteEncoder {
    fn content_type(&self) -> &'static str {
        "application/octet-stream"
    }

    fn can_encode(&self, value: &HandlerValue) -> bool {
        matches!(value, HandlerValue::Bytes(_))
    }

    fn encode(&self, value: &HandlerValue) -> Result<Bytes, EncodeError> {
        match value {
            HandlerValue::Bytes(bytes) => Ok(bytes.clone()),
            _ => Err(EncodeError::NoEncoder),
        }
    }
}

/// Renders text payloads as UTF-8 plain text.
#[derive(Debug, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn can_encode(&self, value: &HandlerValue) -> bool {
        matches!(value, HandlerValue::Text(_))
    }

    fn encode(&self, value: &HandlerValue) -> Result<Bytes, EncodeError> {
        match value {
            HandlerValue::Text(text) => Ok(Bytes::copy_from_slice(text.as_bytes())),
            _ => Err(EncodeError::NoEncoder),
        }
    }
}

/// Serializes JSON payloads.
#[derive(Debug, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn can_encode(&self, value: &HandlerValue) -> bool {
        matches!(value, HandlerValue::Json(_))
    }

    fn encode(&self, value: &HandlerValue) -> Result<Bytes, EncodeError> {
        match value {
            HandlerValue::Json(json) => Ok(Bytes::from(serde_json::to_vec(json)?)),
            _ => Err(EncodeError::NoEncoder),
        }
    }
}
