//! Request ID generation.
//!
//! Every request gets a UUID v4 under `x-request-id` before tracing runs,
//! and the ID is propagated onto the response.

use axum::http::{HeaderValue, Request};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Generates a fresh UUID v4 per request.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeUuidRequestId;

impl MakeRequestId for MakeUuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn generates_unique_ids() {
        let request = Request::builder().body(Body::empty()).unwrap();

        let a = MakeUuidRequestId.make_request_id(&request).unwrap();
        let b = MakeUuidRequestId.make_request_id(&request).unwrap();
        assert_ne!(a.header_value(), b.header_value());

        // Parses back as a UUID
        let text = a.header_value().to_str().unwrap();
        assert!(Uuid::parse_str(text).is_ok());
    }
}
