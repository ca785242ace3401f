//! Handler contract and request representation.
//!
//! # Responsibilities
//! - Define the request view handed to filters and handlers
//! - Define the `Handler` trait and its closure adapter
//! - Define the values handlers can produce
//!
//! # Design Decisions
//! - Bodies are buffered before dispatch; handlers see `Bytes`, not a stream
//! - Handlers return a value, not a response; rendering is a separate step
//! - Closure handlers avoid boilerplate for simple routes

use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{self, HeaderMap, Method, StatusCode, Uri};
use bytes::Bytes;

use crate::dispatch::DispatchError;

/// A buffered HTTP request flowing through the pipeline.
///
/// Wraps the framework request with its body already collected, so filters
/// and handlers can inspect it without dealing with streaming. Extensions
/// survive from the server layers and can be extended by filters.
#[derive(Debug)]
pub struct DispatchRequest {
    inner: http::Request<Bytes>,
}

impl DispatchRequest {
    /// Rebuild a request from framework parts and a buffered body.
    pub fn from_parts(parts: http::request::Parts, body: Bytes) -> Self {
        Self {
            inner: http::Request::from_parts(parts, body),
        }
    }

    pub fn method(&self) -> &Method {
        self.inner.method()
    }

    pub fn uri(&self) -> &Uri {
        self.inner.uri()
    }

    pub fn path(&self) -> &str {
        self.inner.uri().path()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        self.inner.headers_mut()
    }

    /// A header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: impl http::header::AsHeaderName) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        self.inner.body()
    }

    pub fn into_body(self) -> Bytes {
        self.inner.into_body()
    }

    pub fn extensions(&self) -> &http::Extensions {
        self.inner.extensions()
    }

    /// Attach a value to the request, visible to downstream filters and
    /// handlers.
    pub fn insert_extension<T: Clone + Send + Sync + 'static>(&mut self, value: T) {
        self.inner.extensions_mut().insert(value);
    }
}

impl From<http::Request<Bytes>> for DispatchRequest {
    fn from(inner: http::Request<Bytes>) -> Self {
        Self { inner }
    }
}

/// The value a handler produces, rendered into a response downstream.
#[derive(Debug)]
pub enum HandlerValue {
    /// Nothing to send; renders as 200 with an empty body.
    Empty,

    /// A bare status with an empty body.
    Status(StatusCode),

    /// A raw byte payload.
    Bytes(Bytes),

    /// A plain text payload.
    Text(String),

    /// A JSON payload.
    Json(serde_json::Value),

    /// A fully built response, passed through untouched.
    Response(http::Response<Bytes>),
}

impl HandlerValue {
    /// Serialize any `Serialize` value into a JSON handler value.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self, DispatchError> {
        let value = serde_json::to_value(value)
            .map_err(|e| DispatchError::handler(format!("JSON conversion failed: {}", e)))?;
        Ok(HandlerValue::Json(value))
    }
}

/// A request handler registered under a route mapping.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle the request, producing a value for the response renderer.
    async fn handle(&self, req: DispatchRequest) -> Result<HandlerValue, DispatchError>;
}

/// Adapter turning an async closure into a [`Handler`].
pub struct HandlerFn<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> Handler for HandlerFn<F>
where
    F: Fn(DispatchRequest) -> Fut + Send + Sync,
    Fut: Future<Output = Result<HandlerValue, DispatchError>> + Send + 'static,
{
    async fn handle(&self, req: DispatchRequest) -> Result<HandlerValue, DispatchError> {
        (self.f)(req).await
    }
}

/// Wrap an async closure as a shareable handler.
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn Handler>
where
    F: Fn(DispatchRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HandlerValue, DispatchError>> + Send + 'static,
{
    Arc::new(HandlerFn { f })
}
