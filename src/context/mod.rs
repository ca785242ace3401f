//! Application context subsystem.
//!
//! # Data Flow
//! ```text
//! Registrations (routes, filters, encoders, exception handler)
//!     → builder.rs (conditional defaults, compilation)
//!     → ApplicationContext (immutable component set)
//!     → shared via Arc with the HTTP server
//! ```
//!
//! # Design Decisions
//! - The context is immutable after build; component lifecycle ends when
//!   the last Arc is dropped
//! - The assembled pipeline is the context's only request entry point

pub mod builder;

pub use builder::ContextBuilder;

use axum::response::Response;

use crate::dispatch::{DispatchError, DispatchRequest};
use crate::pipeline::HttpHandler;

/// The assembled application: every registered component, frozen, behind
/// one request entry point.
pub struct ApplicationContext {
    handler: HttpHandler,
}

impl ApplicationContext {
    pub(crate) fn new(handler: HttpHandler) -> Self {
        Self { handler }
    }

    /// Start registering components.
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Run a request through the assembled pipeline.
    pub async fn handle(&self, req: DispatchRequest) -> Response {
        self.handler.handle(req).await
    }

    /// Translate an error raised before the pipeline was entered (e.g.,
    /// while buffering the request body).
    pub fn handle_error(&self, error: DispatchError) -> Response {
        self.handler.handle_error(error)
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.handler.route_count()
    }

    /// Number of registered filters.
    pub fn filter_count(&self) -> usize {
        self.handler.filter_count()
    }
}
