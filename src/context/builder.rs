//! Application context builder.
//!
//! # Responsibilities
//! - Collect route, filter, encoder, and exception-handler registrations
//! - Install defaults for slots nothing was registered into
//! - Compile everything into the immutable context
//!
//! # Design Decisions
//! - Defaults are conditional: registering any encoder suppresses the
//!   default encoder set, registering an exception handler suppresses the
//!   response-status translator
//! - Registration order is meaningful for routes, filters, and encoders

use std::future::Future;
use std::sync::Arc;

use crate::context::ApplicationContext;
use crate::dispatch::{
    handler_fn, DispatchError, DispatchHandler, DispatchRequest, Handler, HandlerValue,
    RouteMapping,
};
use crate::encode::{Encoder, ResponseRenderer};
use crate::pipeline::{ExceptionHandler, Filter, HttpHandlerBuilder};

/// Collects component registrations and assembles the application context.
#[derive(Default)]
pub struct ContextBuilder {
    routes: Vec<(RouteMapping, Arc<dyn Handler>)>,
    filters: Vec<Arc<dyn Filter>>,
    encoders: Vec<Arc<dyn Encoder>>,
    exception_handler: Option<Arc<dyn ExceptionHandler>>,
}

impl ContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a route mapping.
    pub fn route(mut self, mapping: RouteMapping, handler: Arc<dyn Handler>) -> Self {
        self.routes.push((mapping, handler));
        self
    }

    /// Register an async closure under a route mapping.
    pub fn route_fn<F, Fut>(self, mapping: RouteMapping, f: F) -> Self
    where
        F: Fn(DispatchRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<HandlerValue, DispatchError>> + Send + 'static,
    {
        self.route(mapping, handler_fn(f))
    }

    /// Register a pipeline filter. Filters run in registration order.
    pub fn filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Register a response encoder. Suppresses the default encoder set.
    pub fn encoder(mut self, encoder: Arc<dyn Encoder>) -> Self {
        self.encoders.push(encoder);
        self
    }

    /// Register the exception handler. Suppresses the default translator.
    pub fn exception_handler(mut self, handler: Arc<dyn ExceptionHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    /// Compile registrations into an immutable [`ApplicationContext`].
    pub fn build(self) -> ApplicationContext {
        let renderer = if self.encoders.is_empty() {
            ResponseRenderer::with_defaults()
        } else {
            ResponseRenderer::new(self.encoders)
        };

        let dispatcher = DispatchHandler::new(self.routes, renderer);

        let mut builder = HttpHandlerBuilder::web_handler(dispatcher).filters(self.filters);
        if let Some(handler) = self.exception_handler {
            builder = builder.exception_handler(handler);
        }
        let handler = builder.build();

        tracing::debug!(
            routes = handler.route_count(),
            filters = handler.filter_count(),
            "Application context built"
        );

        ApplicationContext::new(handler)
    }
}
