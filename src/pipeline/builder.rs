//! Pipeline assembly.
//!
//! Combines the dispatcher, the exception handler, and the ordered filter
//! list into a single request-handling entry point.

use std::sync::Arc;

use axum::response::Response;

use crate::dispatch::{DispatchHandler, DispatchRequest};
use crate::pipeline::exception::{ExceptionHandler, ResponseStatusHandler};
use crate::pipeline::filter::{Filter, FilterChain};

/// Builder for the assembled [`HttpHandler`].
pub struct HttpHandlerBuilder {
    dispatcher: DispatchHandler,
    filters: Vec<Arc<dyn Filter>>,
    exception_handler: Option<Arc<dyn ExceptionHandler>>,
}

impl HttpHandlerBuilder {
    /// Start a pipeline around the dispatcher at its tail.
    pub fn web_handler(dispatcher: DispatchHandler) -> Self {
        Self {
            dispatcher,
            filters: Vec::new(),
            exception_handler: None,
        }
    }

    /// Append one filter. Filters run in the order they were added.
    pub fn filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Append several filters, preserving their order.
    pub fn filters(mut self, filters: impl IntoIterator<Item = Arc<dyn Filter>>) -> Self {
        self.filters.extend(filters);
        self
    }

    /// Replace the exception handler. Without this, the response-status
    /// translator is installed.
    pub fn exception_handler(mut self, handler: Arc<dyn ExceptionHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    /// Assemble the pipeline.
    pub fn build(self) -> HttpHandler {
        HttpHandler {
            dispatcher: self.dispatcher,
            filters: self.filters,
            exception_handler: self
                .exception_handler
                .unwrap_or_else(|| Arc::new(ResponseStatusHandler)),
        }
    }
}

/// The assembled pipeline: filters in front of the dispatcher, with every
/// escaping error translated into a response.
pub struct HttpHandler {
    dispatcher: DispatchHandler,
    filters: Vec<Arc<dyn Filter>>,
    exception_handler: Arc<dyn ExceptionHandler>,
}

impl HttpHandler {
    /// Run a request through the pipeline. Infallible: errors become
    /// translated responses.
    pub async fn handle(&self, req: DispatchRequest) -> Response {
        let chain = FilterChain::new(&self.filters, &self.dispatcher);
        match chain.next(req).await {
            Ok(response) => response,
            Err(error) => self.exception_handler.handle(error),
        }
    }

    /// Translate an error that occurred before the pipeline was entered.
    pub fn handle_error(&self, error: crate::dispatch::DispatchError) -> Response {
        self.exception_handler.handle(error)
    }

    /// Number of filters in front of the dispatcher.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Number of routes the dispatcher serves.
    pub fn route_count(&self) -> usize {
        self.dispatcher.route_count()
    }
}
