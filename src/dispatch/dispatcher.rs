//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes
//! - Look up the matching route for a request
//! - Invoke the handler and render its value
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First match wins (registration order)
//! - Explicit NotFound / MethodNotAllowed rather than silent default

use std::sync::Arc;

use axum::response::Response;

use crate::dispatch::mapping::RouteMapping;
use crate::dispatch::matcher::{Matcher, MethodMatcher};
use crate::dispatch::{DispatchError, DispatchRequest, Handler};
use crate::encode::ResponseRenderer;

/// A registered route compiled for dispatch.
struct CompiledRoute {
    mapping: RouteMapping,
    path: Box<dyn Matcher>,
    method: MethodMatcher,
    handler: Arc<dyn Handler>,
}

/// Routes requests to their registered handlers.
///
/// The terminal stage of the pipeline: after the filter chain has passed a
/// request through, the dispatcher finds the mapped handler, invokes it,
/// and renders its value into a response.
pub struct DispatchHandler {
    routes: Vec<CompiledRoute>,
    renderer: ResponseRenderer,
}

impl DispatchHandler {
    /// Compile registered routes into a dispatcher.
    pub fn new(
        routes: Vec<(RouteMapping, Arc<dyn Handler>)>,
        renderer: ResponseRenderer,
    ) -> Self {
        let routes = routes
            .into_iter()
            .map(|(mapping, handler)| {
                let (path, method) = mapping.compile();
                CompiledRoute {
                    mapping,
                    path,
                    method,
                    handler,
                }
            })
            .collect();
        Self { routes, renderer }
    }

    /// Number of registered routes.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Dispatch a request to its handler.
    ///
    /// A path that matches no mapping yields [`DispatchError::NotFound`];
    /// a path that matches a mapping whose method set excludes the request
    /// method yields [`DispatchError::MethodNotAllowed`].
    pub async fn dispatch(&self, req: DispatchRequest) -> Result<Response, DispatchError> {
        let mut path_matched = false;

        for route in &self.routes {
            if !route.path.matches(&req) {
                continue;
            }
            if !route.method.matches(&req) {
                path_matched = true;
                continue;
            }

            tracing::debug!(
                mapping = %route.mapping,
                path = %req.path(),
                "Dispatching request"
            );

            let value = route.handler.handle(req).await?;
            return Ok(self.renderer.render(value)?);
        }

        if path_matched {
            Err(DispatchError::MethodNotAllowed)
        } else {
            Err(DispatchError::NotFound)
        }
    }
}
