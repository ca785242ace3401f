//! Filter contract and chain composition.
//!
//! # Responsibilities
//! - Define the `Filter` trait for pipeline stages
//! - Compose registered filters into a chain ending at the dispatcher
//!
//! # Design Decisions
//! - A filter may short-circuit by returning a response without
//!   delegating to the chain
//! - Filter errors flow to the exception handler, not the connection
//! - Chain order is registration order

use std::sync::Arc;

use async_trait::async_trait;
use axum::response::Response;

use crate::dispatch::{DispatchError, DispatchHandler, DispatchRequest};

/// A pipeline stage that can inspect or modify requests and responses
/// around dispatch.
#[async_trait]
pub trait Filter: Send + Sync {
    /// Process the request. Delegate onward with `chain.next(req)`, or
    /// short-circuit by returning a response or an error.
    async fn filter(
        &self,
        req: DispatchRequest,
        chain: FilterChain<'_>,
    ) -> Result<Response, DispatchError>;
}

/// The remaining pipeline from a filter's point of view.
///
/// Holds the filters still to run and the dispatcher at the tail. Consumed
/// by `next`, so a filter can delegate at most once.
pub struct FilterChain<'a> {
    filters: &'a [Arc<dyn Filter>],
    target: &'a DispatchHandler,
}

impl<'a> FilterChain<'a> {
    /// Start a chain over the full filter list.
    pub fn new(filters: &'a [Arc<dyn Filter>], target: &'a DispatchHandler) -> Self {
        Self { filters, target }
    }

    /// Run the rest of the chain.
    pub async fn next(self, req: DispatchRequest) -> Result<Response, DispatchError> {
        match self.filters.split_first() {
            Some((head, rest)) => {
                head.filter(
                    req,
                    FilterChain {
                        filters: rest,
                        target: self.target,
                    },
                )
                .await
            }
            None => self.target.dispatch(req).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{handler_fn, Handler, HandlerValue, RouteMapping};
    use crate::encode::ResponseRenderer;
    use axum::http::{self, Method, StatusCode};
    use bytes::Bytes;

    fn dispatcher() -> DispatchHandler {
        let routes: Vec<(RouteMapping, Arc<dyn Handler>)> = vec![(
            RouteMapping::get("/"),
            handler_fn(|req| async move {
                let tag = req
                    .header("x-filter-tag")
                    .unwrap_or("none")
                    .to_string();
                Ok(HandlerValue::Text(tag))
            }),
        )];
        DispatchHandler::new(routes, ResponseRenderer::with_defaults())
    }

    fn request(path: &str) -> DispatchRequest {
        http::Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Bytes::new())
            .unwrap()
            .into()
    }

    /// Appends its tag to a header so ordering is observable.
    struct TagFilter(&'static str);

    #[async_trait]
    impl Filter for TagFilter {
        async fn filter(
            &self,
            mut req: DispatchRequest,
            chain: FilterChain<'_>,
        ) -> Result<Response, DispatchError> {
            let tag = match req.header("x-filter-tag") {
                Some(existing) => format!("{},{}", existing, self.0),
                None => self.0.to_string(),
            };
            req.headers_mut()
                .insert("x-filter-tag", tag.parse().unwrap());
            chain.next(req).await
        }
    }

    struct RejectFilter;

    #[async_trait]
    impl Filter for RejectFilter {
        async fn filter(
            &self,
            _req: DispatchRequest,
            _chain: FilterChain<'_>,
        ) -> Result<Response, DispatchError> {
            Err(DispatchError::BadRequest("rejected".into()))
        }
    }

    struct ShortCircuitFilter;

    #[async_trait]
    impl Filter for ShortCircuitFilter {
        async fn filter(
            &self,
            _req: DispatchRequest,
            _chain: FilterChain<'_>,
        ) -> Result<Response, DispatchError> {
            let mut response = Response::new(axum::body::Body::from("cached"));
            *response.status_mut() = StatusCode::OK;
            Ok(response)
        }
    }

    #[tokio::test]
    async fn empty_chain_reaches_dispatcher() {
        let dispatcher = dispatcher();
        let chain = FilterChain::new(&[], &dispatcher);
        let response = chain.next(request("/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn filters_run_in_registration_order() {
        let dispatcher = dispatcher();
        let filters: Vec<Arc<dyn Filter>> =
            vec![Arc::new(TagFilter("first")), Arc::new(TagFilter("second"))];
        let chain = FilterChain::new(&filters, &dispatcher);

        let response = chain.next(request("/")).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"first,second");
    }

    #[tokio::test]
    async fn filter_error_stops_the_chain() {
        let dispatcher = dispatcher();
        let filters: Vec<Arc<dyn Filter>> =
            vec![Arc::new(RejectFilter), Arc::new(TagFilter("unreached"))];
        let chain = FilterChain::new(&filters, &dispatcher);

        let err = chain.next(request("/")).await.unwrap_err();
        assert!(matches!(err, DispatchError::BadRequest(_)));
    }

    #[tokio::test]
    async fn filter_can_short_circuit() {
        let dispatcher = dispatcher();
        let filters: Vec<Arc<dyn Filter>> = vec![Arc::new(ShortCircuitFilter)];
        let chain = FilterChain::new(&filters, &dispatcher);

        let response = chain.next(request("/")).await.unwrap();
        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        assert_eq!(&body[..], b"cached");
    }
}
