//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the application context in a catch-all router
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Bind the server to a listener
//! - Serve until the shutdown signal fires, then drain

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderName, Request},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::context::ApplicationContext;
use crate::dispatch::{DispatchError, DispatchRequest};
use crate::lifecycle::ShutdownListener;
use crate::server::request_id::{MakeUuidRequestId, X_REQUEST_ID};

/// State injected into the catch-all entry handler.
#[derive(Clone)]
struct AppState {
    context: Arc<ApplicationContext>,
    max_body_bytes: usize,
}

/// HTTP server for the dispatch pipeline.
pub struct HttpServer {
    context: Arc<ApplicationContext>,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server around an assembled context.
    pub fn new(context: Arc<ApplicationContext>, config: ServerConfig) -> Self {
        Self { context, config }
    }

    /// Build the router with all middleware layers.
    ///
    /// Every path funnels into the context; route resolution happens in
    /// the dispatcher, not here.
    fn build_router(&self) -> Router {
        let state = AppState {
            context: self.context.clone(),
            max_body_bytes: self.config.max_body_bytes,
        };
        let request_id = HeaderName::from_static(X_REQUEST_ID);

        Router::new()
            .route("/{*path}", any(entry))
            .route("/", any(entry))
            .with_state(state)
            .layer(
                // Outermost first: the ID exists before tracing sees the
                // request and is copied onto the response on the way out
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::new(
                        request_id.clone(),
                        MakeUuidRequestId,
                    ))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::new(request_id))
                    .layer(RequestBodyLimitLayer::new(self.config.max_body_bytes))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        self.config.request_timeout_secs,
                    ))),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// shutdown is triggered.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.context.route_count(),
            filters = self.context.filter_count(),
            "HTTP server starting"
        );

        let app = self.build_router().into_make_service();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.recv().await })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Catch-all entry: buffer the body, hand the request to the pipeline.
async fn entry(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();

    let body = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            return state
                .context
                .handle_error(DispatchError::BadRequest(format!(
                    "failed to read request body: {}",
                    e
                )));
        }
    };

    state
        .context
        .handle(DispatchRequest::from_parts(parts, body))
        .await
}
