//! HTTP request-dispatch pipeline.
//!
//! Three composed stages serve every request:
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │                 web-dispatch                  │
//!                 │                                               │
//!   Request ──────┼─▶ server ──▶ pipeline ──▶ dispatch ──▶ encode │
//!                 │   (bind,      (filters,    (route     (value  │
//!                 │    layers)     errors)      lookup)    → body)│
//!                 │                                               │
//!                 │   context: registers and freezes all of it    │
//!                 │   config / lifecycle: startup and teardown    │
//!                 └──────────────────────────────────────────────┘
//! ```
//!
//! An application registers routes, filters, and encoders on a
//! [`ContextBuilder`], builds the immutable [`ApplicationContext`], and
//! hands it to the [`HttpServer`] bound on the configured address.

// Core subsystems
pub mod config;
pub mod context;
pub mod dispatch;
pub mod encode;
pub mod pipeline;

// Cross-cutting concerns
pub mod lifecycle;
pub mod security;
pub mod server;

pub use config::AppConfig;
pub use context::{ApplicationContext, ContextBuilder};
pub use dispatch::{DispatchError, DispatchRequest, Handler, HandlerValue, RouteMapping};
pub use lifecycle::Shutdown;
pub use pipeline::{Filter, HttpHandler, HttpHandlerBuilder};
pub use server::HttpServer;
