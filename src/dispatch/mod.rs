//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, path, headers, buffered body)
//!     → dispatcher.rs (route lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → handler.rs (invoke registered handler)
//!     → renderer (handler value → response body)
//!
//! Route Compilation (at context build):
//!     RouteMapping[]
//!     → Parse path patterns (exact / prefix)
//!     → Compile matchers
//!     → Freeze as immutable DispatchHandler
//! ```
//!
//! # Design Decisions
//! - Routes compiled at context build, immutable at runtime
//! - No regex in the hot path (exact and prefix matching only)
//! - First match wins (registration order)
//! - Path-matched-but-wrong-method is a distinct error (405, not 404)

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod mapping;
pub mod matcher;

pub use dispatcher::DispatchHandler;
pub use error::DispatchError;
pub use handler::{handler_fn, DispatchRequest, Handler, HandlerFn, HandlerValue};
pub use mapping::{PathPattern, RouteMapping};
