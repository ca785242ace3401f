//! HTTP handler pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! DispatchRequest
//!     → filter.rs (ordered filter chain; may short-circuit)
//!     → dispatch (route lookup, handler, rendering)
//!     → Response
//!
//! Any DispatchError escaping the chain
//!     → exception.rs (error → status + body)
//!     → Response
//! ```
//!
//! # Design Decisions
//! - The assembled handler is infallible; errors never cross the server
//!   boundary untranslated
//! - Default exception handler installed only when none is registered

pub mod builder;
pub mod exception;
pub mod filter;

pub use builder::{HttpHandler, HttpHandlerBuilder};
pub use exception::{ExceptionHandler, ResponseStatusHandler};
pub use filter::{Filter, FilterChain};
