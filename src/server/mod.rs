//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → http.rs (catch-all router, middleware layers)
//!     → request_id.rs (UUID stamped before tracing)
//!     → body buffered
//!     → ApplicationContext (filter chain + dispatch)
//!     → Response
//! ```

pub mod http;
pub mod request_id;

pub use http::HttpServer;
pub use request_id::{MakeUuidRequestId, X_REQUEST_ID};
