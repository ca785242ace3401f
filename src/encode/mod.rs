//! Response encoding subsystem.
//!
//! # Data Flow
//! ```text
//! HandlerValue (from dispatch)
//!     → renderer.rs (status/pre-built short paths)
//!     → encoder.rs (first accepting encoder)
//!     → Response (body bytes + Content-Type)
//! ```

pub mod encoder;
pub mod renderer;

pub use encoder::{ByteEncoder, EncodeError, Encoder, JsonEncoder, TextEncoder};
pub use renderer::ResponseRenderer;
