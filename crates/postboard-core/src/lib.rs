//! Postboard Core Library
//!
//! Domain error type and the storage ports implemented by the server.

// Re-export pure types from postboard-types
pub use postboard_types::*;

pub mod error;
pub mod ports;

pub use error::{PostboardError, Result};
