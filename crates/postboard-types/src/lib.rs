//! Postboard Types - Pure type definitions
//!
//! This crate contains only plain serde data types with no async runtime
//! dependencies, shared by the core ports and the server.

pub mod post;
pub mod upload;

pub use post::*;
pub use upload::*;
