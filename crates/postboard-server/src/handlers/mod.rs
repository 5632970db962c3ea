//! HTTP handlers

pub mod health;
pub mod posts;
pub mod upload;

pub use health::health;
