//! Storage layer
//!
//! Text posts live in memory; upload records live in SQLite (embedded).

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::MemoryPostStore;
