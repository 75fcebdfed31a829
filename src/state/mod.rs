//! State module for tracking harvest progress
//!
//! # Components
//!
//! - `ResultStore`: the ordered, append-only collection of extracted products

mod result_store;

// Re-export main types
pub use result_store::ResultStore;
