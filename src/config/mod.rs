//! Configuration management for kernelstub
//!
//! This module has two halves:
//! - **document**: the persisted JSON shape, the built-in baseline, and
//!   schema migration
//! - **store**: path resolution (primary, legacy fallback, baseline
//!   synthesis) plus persistence

pub mod document;
pub mod store;

// Re-export commonly used types
pub use document::{BASELINE, ConfigDocument, RevisionCheck, Section};
pub use store::ConfigStore;
