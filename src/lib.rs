#![forbid(unsafe_code)]

//! Persistent configuration store for the kernelstub boot-stub manager
//!
//! Resolves a JSON configuration document from `/etc/kernelstub/configuration`
//! (falling back to the legacy `/etc/default/kernelstub` location), migrates
//! older schemas forward, holds the document in memory as the single source
//! of truth, and writes it back on demand. Concurrent access to the file is
//! not coordinated; the last writer wins.

pub mod config;
pub mod constants;

pub use config::{BASELINE, ConfigDocument, ConfigStore, RevisionCheck, Section};
