//! Multihasher Engine - the multi-level hash cascade
//!
//! `cascade` holds the per-level algorithm and a synchronous callback-driven
//! driver; `runner` spawns a cascade on a background tokio task with an event
//! channel and a cancellation token.

pub mod cascade;
pub mod runner;

pub use cascade::{encode_hash, run_cascade, Cascade};
pub use runner::{spawn_cascade, start_hashing, CascadeEvent, CascadeHandle};
