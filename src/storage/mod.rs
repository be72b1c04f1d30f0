//! Persistent state module
//!
//! Every logical store (language preferences, daily markers, reading history,
//! command counters) is one JSON object in its own file.

pub mod json_store;

pub use json_store::JsonStore;
