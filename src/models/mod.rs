//! Data models
//!
//! Card records of the catalog and the shapes reading history takes on disk.

pub mod card;
pub mod history;

pub use card::{Card, LocalizedText};
pub use history::{HistoryEntry, StoredHistoryEntry};
