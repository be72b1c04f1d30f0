//! Internationalization module
//!
//! This module handles the bilingual texts of the DailyTarot bot.
//! It provides translation loading and message formatting for the
//! configured languages.

pub mod loader;

// Re-export commonly used i18n components
pub use loader::{I18n, TranslationParams};
