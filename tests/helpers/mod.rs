//! Test helpers module
//!
//! This module provides utilities and helpers for testing the DailyTarot bot.
//! It includes the mock Telegram server and a temp-dir backed test context.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_context;

pub use telegram_mock::*;
pub use test_context::*;
