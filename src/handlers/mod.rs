//! Bot handlers module
//!
//! This module contains all Telegram bot handlers organized by type:
//! - Command handlers for bot commands
//! - Callback handlers for inline keyboard interactions
//!
//! Both kinds funnel into the shared replies, which render and deliver the
//! response through the keyboards and delivery helpers.

pub mod commands;
pub mod callbacks;
pub mod delivery;
pub mod keyboards;
pub mod render;
pub mod replies;

// Re-export commonly used handler functions
pub use commands::{Command, handle_command};
pub use callbacks::{CallbackAction, handle_callback_query};
