//! Shared foundation for the folio workspace.
//!
//! Provides configuration loading, the common error type, and input
//! sanitization utilities used by the chat shell.

pub mod config;
pub mod error;
pub mod sanitize;

pub use config::AssistantConfig;
pub use error::{Error, Result};
