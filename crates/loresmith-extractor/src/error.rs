//! Error types for chat sessions
//!
//! Classification and extraction have no failure mode. Only the parts of a
//! session that talk to the generation service can fail.

use thiserror::Error;

/// Errors that can occur while running a chat turn
#[derive(Error, Debug)]
pub enum SessionError {
    /// Generation service error
    #[error("Generation error: {0}")]
    Generation(String),

    /// Generation did not answer in time
    #[error("Generation timeout")]
    Timeout,

    /// Message exceeds maximum length
    #[error("Message too long: {0} chars (max: {1})")]
    MessageTooLong(usize, usize),

    /// Message is empty after trimming
    #[error("Message is empty")]
    EmptyMessage,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
