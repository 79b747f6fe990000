//! Loresmith Generation Service Adapters
//!
//! Implementations of the `GenerationService` trait from `loresmith-domain`.
//!
//! # Generators
//!
//! - `MockGenerator`: Deterministic replies for tests and offline use
//! - `HttpGenerator`: Remote text generation over HTTP
//!
//! # Examples
//!
//! ```
//! use loresmith_llm::MockGenerator;
//! use loresmith_domain::traits::GenerationService;
//!
//! let generator = MockGenerator::new("NAME: Rex");
//! assert_eq!(generator.generate("anything").unwrap(), "NAME: Rex");
//! ```

#![warn(missing_docs)]

pub mod http;

use loresmith_domain::traits::GenerationService;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

pub use http::HttpGenerator;

/// Errors that can occur while generating a reply
#[derive(Error, Debug)]
pub enum GenerationError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// The service answered with something we could not read
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Generation error: {0}")]
    Other(String),
}

#[derive(Debug)]
enum Scripted {
    Reply(String),
    Error(String),
}

#[derive(Debug, Default)]
struct MockState {
    responses: HashMap<String, Scripted>,
    queue: VecDeque<Scripted>,
    prompts: Vec<String>,
}

/// Mock generator for deterministic testing
///
/// Replies are chosen in this order: a reply registered for the exact
/// prompt, then the next queued reply, then the default. Clones share
/// state, so a test can keep a handle after moving the generator into a
/// session.
///
/// # Examples
///
/// ```
/// use loresmith_llm::MockGenerator;
/// use loresmith_domain::traits::GenerationService;
///
/// let generator = MockGenerator::default();
/// generator.queue_reply("NAME: Rex");
/// generator.add_response("ping", "pong");
///
/// assert_eq!(generator.generate("ping").unwrap(), "pong");
/// assert_eq!(generator.generate("first").unwrap(), "NAME: Rex");
/// assert_eq!(generator.generate("second").unwrap(), "Default mock response");
/// assert_eq!(generator.call_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct MockGenerator {
    default_reply: String,
    state: Arc<Mutex<MockState>>,
}

impl MockGenerator {
    /// Create a new MockGenerator with a fixed reply for all prompts
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            default_reply: reply.into(),
            state: Arc::new(Mutex::new(MockState::default())),
        }
    }

    /// Reply with `reply` whenever the prompt is exactly `prompt`
    pub fn add_response(&self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.lock()
            .responses
            .insert(prompt.into(), Scripted::Reply(reply.into()));
    }

    /// Fail whenever the prompt is exactly `prompt`
    pub fn add_error(&self, prompt: impl Into<String>) {
        self.lock().responses.insert(
            prompt.into(),
            Scripted::Error("Mock error".to_string()),
        );
    }

    /// Use `reply` for the next call without a prompt-specific reply
    pub fn queue_reply(&self, reply: impl Into<String>) {
        self.lock().queue.push_back(Scripted::Reply(reply.into()));
    }

    /// Fail the next call without a prompt-specific reply
    pub fn queue_error(&self, message: impl Into<String>) {
        self.lock().queue.push_back(Scripted::Error(message.into()));
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.lock().prompts.clone()
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        self.lock().prompts.len()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        self.lock().prompts.clear();
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl GenerationService for MockGenerator {
    type Error = GenerationError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        let mut state = self.lock();
        state.prompts.push(prompt.to_string());

        let scripted = match state.responses.get(prompt) {
            Some(Scripted::Reply(reply)) => Some(Scripted::Reply(reply.clone())),
            Some(Scripted::Error(message)) => Some(Scripted::Error(message.clone())),
            None => state.queue.pop_front(),
        };

        match scripted {
            Some(Scripted::Reply(reply)) => Ok(reply),
            Some(Scripted::Error(message)) => Err(GenerationError::Other(message)),
            None => Ok(self.default_reply.clone()),
        }
    }
}
