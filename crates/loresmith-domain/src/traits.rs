//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for the remote text generation service
///
/// Implemented by the infrastructure layer (loresmith-llm)
pub trait GenerationService {
    /// Error type for generation calls
    type Error;

    /// Send a prompt and return the service's reply text
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}

/// Trait for a string key-value persistence backend
///
/// Implemented by the infrastructure layer (loresmith-store)
pub trait KeyValueStore {
    /// Error type for store operations
    type Error;

    /// Read the value under `key`
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;

    /// All keys currently present
    fn keys(&self) -> Result<Vec<String>, Self::Error>;
}
