//! Chat session: one character drafted over many turns

use crate::classify::classify_output;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::extractor::extract_with_report;
use crate::prompt::PromptBuilder;
use crate::types::{OutputKind, Turn, TurnOutcome};
use loresmith_domain::traits::GenerationService;
use loresmith_domain::{CharacterId, CharacterRecord};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::time::timeout;
use tracing::{debug, info};

struct SessionState {
    record: CharacterRecord,
    /// Bumped by every reset; replies started under an older value are dropped
    generation: u64,
    transcript: Vec<Turn>,
}

/// A chat with the generation service that keeps one character record
///
/// Clones share the same state, so one clone can start a new chat while
/// another is waiting on a reply. A reply that arrives after a reset is
/// discarded instead of being merged into the fresh record.
pub struct ChatSession<G>
where
    G: GenerationService,
{
    generator: Arc<G>,
    config: SessionConfig,
    state: Arc<Mutex<SessionState>>,
}

impl<G> Clone for ChatSession<G>
where
    G: GenerationService,
{
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            config: self.config.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<G> ChatSession<G>
where
    G: GenerationService + Send + Sync + 'static,
    G::Error: std::fmt::Display,
{
    /// Start a session with an empty record
    pub fn new(generator: G, config: SessionConfig) -> Result<Self, SessionError> {
        config.validate().map_err(SessionError::Config)?;

        Ok(Self {
            generator: Arc::new(generator),
            config,
            state: Arc::new(Mutex::new(SessionState {
                record: CharacterRecord::new(),
                generation: 0,
                transcript: Vec::new(),
            })),
        })
    }

    /// Session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Snapshot of the current record
    pub fn record(&self) -> CharacterRecord {
        self.lock_state().record.clone()
    }

    /// Turns exchanged since the last reset
    pub fn transcript(&self) -> Vec<Turn> {
        self.lock_state().transcript.clone()
    }

    /// Start over with a fresh, empty record
    ///
    /// Any reply still in flight will be discarded when it arrives.
    pub fn new_chat(&self) -> CharacterId {
        self.reset_with(CharacterRecord::new())
    }

    /// Start over from an existing record, e.g. one loaded from a store
    pub fn resume(&self, record: CharacterRecord) -> CharacterId {
        self.reset_with(record)
    }

    fn reset_with(&self, record: CharacterRecord) -> CharacterId {
        let mut state = self.lock_state();
        state.generation += 1;
        state.record = record;
        state.transcript.clear();
        info!(
            "Started chat {} for character {}",
            state.generation, state.record.id
        );
        state.record.id.clone()
    }

    /// Send a message and fold the reply into the record
    pub async fn submit(&self, message: &str) -> Result<TurnOutcome, SessionError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(SessionError::EmptyMessage);
        }
        let length = message.chars().count();
        if length > self.config.max_message_length {
            return Err(SessionError::MessageTooLong(
                length,
                self.config.max_message_length,
            ));
        }

        let (generation, prompt) = {
            let state = self.lock_state();
            let builder = PromptBuilder::new(message);
            let builder = if self.config.include_record_context {
                builder.with_record(&state.record)
            } else {
                builder
            };
            (state.generation, builder.build())
        };

        debug!("Prompt length: {} chars", prompt.len());

        let reply = timeout(self.config.generation_timeout(), self.call_generator(prompt))
            .await
            .map_err(|_| SessionError::Timeout)??;

        debug!("Reply length: {} chars", reply.len());

        let mut state = self.lock_state();
        if state.generation != generation {
            info!(
                "Discarding reply from chat {} (now on chat {})",
                generation, state.generation
            );
            return Ok(TurnOutcome::Superseded);
        }

        let kind = classify_output(&reply);
        state.transcript.push(Turn {
            message: message.to_string(),
            reply: reply.clone(),
            kind,
        });

        match kind {
            OutputKind::Plain => {
                debug!("Reply classified as plain text");
                Ok(TurnOutcome::Plain { reply })
            }
            OutputKind::Character => {
                let extraction = extract_with_report(&reply, &state.record);
                info!(
                    "Character reply: {} sections, {} fields updated",
                    extraction.sections.len(),
                    extraction.changes.len()
                );
                state.record = extraction.record.clone();
                Ok(TurnOutcome::Character {
                    reply,
                    record: extraction.record,
                    changes: extraction.changes,
                })
            }
        }
    }

    /// Call the generation service
    async fn call_generator(&self, prompt: String) -> Result<String, SessionError> {
        let generator = Arc::clone(&self.generator);

        // GenerationService is blocking
        tokio::task::spawn_blocking(move || {
            generator
                .generate(&prompt)
                .map_err(|e| SessionError::Generation(e.to_string()))
        })
        .await
        .map_err(|e| SessionError::Generation(format!("Task join error: {}", e)))?
    }

    fn lock_state(&self) -> MutexGuard<'_, SessionState> {
        // State is replaced wholesale under the lock, so a poisoned guard is still consistent
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
