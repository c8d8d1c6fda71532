//! One-shot voice input.

use async_trait::async_trait;

use crate::error::Result;

/// Non-continuous speech recognition yielding a single transcript.
///
/// The transcript only ever populates the text query; it has no other
/// effect on session state.
#[async_trait]
pub trait VoiceRecognizer: Send + Sync {
    /// Listens once and returns the final transcript.
    ///
    /// # Errors
    ///
    /// Returns `MediscanError::VoiceInput` when recognition fails.
    async fn listen_once(&self, language: &str) -> Result<String>;
}
