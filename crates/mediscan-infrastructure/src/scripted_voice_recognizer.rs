//! Voice recognizer that replays queued transcripts.

use std::collections::VecDeque;

use async_trait::async_trait;
use mediscan_core::error::{MediscanError, Result};
use mediscan_core::voice::VoiceRecognizer;
use tokio::sync::Mutex;

/// Returns queued outcomes in order; an exhausted queue reports that no
/// speech was detected.
#[derive(Debug, Default)]
pub struct ScriptedVoiceRecognizer {
    script: Mutex<VecDeque<Result<String>>>,
}

impl ScriptedVoiceRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transcripts<I, S>(transcripts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(transcripts.into_iter().map(|t| Ok(t.into())).collect()),
        }
    }

    pub async fn push(&self, outcome: Result<String>) {
        self.script.lock().await.push_back(outcome);
    }
}

#[async_trait]
impl VoiceRecognizer for ScriptedVoiceRecognizer {
    async fn listen_once(&self, language: &str) -> Result<String> {
        let outcome = self
            .script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(MediscanError::voice_input("no speech detected")));
        tracing::debug!(language, ok = outcome.is_ok(), "Scripted recognition finished");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_replays_in_order_then_fails() {
        let recognizer = ScriptedVoiceRecognizer::with_transcripts(["aspirin", "zinc"]);
        assert_eq!(recognizer.listen_once("en-US").await.unwrap(), "aspirin");
        assert_eq!(recognizer.listen_once("en-US").await.unwrap(), "zinc");

        let err = recognizer.listen_once("en-US").await.unwrap_err();
        assert_eq!(err, MediscanError::voice_input("no speech detected"));
    }

    #[tokio::test]
    async fn test_pushed_errors_are_returned() {
        let recognizer = ScriptedVoiceRecognizer::new();
        recognizer
            .push(Err(MediscanError::voice_input("microphone blocked")))
            .await;
        assert!(recognizer.listen_once("en-US").await.is_err());
    }
}
