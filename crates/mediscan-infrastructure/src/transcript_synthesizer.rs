//! In-memory speech backend that keeps a transcript.
//!
//! Useful for headless sessions and for asserting what a session announced.
//! An utterance counts as speaking until [`TranscriptSynthesizer::finish`]
//! is called or it is cancelled.

use std::sync::{Mutex, MutexGuard};

use mediscan_core::speech::{SpeechSynthesizer, Utterance, VoiceInfo};

/// How an utterance left the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceStatus {
    Speaking,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub utterance: Utterance,
    pub status: UtteranceStatus,
}

#[derive(Debug, Default)]
pub struct TranscriptSynthesizer {
    entries: Mutex<Vec<TranscriptEntry>>,
}

impl TranscriptSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, Vec<TranscriptEntry>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Marks the active utterance as completed.
    pub fn finish(&self) {
        let mut entries = self.entries();
        if let Some(entry) = entries.last_mut() {
            if entry.status == UtteranceStatus::Speaking {
                entry.status = UtteranceStatus::Completed;
            }
        }
    }

    /// Every entry, oldest first.
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.entries().clone()
    }

    /// Texts of every utterance handed to the backend, oldest first.
    pub fn spoken(&self) -> Vec<String> {
        self.entries()
            .iter()
            .map(|entry| entry.utterance.text.clone())
            .collect()
    }

    pub fn last_spoken(&self) -> Option<String> {
        self.entries()
            .last()
            .map(|entry| entry.utterance.text.clone())
    }

    /// Whether any utterance so far contains `needle`.
    pub fn heard(&self, needle: &str) -> bool {
        self.entries()
            .iter()
            .any(|entry| entry.utterance.text.contains(needle))
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}

impl SpeechSynthesizer for TranscriptSynthesizer {
    fn is_speaking(&self) -> bool {
        self.entries()
            .last()
            .is_some_and(|entry| entry.status == UtteranceStatus::Speaking)
    }

    fn speak(&self, utterance: Utterance) {
        let mut entries = self.entries();
        // The backend queues; a still-speaking predecessor completes first.
        if let Some(entry) = entries.last_mut() {
            if entry.status == UtteranceStatus::Speaking {
                entry.status = UtteranceStatus::Completed;
            }
        }
        entries.push(TranscriptEntry {
            utterance,
            status: UtteranceStatus::Speaking,
        });
    }

    fn cancel(&self) {
        let mut entries = self.entries();
        if let Some(entry) = entries.last_mut() {
            if entry.status == UtteranceStatus::Speaking {
                entry.status = UtteranceStatus::Cancelled;
            }
        }
    }

    fn voices(&self) -> Vec<VoiceInfo> {
        vec![VoiceInfo {
            name: "transcript".to_string(),
            language: "en-US".to_string(),
            is_default: true,
        }]
    }
}
