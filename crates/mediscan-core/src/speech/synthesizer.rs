//! Speech synthesis seam.

use serde::{Deserialize, Serialize};

pub const MIN_RATE: f32 = 0.1;
pub const MAX_RATE: f32 = 10.0;
pub const MIN_PITCH: f32 = 0.0;
pub const MAX_PITCH: f32 = 2.0;

/// A single text-to-speech request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    /// Speaking rate in [0.1, 10]
    pub rate: f32,
    /// Pitch in [0, 2]
    pub pitch: f32,
    /// Backend voice name; `None` uses the backend default
    pub voice: Option<String>,
}

impl Utterance {
    /// Creates an utterance, clamping rate and pitch into their valid ranges.
    pub fn new(text: impl Into<String>, rate: f32, pitch: f32) -> Self {
        Self {
            text: text.into(),
            rate: clamp_or(rate, MIN_RATE, MAX_RATE, 1.0),
            pitch: clamp_or(pitch, MIN_PITCH, MAX_PITCH, 1.0),
            voice: None,
        }
    }

    pub fn with_voice(mut self, voice: Option<String>) -> Self {
        self.voice = voice;
        self
    }
}

fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}

/// A voice offered by the synthesis backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceInfo {
    pub name: String,
    pub language: String,
    pub is_default: bool,
}

/// Platform text-to-speech capability.
///
/// Backends queue utterances; the adapter layered on top guarantees at most
/// one is ever active by cancelling before speaking.
pub trait SpeechSynthesizer: Send + Sync {
    /// Whether an utterance is currently being spoken.
    fn is_speaking(&self) -> bool;

    /// Starts speaking without waiting for completion.
    fn speak(&self, utterance: Utterance);

    /// Cancels the active utterance and anything queued.
    fn cancel(&self);

    fn voices(&self) -> Vec<VoiceInfo> {
        Vec::new()
    }
}
