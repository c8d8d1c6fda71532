//! Single-utterance speech adapter.

use std::sync::Arc;

use super::synthesizer::{SpeechSynthesizer, Utterance, VoiceInfo};
use crate::config::SpeechSettings;

/// Speaks announcements through an optional synthesis backend.
///
/// When no backend is available every call is a silent no-op; speech is a
/// best-effort side channel and never reports failure to callers.
#[derive(Clone)]
pub struct SpeechOutput {
    backend: Option<Arc<dyn SpeechSynthesizer>>,
    settings: SpeechSettings,
}

impl SpeechOutput {
    /// Creates an adapter. A disabled `settings.enabled` drops the backend.
    pub fn new(backend: Option<Arc<dyn SpeechSynthesizer>>, settings: SpeechSettings) -> Self {
        let backend = backend.filter(|_| settings.enabled);
        Self { backend, settings }
    }

    /// An adapter with no backend.
    pub fn unsupported() -> Self {
        Self {
            backend: None,
            settings: SpeechSettings::default(),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    /// Speaks `text` with the configured rate and pitch.
    pub fn speak(&self, text: &str) {
        self.speak_with(text, self.settings.rate, self.settings.pitch);
    }

    /// Cancels whatever is speaking, then speaks `text`.
    pub fn speak_with(&self, text: &str, rate: f32, pitch: f32) {
        let Some(backend) = &self.backend else {
            tracing::debug!(text, "Speech unsupported, announcement not spoken");
            return;
        };

        if backend.is_speaking() {
            backend.cancel();
        }
        backend.speak(Utterance::new(text, rate, pitch).with_voice(self.settings.voice.clone()));
    }

    /// Cancels the active utterance, if any.
    pub fn stop_speaking(&self) {
        if let Some(backend) = &self.backend {
            if backend.is_speaking() {
                backend.cancel();
            }
        }
    }

    pub fn available_voices(&self) -> Vec<VoiceInfo> {
        self.backend
            .as_ref()
            .map(|backend| backend.voices())
            .unwrap_or_default()
    }
}

impl std::fmt::Debug for SpeechOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechOutput")
            .field("supported", &self.is_supported())
            .field("settings", &self.settings)
            .finish()
    }
}
