//! Platform capabilities available to an interaction session.
//!
//! Capabilities are probed once when a session starts and the result is
//! cached for the session's lifetime.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::camera::CaptureDevice;
use crate::speech::SpeechSynthesizer;
use crate::voice::VoiceRecognizer;

/// Whether a platform capability can be used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum Availability {
    Available,
    Unavailable(String),
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    fn of<T: ?Sized>(backend: &Option<Arc<T>>, missing: &str) -> Self {
        match backend {
            Some(_) => Availability::Available,
            None => Availability::Unavailable(missing.to_string()),
        }
    }
}

/// Snapshot of what the platform supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    pub speech: Availability,
    pub voice_input: Availability,
    pub camera: Availability,
}

/// The device backends an interaction session may use.
///
/// Every backend is optional; a missing one degrades the session instead of
/// failing it.
#[derive(Clone, Default)]
pub struct Platform {
    pub speech: Option<Arc<dyn SpeechSynthesizer>>,
    pub voice: Option<Arc<dyn VoiceRecognizer>>,
    pub camera: Option<Arc<dyn CaptureDevice>>,
}

impl Platform {
    pub fn with_speech(mut self, speech: Arc<dyn SpeechSynthesizer>) -> Self {
        self.speech = Some(speech);
        self
    }

    pub fn with_voice(mut self, voice: Arc<dyn VoiceRecognizer>) -> Self {
        self.voice = Some(voice);
        self
    }

    pub fn with_camera(mut self, camera: Arc<dyn CaptureDevice>) -> Self {
        self.camera = Some(camera);
        self
    }

    pub fn probe(&self) -> Capabilities {
        let capabilities = Capabilities {
            speech: Availability::of(&self.speech, "speech synthesis is not available"),
            voice_input: Availability::of(&self.voice, "voice recognition is not supported"),
            camera: Availability::of(&self.camera, "no capture device is available"),
        };
        tracing::debug!(?capabilities, "Platform capabilities probed");
        capabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::Utterance;

    struct SilentSynthesizer;

    impl SpeechSynthesizer for SilentSynthesizer {
        fn is_speaking(&self) -> bool {
            false
        }
        fn speak(&self, _utterance: Utterance) {}
        fn cancel(&self) {}
    }

    #[test]
    fn test_empty_platform_is_unavailable() {
        let capabilities = Platform::default().probe();
        assert!(!capabilities.speech.is_available());
        assert!(!capabilities.voice_input.is_available());
        assert!(!capabilities.camera.is_available());
    }

    #[test]
    fn test_probe_reports_present_backends() {
        let capabilities = Platform::default()
            .with_speech(Arc::new(SilentSynthesizer))
            .probe();
        assert_eq!(capabilities.speech, Availability::Available);
        assert!(!capabilities.camera.is_available());
    }
}
