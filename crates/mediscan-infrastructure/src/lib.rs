//! Concrete backends for the MediScan session core.
//!
//! Every type here implements a seam from `mediscan-core` and can be swapped
//! for a real platform backend without touching session logic.

pub mod config_service;
pub mod file_capture_device;
pub mod hash_text_recognizer;
pub mod paths;
pub mod scripted_voice_recognizer;
pub mod static_catalog;
pub mod transcript_synthesizer;

pub use crate::config_service::ConfigService;
pub use crate::file_capture_device::FileCaptureDevice;
pub use crate::hash_text_recognizer::HashTextRecognizer;
pub use crate::paths::MediscanPaths;
pub use crate::scripted_voice_recognizer::ScriptedVoiceRecognizer;
pub use crate::static_catalog::StaticMedicationCatalog;
pub use crate::transcript_synthesizer::{TranscriptSynthesizer, UtteranceStatus};
