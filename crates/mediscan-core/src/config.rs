//! Configuration model for a MediScan session.
//!
//! Every section is optional in the TOML file; missing sections and fields
//! fall back to the defaults below.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Root configuration loaded from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MediscanConfig {
    pub camera: CameraSettings,
    pub speech: SpeechSettings,
    pub voice: VoiceSettings,
    pub lookup: LookupSettings,
    pub accessibility: AccessibilitySettings,
}

/// Which way the requested camera should face.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FacingMode {
    /// Rear camera
    #[default]
    Environment,
    /// Front camera
    User,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CameraSettings {
    pub facing: FacingMode,
    pub width_hint: u32,
    pub height_hint: u32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            facing: FacingMode::Environment,
            width_hint: 1280,
            height_hint: 720,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SpeechSettings {
    /// When false the session behaves as if no synthesizer exists
    pub enabled: bool,
    /// Speaking rate, clamped to [0.1, 10]
    pub rate: f32,
    /// Pitch, clamped to [0, 2]
    pub pitch: f32,
    /// Preferred voice name, if the backend offers it
    pub voice: Option<String>,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rate: 1.0,
            pitch: 1.0,
            voice: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct VoiceSettings {
    /// BCP 47 language tag handed to the recognizer
    pub language: String,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            language: "en-US".to_string(),
        }
    }
}

/// Simulated backend latency for the stub lookup pipeline.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LookupSettings {
    pub search_latency_ms: u64,
    pub recognition_latency_ms: u64,
}

impl LookupSettings {
    /// Settings with every simulated delay disabled.
    pub fn immediate() -> Self {
        Self {
            search_latency_ms: 0,
            recognition_latency_ms: 0,
        }
    }
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            search_latency_ms: 1000,
            recognition_latency_ms: 1500,
        }
    }
}

/// Text size preference.
#[derive(
    Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AccessibilitySettings {
    pub high_contrast: bool,
    pub font_size: FontSize,
}
