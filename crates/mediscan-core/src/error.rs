//! Error types for the MediScan session core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the MediScan workspace.
///
/// Variants cover the camera, lookup and voice-input failure taxonomy plus
/// the ambient I/O, configuration and serialization failures of the
/// infrastructure layer.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediscanError {
    /// Camera permission was denied or no matching device exists
    #[error("Camera unavailable: {reason}")]
    DeviceUnavailable { reason: String },

    /// An operation was invoked on an object in the wrong lifecycle state
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The text-recognition stage could not produce any text
    #[error("Text recognition failed: {0}")]
    RecognitionFailed(String),

    /// No medication record matched the query
    #[error("Medication not found for query '{query}'")]
    NotFound { query: String },

    /// The query was blank after trimming
    #[error("Please enter a medication name")]
    Empty,

    /// One-shot voice recognition failed
    #[error("Voice recognition error: {0}")]
    VoiceInput(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MediscanError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a DeviceUnavailable error
    pub fn device_unavailable(reason: impl Into<String>) -> Self {
        Self::DeviceUnavailable {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates a RecognitionFailed error
    pub fn recognition_failed(message: impl Into<String>) -> Self {
        Self::RecognitionFailed(message.into())
    }

    /// Creates a NotFound error for the given query
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Creates a VoiceInput error
    pub fn voice_input(message: impl Into<String>) -> Self {
        Self::VoiceInput(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an Empty query error
    pub fn is_empty_query(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Check if this is a camera availability error
    pub fn is_device_unavailable(&self) -> bool {
        matches!(self, Self::DeviceUnavailable { .. })
    }

    /// Check if this is an InvalidState error
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::InvalidState(_))
    }

    /// Check if this is a RecognitionFailed error
    pub fn is_recognition_failed(&self) -> bool {
        matches!(self, Self::RecognitionFailed(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for MediscanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for MediscanError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<base64::DecodeError> for MediscanError {
    fn from(err: base64::DecodeError) -> Self {
        Self::Serialization {
            format: "base64".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, MediscanError>`.
pub type Result<T> = std::result::Result<T, MediscanError>;
