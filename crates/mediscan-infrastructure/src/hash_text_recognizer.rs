//! Deterministic stand-in for a vision OCR backend.
//!
//! No image analysis happens here. The base64 form of the image is hashed
//! and the hash selects one of a few canned label texts, so the same photo
//! always "reads" the same way.

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mediscan_core::error::{MediscanError, Result};
use mediscan_core::image::EncodedImage;
use mediscan_core::lookup::TextRecognizer;

/// Number of base64 characters that feed the hash.
const HASHED_PREFIX_LEN: usize = 1000;

const LABELS: [&str; 3] = [
    "Aspirin 325mg\nPain Reliever\nTake as directed\nExp: 12/2025",
    "Lisinopril 10mg\nBlood Pressure Medication\nTake once daily\nExp: 08/2024",
    "Metformin 500mg\nDiabetes Medication\nTake with meals\nExp: 06/2026",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct HashTextRecognizer;

impl HashTextRecognizer {
    /// 32-bit `h * 31 + c` hash over the first characters of the payload.
    pub fn label_hash(base64_payload: &str) -> u32 {
        let hash = base64_payload
            .bytes()
            .take(HASHED_PREFIX_LEN)
            .fold(0i32, |hash, byte| {
                (hash << 5).wrapping_sub(hash).wrapping_add(i32::from(byte))
            });
        hash.unsigned_abs()
    }

    /// Label text selected for an image payload.
    pub fn label_for(image: &EncodedImage) -> Option<&'static str> {
        if image.is_empty() {
            return None;
        }
        let hash = Self::label_hash(&STANDARD.encode(image.bytes()));
        Some(LABELS[(hash % LABELS.len() as u32) as usize])
    }
}

#[async_trait]
impl TextRecognizer for HashTextRecognizer {
    async fn recognize(&self, image: &EncodedImage) -> Result<String> {
        let label = Self::label_for(image).ok_or_else(|| {
            MediscanError::recognition_failed("Failed to process image. Please try again.")
        })?;
        tracing::debug!(format = %image.format(), label, "Stub recognizer produced label text");
        Ok(label.to_string())
    }
}
