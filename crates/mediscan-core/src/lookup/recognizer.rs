//! Text recognition (OCR) seam.

use async_trait::async_trait;

use crate::error::Result;
use crate::image::EncodedImage;

/// Extracts a line of text from a still image.
///
/// Implementations must be a total function of the image bytes: either a
/// text string or `MediscanError::RecognitionFailed`.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image: &EncodedImage) -> Result<String>;
}
