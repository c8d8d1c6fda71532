//! Lookup service trait definition.

use async_trait::async_trait;

use crate::error::Result;
use crate::image::EncodedImage;
use crate::medication::MedicationRecord;

/// Resolves free text or a captured image to a medication record.
///
/// Both operations may take observable wall-clock time. Callers must not
/// assume any ordering between two concurrently issued calls.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Matches the trimmed query against the catalog.
    ///
    /// # Errors
    ///
    /// - `MediscanError::Empty` if the query is blank
    /// - `MediscanError::NotFound` if no record name matches
    async fn search_by_text(&self, query: &str) -> Result<MedicationRecord>;

    /// Recognizes text on the image, then delegates to [`search_by_text`].
    ///
    /// # Errors
    ///
    /// - `MediscanError::RecognitionFailed` if no text can be extracted
    /// - `MediscanError::NotFound` propagated from the text stage
    ///
    /// [`search_by_text`]: LookupService::search_by_text
    async fn identify_from_image(&self, image: &EncodedImage) -> Result<MedicationRecord>;
}
