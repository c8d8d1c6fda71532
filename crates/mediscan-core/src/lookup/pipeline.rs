//! Catalog-backed lookup pipeline.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use super::recognizer::TextRecognizer;
use super::service::LookupService;
use crate::config::LookupSettings;
use crate::error::{MediscanError, Result};
use crate::image::EncodedImage;
use crate::medication::{MedicationCatalog, MedicationRecord};

/// Lookup service that matches against a [`MedicationCatalog`] and uses a
/// [`TextRecognizer`] for the image path.
///
/// Both the catalog and the recognizer are trait objects, so the stub
/// backends and a real remote backend are interchangeable.
pub struct CatalogLookupService {
    catalog: Arc<dyn MedicationCatalog>,
    recognizer: Arc<dyn TextRecognizer>,
    search_latency: Duration,
    recognition_latency: Duration,
}

impl CatalogLookupService {
    /// Creates a new lookup service.
    ///
    /// # Arguments
    ///
    /// * `catalog` - Table the text stage matches against
    /// * `recognizer` - OCR stage for the image path
    /// * `settings` - Simulated latency for each stage
    pub fn new(
        catalog: Arc<dyn MedicationCatalog>,
        recognizer: Arc<dyn TextRecognizer>,
        settings: &LookupSettings,
    ) -> Self {
        Self {
            catalog,
            recognizer,
            search_latency: Duration::from_millis(settings.search_latency_ms),
            recognition_latency: Duration::from_millis(settings.recognition_latency_ms),
        }
    }

    /// Exact identifier lookup, bypassing the name matching policy.
    pub fn find_by_id(&self, id: &str) -> Result<MedicationRecord> {
        self.catalog
            .find_by_id(id)
            .ok_or_else(|| MediscanError::not_found(id))
    }

    async fn simulate(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl LookupService for CatalogLookupService {
    async fn search_by_text(&self, query: &str) -> Result<MedicationRecord> {
        let query = query.trim();
        if query.is_empty() {
            return Err(MediscanError::Empty);
        }

        Self::simulate(self.search_latency).await;

        match self.catalog.find_by_name(query) {
            Some(record) => {
                tracing::info!(query, id = %record.id, "Medication matched");
                Ok(record)
            }
            None => {
                tracing::info!(query, "No medication matched");
                Err(MediscanError::not_found(query))
            }
        }
    }

    async fn identify_from_image(&self, image: &EncodedImage) -> Result<MedicationRecord> {
        Self::simulate(self.recognition_latency).await;

        let text = self.recognizer.recognize(image).await?;
        let Some(first_line) = text.lines().map(str::trim).find(|line| !line.is_empty()) else {
            return Err(MediscanError::recognition_failed(
                "no text could be read from the image",
            ));
        };
        tracing::debug!(recognized = first_line, "Text recognized from image");

        // The full label text is matched, not only the first line.
        match self.search_by_text(&text).await {
            Err(MediscanError::Empty) => Err(MediscanError::recognition_failed(
                "no text could be read from the image",
            )),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(id: &str, name: &str) -> MedicationRecord {
        MedicationRecord {
            id: id.to_string(),
            name: name.to_string(),
            generic_name: name.to_string(),
            dosage: "10mg".to_string(),
            purpose: "Testing".to_string(),
            usage: "Daily".to_string(),
            side_effects: "None".to_string(),
            warnings: "None".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
            manufacturer: "Acme".to_string(),
        }
    }

    struct TestCatalog(Vec<MedicationRecord>);

    impl MedicationCatalog for TestCatalog {
        fn records(&self) -> &[MedicationRecord] {
            &self.0
        }
    }

    // Mock recognizer that echoes the image bytes as UTF-8 text
    struct EchoRecognizer;

    #[async_trait]
    impl TextRecognizer for EchoRecognizer {
        async fn recognize(&self, image: &EncodedImage) -> Result<String> {
            if image.is_empty() {
                return Err(MediscanError::recognition_failed("empty image"));
            }
            Ok(String::from_utf8_lossy(image.bytes()).into_owned())
        }
    }

    fn service(settings: &LookupSettings) -> CatalogLookupService {
        CatalogLookupService::new(
            Arc::new(TestCatalog(vec![record("1", "Aspirin"), record("2", "Lisinopril")])),
            Arc::new(EchoRecognizer),
            settings,
        )
    }

    #[tokio::test]
    async fn test_search_trims_and_matches() {
        let service = service(&LookupSettings::immediate());
        let found = service.search_by_text("  Lisinopril 10mg  ").await.unwrap();
        assert_eq!(found.id, "2");
    }

    #[tokio::test]
    async fn test_search_blank_is_empty() {
        let service = service(&LookupSettings::immediate());
        assert_eq!(service.search_by_text("   ").await, Err(MediscanError::Empty));
        assert_eq!(service.search_by_text("").await, Err(MediscanError::Empty));
    }

    #[tokio::test]
    async fn test_search_unknown_is_not_found() {
        let service = service(&LookupSettings::immediate());
        let err = service.search_by_text("ibuprofen").await.unwrap_err();
        assert_eq!(err, MediscanError::not_found("ibuprofen"));
    }

    #[tokio::test]
    async fn test_image_path_delegates_to_text_stage() {
        let service = service(&LookupSettings::immediate());
        let image = EncodedImage::jpeg(b"ASPIRIN 325mg\nPain Reliever".to_vec());
        let found = service.identify_from_image(&image).await.unwrap();
        assert_eq!(found.name, "Aspirin");
    }

    #[tokio::test]
    async fn test_image_path_propagates_not_found() {
        let service = service(&LookupSettings::immediate());
        let image = EncodedImage::jpeg(b"Metformin 500mg".to_vec());
        let err = service.identify_from_image(&image).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_image_path_recognition_failures() {
        let service = service(&LookupSettings::immediate());
        let err = service
            .identify_from_image(&EncodedImage::jpeg(Vec::new()))
            .await
            .unwrap_err();
        assert!(err.is_recognition_failed());

        let err = service
            .identify_from_image(&EncodedImage::jpeg(b"   \n".to_vec()))
            .await
            .unwrap_err();
        assert!(err.is_recognition_failed());
    }

    #[tokio::test]
    async fn test_image_path_skips_leading_blank_lines() {
        let service = service(&LookupSettings::immediate());
        let image = EncodedImage::jpeg(b"\n  \nAspirin 325mg".to_vec());
        let found = service.identify_from_image(&image).await.unwrap();
        assert_eq!(found.id, "1");
    }

    #[tokio::test]
    async fn test_search_is_deterministic() {
        let service = service(&LookupSettings::immediate());
        let first = service.search_by_text("lisinopril").await;
        let missing = service.search_by_text("zinc").await;
        for _ in 0..5 {
            assert_eq!(service.search_by_text("lisinopril").await, first);
            assert_eq!(service.search_by_text("zinc").await, missing);
        }
        assert_eq!(first.unwrap().id, "2");
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_latency_is_applied() {
        let service = service(&LookupSettings::default());
        let started = tokio::time::Instant::now();
        service.search_by_text("aspirin").await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(1000));

        let started = tokio::time::Instant::now();
        service
            .identify_from_image(&EncodedImage::jpeg(b"aspirin".to_vec()))
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(2500));
    }

    #[test]
    fn test_find_by_id() {
        let service = service(&LookupSettings::immediate());
        assert_eq!(service.find_by_id("1").unwrap().name, "Aspirin");
        assert!(service.find_by_id("9").unwrap_err().is_not_found());
    }
}
