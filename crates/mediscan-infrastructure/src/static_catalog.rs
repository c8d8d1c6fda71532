//! Static in-memory medication catalog.

use std::collections::HashSet;

use chrono::NaiveDate;
use mediscan_core::error::{MediscanError, Result};
use mediscan_core::medication::{MedicationCatalog, MedicationRecord};

/// A fixed table of medication records.
#[derive(Debug, Clone)]
pub struct StaticMedicationCatalog {
    records: Vec<MedicationRecord>,
}

impl StaticMedicationCatalog {
    /// Builds a catalog, validating every record and identifier uniqueness.
    pub fn new(records: Vec<MedicationRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            record.validate()?;
            if !seen.insert(record.id.as_str()) {
                return Err(MediscanError::internal(format!(
                    "duplicate medication id '{}'",
                    record.id
                )));
            }
        }
        Ok(Self { records })
    }

    /// The two-entry reference table (Aspirin, Lisinopril).
    pub fn reference() -> Self {
        Self {
            records: vec![
                MedicationRecord {
                    id: "1".to_string(),
                    name: "Aspirin".to_string(),
                    generic_name: "Acetylsalicylic acid".to_string(),
                    dosage: "325mg".to_string(),
                    purpose: "Pain reliever, fever reducer".to_string(),
                    usage: "Take 1-2 tablets every 4-6 hours as needed. Do not exceed 12 tablets in 24 hours.".to_string(),
                    side_effects: "Stomach upset, heartburn, nausea, vomiting, stomach bleeding".to_string(),
                    warnings: "Do not use if allergic to aspirin or NSAIDs. Consult doctor if pregnant or breastfeeding.".to_string(),
                    expiry_date: date(2025, 12, 31),
                    manufacturer: "Bayer".to_string(),
                },
                MedicationRecord {
                    id: "2".to_string(),
                    name: "Lisinopril".to_string(),
                    generic_name: "Lisinopril".to_string(),
                    dosage: "10mg".to_string(),
                    purpose: "ACE inhibitor, blood pressure medication".to_string(),
                    usage: "Take one tablet daily with or without food.".to_string(),
                    side_effects: "Dizziness, headache, dry cough, increased potassium levels".to_string(),
                    warnings: "Do not use if pregnant. May cause swelling of face, lips, tongue, or throat.".to_string(),
                    expiry_date: date(2024, 8, 15),
                    manufacturer: "Merck".to_string(),
                },
            ],
        }
    }
}

impl Default for StaticMedicationCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl MedicationCatalog for StaticMedicationCatalog {
    fn records(&self) -> &[MedicationRecord] {
        &self.records
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash_text_recognizer::HashTextRecognizer;
    use mediscan_core::config::LookupSettings;
    use mediscan_core::lookup::{CatalogLookupService, LookupService};
    use std::sync::Arc;

    fn reference_lookup() -> CatalogLookupService {
        CatalogLookupService::new(
            Arc::new(StaticMedicationCatalog::reference()),
            Arc::new(HashTextRecognizer),
            &LookupSettings::immediate(),
        )
    }

    #[test]
    fn test_reference_table_is_valid() {
        let reference = StaticMedicationCatalog::reference();
        let rebuilt = StaticMedicationCatalog::new(reference.records().to_vec()).unwrap();
        assert_eq!(rebuilt.records().len(), 2);
    }

    #[test]
    fn test_aspirin_spellings_resolve() {
        let catalog = StaticMedicationCatalog::reference();
        for query in ["ASPIRIN", "aspirin 325", "Aspirin"] {
            let found = catalog.find_by_name(query).unwrap();
            assert_eq!(found.name, "Aspirin", "query {query}");
        }
    }

    #[tokio::test]
    async fn test_lookup_resolves_aspirin_spellings() {
        let lookup = reference_lookup();
        for query in ["ASPIRIN", "aspirin 325", "Aspirin"] {
            let found = lookup.search_by_text(query).await.unwrap();
            assert_eq!(found.id, "1", "query {query}");
        }
        assert!(lookup.search_by_text("ibuprofen").await.unwrap_err().is_not_found());
    }

    #[test]
    fn test_lisinopril_is_merck_10mg() {
        let found = StaticMedicationCatalog::reference()
            .find_by_name("lisinopril")
            .unwrap();
        assert_eq!(found.manufacturer, "Merck");
        assert_eq!(found.dosage, "10mg");
        assert_eq!(found.expiry_display(), "August 15, 2024");
    }

    #[test]
    fn test_unknown_medications_do_not_match() {
        let catalog = StaticMedicationCatalog::reference();
        assert!(catalog.find_by_name("ibuprofen").is_none());
        assert!(catalog.find_by_name("zinc").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let record = StaticMedicationCatalog::reference().records()[0].clone();
        let err = StaticMedicationCatalog::new(vec![record.clone(), record]).unwrap_err();
        assert!(err.to_string().contains("duplicate medication id '1'"));
    }
}
