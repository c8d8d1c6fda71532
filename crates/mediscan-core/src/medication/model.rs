//! Medication record domain model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MediscanError, Result};

/// A single medication entry as presented to the user.
///
/// Records are immutable once constructed and are sourced from a
/// [`MedicationCatalog`](super::MedicationCatalog). Every display field is
/// expected to be non-empty; the identifier must be unique within its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicationRecord {
    /// Catalog-unique identifier
    pub id: String,
    /// Brand or display name, used for matching
    pub name: String,
    pub generic_name: String,
    pub dosage: String,
    pub purpose: String,
    /// Usage instructions
    pub usage: String,
    pub side_effects: String,
    pub warnings: String,
    pub expiry_date: NaiveDate,
    pub manufacturer: String,
}

impl MedicationRecord {
    /// Checks that every display field is non-empty.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("id", &self.id),
            ("name", &self.name),
            ("generic_name", &self.generic_name),
            ("dosage", &self.dosage),
            ("purpose", &self.purpose),
            ("usage", &self.usage),
            ("side_effects", &self.side_effects),
            ("warnings", &self.warnings),
            ("manufacturer", &self.manufacturer),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(MediscanError::internal(format!(
                    "medication record '{}' has an empty {} field",
                    self.id, field
                )));
            }
        }
        Ok(())
    }

    /// Expiry date in long en-US form, e.g. `December 31, 2025`.
    pub fn expiry_display(&self) -> String {
        self.expiry_date.format("%B %-d, %Y").to_string()
    }

    /// The spoken summary announced when this record is shown.
    pub fn announcement(&self) -> String {
        format!(
            "Medication found: {}, {}. Generic name: {}. Purpose: {}. Usage: {} Side effects: {}. Warnings: {} Expiry date: {}.",
            self.name,
            self.dosage,
            self.generic_name,
            self.purpose,
            self.usage,
            self.side_effects,
            self.warnings,
            self.expiry_display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MedicationRecord {
        MedicationRecord {
            id: "1".to_string(),
            name: "Aspirin".to_string(),
            generic_name: "Acetylsalicylic acid".to_string(),
            dosage: "325mg".to_string(),
            purpose: "Pain reliever, fever reducer".to_string(),
            usage: "Take 1-2 tablets every 4-6 hours as needed.".to_string(),
            side_effects: "Stomach upset, heartburn".to_string(),
            warnings: "Do not use if allergic to aspirin.".to_string(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            manufacturer: "Bayer".to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_field() {
        let mut record = sample();
        record.warnings = "   ".to_string();
        let err = record.validate().unwrap_err();
        assert!(err.to_string().contains("warnings"));
    }

    #[test]
    fn test_expiry_display() {
        assert_eq!(sample().expiry_display(), "December 31, 2025");
    }

    #[test]
    fn test_announcement_mentions_key_fields() {
        let text = sample().announcement();
        assert!(text.starts_with("Medication found: Aspirin, 325mg."));
        assert!(text.contains("Generic name: Acetylsalicylic acid."));
        assert!(text.ends_with("Expiry date: December 31, 2025."));
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["genericName"], "Acetylsalicylic acid");
        assert_eq!(json["expiryDate"], "2025-12-31");
        assert_eq!(json["sideEffects"], "Stomach upset, heartburn");
    }
}
