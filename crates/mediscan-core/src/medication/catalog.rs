//! Medication catalog trait.

use super::model::MedicationRecord;

/// A read-only table of medication records.
///
/// The catalog is the backing store of the lookup pipeline. Implementations
/// may be a static in-memory table or a proxy for a remote database, as long
/// as they answer synchronously.
pub trait MedicationCatalog: Send + Sync {
    /// Returns every record in table order.
    fn records(&self) -> &[MedicationRecord];

    /// Finds the first record whose lower-cased name is contained in the
    /// lower-cased query.
    ///
    /// The query is expected to be trimmed and non-empty already.
    fn find_by_name(&self, query: &str) -> Option<MedicationRecord> {
        first_name_match(self.records(), query).cloned()
    }

    /// Finds a record by its exact identifier.
    fn find_by_id(&self, id: &str) -> Option<MedicationRecord> {
        self.records().iter().find(|record| record.id == id).cloned()
    }
}

/// Substring matching policy shared by catalog implementations.
///
/// First match in table order wins; there is no ranking.
pub fn first_name_match<'a>(
    records: &'a [MedicationRecord],
    query: &str,
) -> Option<&'a MedicationRecord> {
    let normalized = query.to_lowercase();
    records
        .iter()
        .find(|record| normalized.contains(&record.name.to_lowercase()))
}
