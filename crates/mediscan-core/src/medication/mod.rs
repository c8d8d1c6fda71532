//! Medication domain module.
//!
//! # Module Structure
//!
//! - `model`: The immutable `MedicationRecord`
//! - `catalog`: The `MedicationCatalog` lookup-table trait
//!
//! # Usage
//!
//! ```ignore
//! use mediscan_core::medication::{MedicationCatalog, MedicationRecord};
//! ```

mod catalog;
mod model;

// Re-export public API
pub use catalog::{MedicationCatalog, first_name_match};
pub use model::MedicationRecord;
