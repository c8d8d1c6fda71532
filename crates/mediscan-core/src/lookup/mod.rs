//! Medication lookup: text matching and image identification.
//!
//! - `service`: The `LookupService` trait consumed by the session store
//! - `recognizer`: The `TextRecognizer` OCR seam
//! - `pipeline`: `CatalogLookupService`, the catalog-backed implementation

mod pipeline;
mod recognizer;
mod service;

pub use pipeline::CatalogLookupService;
pub use recognizer::TextRecognizer;
pub use service::LookupService;
