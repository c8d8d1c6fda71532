//! Domain types and platform seams for a MediScan interaction session.
//!
//! This crate owns the medication model, the lookup pipeline, the camera
//! capture lifecycle and the speech output adapter. Concrete backends live in
//! `mediscan-infrastructure`; session orchestration lives in
//! `mediscan-application`.

pub mod camera;
pub mod config;
pub mod error;
pub mod image;
pub mod lookup;
pub mod medication;
pub mod platform;
pub mod session_state;
pub mod speech;
pub mod voice;

// Re-export common types
pub use error::{MediscanError, Result};
pub use image::{EncodedImage, ImageFormat};
pub use medication::MedicationRecord;
pub use session_state::SessionState;
