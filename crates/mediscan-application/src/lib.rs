//! Application layer for MediScan.
//!
//! Coordinates the core seams and the infrastructure backends into an
//! interaction session: navigation, lookups, camera and voice input, and
//! the announcements that go with them.

pub mod accessibility;
pub mod interaction_session;
pub mod session;

pub use accessibility::AccessibilityPreferences;
pub use interaction_session::{InteractionSession, Tab, View};
pub use session::{LookupKind, LookupOutcome, SessionFactory, SessionStore};
