use std::sync::Arc;

use mediscan_core::config::MediscanConfig;
use mediscan_core::lookup::{CatalogLookupService, LookupService, TextRecognizer};
use mediscan_core::medication::MedicationCatalog;
use mediscan_core::platform::Platform;
use mediscan_infrastructure::{HashTextRecognizer, StaticMedicationCatalog};

use super::store::SessionStore;
use crate::interaction_session::InteractionSession;

/// Factory for creating `InteractionSession` instances.
///
/// Holds the lookup strategy and the platform backends so that each new
/// session gets a fresh `SessionStore` wired to the same collaborators.
pub struct SessionFactory {
    config: MediscanConfig,
    platform: Platform,
    catalog: Arc<dyn MedicationCatalog>,
    recognizer: Arc<dyn TextRecognizer>,
    /// Replaces the catalog pipeline entirely when set
    lookup_override: Option<Arc<dyn LookupService>>,
}

impl SessionFactory {
    /// Creates a factory using the built-in reference catalog and the
    /// hash-based recognizer.
    pub fn new(config: MediscanConfig, platform: Platform) -> Self {
        Self {
            config,
            platform,
            catalog: Arc::new(StaticMedicationCatalog::reference()),
            recognizer: Arc::new(HashTextRecognizer),
            lookup_override: None,
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn MedicationCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn TextRecognizer>) -> Self {
        self.recognizer = recognizer;
        self
    }

    pub fn with_lookup_service(mut self, lookup: Arc<dyn LookupService>) -> Self {
        self.lookup_override = Some(lookup);
        self
    }

    pub fn config(&self) -> &MediscanConfig {
        &self.config
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The lookup service each new session's store runs against.
    pub fn lookup_service(&self) -> Arc<dyn LookupService> {
        match &self.lookup_override {
            Some(lookup) => lookup.clone(),
            None => Arc::new(CatalogLookupService::new(
                self.catalog.clone(),
                self.recognizer.clone(),
                &self.config.lookup,
            )),
        }
    }

    /// Creates a new interaction session on the landing view.
    pub fn create_session(&self) -> InteractionSession {
        let store = Arc::new(SessionStore::new(self.lookup_service()));
        InteractionSession::new(store, &self.platform, &self.config)
    }
}
