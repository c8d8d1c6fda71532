//! Session state container.
//!
//! `SessionStore` owns the result / loading / error triple of one interaction
//! session and runs lookups against a [`LookupService`]. Each lookup is tagged
//! with a request token; only the most recently issued lookup may write its
//! completion, so a slow earlier request can never overwrite a newer one.
//! A lookup whose future is dropped before completing clears `loading` if it
//! was still the latest.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use mediscan_core::error::{MediscanError, Result};
use mediscan_core::image::EncodedImage;
use mediscan_core::lookup::LookupService;
use mediscan_core::medication::MedicationRecord;
use mediscan_core::session_state::SessionState;
use tokio::sync::watch;

/// Which lookup entry point produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Text,
    Image,
}

impl LookupKind {
    /// User-facing message stored in `SessionState::error` on failure.
    pub fn failure_message(&self) -> &'static str {
        match self {
            LookupKind::Text => "Failed to find medication. Please try again.",
            LookupKind::Image => {
                "Failed to identify medication from image. Please try again or use text search."
            }
        }
    }
}

/// What a lookup did to the session state.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The record was stored as the result.
    Found(MedicationRecord),
    /// The failure message was stored as the error.
    Failed { message: String, cause: MediscanError },
    /// A newer lookup was issued meanwhile; the completion was discarded.
    Stale,
}

pub struct SessionStore {
    lookup: Arc<dyn LookupService>,
    state: watch::Sender<SessionState>,
    latest_token: AtomicU64,
}

impl SessionStore {
    pub fn new(lookup: Arc<dyn LookupService>) -> Self {
        let (state, _) = watch::channel(SessionState::default());
        Self {
            lookup,
            state,
            latest_token: AtomicU64::new(0),
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every state update.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Searches by medication name.
    ///
    /// # Errors
    ///
    /// Returns `MediscanError::Empty` for a blank query, without touching
    /// the state. Lookup failures are not errors here; they are recorded in
    /// the state and reported as [`LookupOutcome::Failed`].
    pub async fn search_by_text(&self, query: &str) -> Result<LookupOutcome> {
        if query.trim().is_empty() {
            return Err(MediscanError::Empty);
        }

        let pending = self.begin(LookupKind::Text);
        let outcome = self.lookup.search_by_text(query).await;
        Ok(pending.complete(outcome))
    }

    /// Identifies a medication from a captured image.
    pub async fn identify_from_image(&self, image: &EncodedImage) -> LookupOutcome {
        let pending = self.begin(LookupKind::Image);
        let outcome = self.lookup.identify_from_image(image).await;
        pending.complete(outcome)
    }

    /// Resets result and error; `loading` is left as is.
    pub fn clear(&self) {
        self.state.send_if_modified(|state| {
            let changed = state.result.is_some() || state.error.is_some();
            state.result = None;
            state.error = None;
            changed
        });
    }

    fn begin(&self, kind: LookupKind) -> PendingLookup<'_> {
        let mut token = 0;
        self.state.send_modify(|state| {
            token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;
            state.result = None;
            state.error = None;
            state.loading = true;
        });
        tracing::debug!(token, ?kind, "Lookup started");
        PendingLookup {
            store: self,
            token,
            kind,
            armed: true,
        }
    }

    fn abandon(&self, token: u64, kind: LookupKind) {
        let cleared = self.state.send_if_modified(|state| {
            if self.latest_token.load(Ordering::SeqCst) != token || !state.loading {
                return false;
            }
            state.loading = false;
            true
        });
        if cleared {
            tracing::warn!(token, ?kind, "Lookup dropped before completion");
        }
    }

    fn complete(
        &self,
        token: u64,
        kind: LookupKind,
        outcome: Result<MedicationRecord>,
    ) -> LookupOutcome {
        let applied = self.state.send_if_modified(|state| {
            if self.latest_token.load(Ordering::SeqCst) != token {
                return false;
            }
            match &outcome {
                Ok(record) => {
                    state.result = Some(record.clone());
                    state.error = None;
                }
                Err(_) => {
                    state.result = None;
                    state.error = Some(kind.failure_message().to_string());
                }
            }
            state.loading = false;
            true
        });

        if !applied {
            tracing::warn!(token, ?kind, "Discarding stale lookup completion");
            return LookupOutcome::Stale;
        }

        match outcome {
            Ok(record) => {
                tracing::info!(token, ?kind, id = %record.id, "Lookup succeeded");
                LookupOutcome::Found(record)
            }
            Err(cause) => {
                tracing::info!(token, ?kind, error = %cause, "Lookup failed");
                LookupOutcome::Failed {
                    message: kind.failure_message().to_string(),
                    cause,
                }
            }
        }
    }
}

/// An issued lookup that has not written its completion yet.
///
/// Dropping it without [`complete`](Self::complete) abandons the lookup.
struct PendingLookup<'a> {
    store: &'a SessionStore,
    token: u64,
    kind: LookupKind,
    armed: bool,
}

impl PendingLookup<'_> {
    fn complete(mut self, outcome: Result<MedicationRecord>) -> LookupOutcome {
        self.armed = false;
        self.store.complete(self.token, self.kind, outcome)
    }
}

impl Drop for PendingLookup<'_> {
    fn drop(&mut self) {
        if self.armed {
            self.store.abandon(self.token, self.kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediscan_core::config::LookupSettings;
    use mediscan_core::lookup::CatalogLookupService;
    use mediscan_infrastructure::{HashTextRecognizer, StaticMedicationCatalog};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn catalog_lookup(settings: &LookupSettings) -> CatalogLookupService {
        CatalogLookupService::new(
            Arc::new(StaticMedicationCatalog::reference()),
            Arc::new(HashTextRecognizer),
            settings,
        )
    }

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(catalog_lookup(&LookupSettings::immediate())))
    }

    // Mock lookup holding every text search until the gate opens
    struct GatedLookup {
        inner: CatalogLookupService,
        entered: Notify,
        gate: Notify,
    }

    #[async_trait::async_trait]
    impl LookupService for GatedLookup {
        async fn search_by_text(&self, query: &str) -> Result<MedicationRecord> {
            self.entered.notify_one();
            self.gate.notified().await;
            self.inner.search_by_text(query).await
        }

        async fn identify_from_image(&self, image: &EncodedImage) -> Result<MedicationRecord> {
            self.inner.identify_from_image(image).await
        }
    }

    fn gated() -> Arc<GatedLookup> {
        Arc::new(GatedLookup {
            inner: catalog_lookup(&LookupSettings::immediate()),
            entered: Notify::new(),
            gate: Notify::new(),
        })
    }

    #[tokio::test]
    async fn test_initial_state_is_clean() {
        assert!(store().snapshot().is_clean());
    }

    #[tokio::test]
    async fn test_blank_query_never_sets_loading() {
        let store = store();
        let mut updates = store.subscribe();

        assert_eq!(store.search_by_text("   ").await, Err(MediscanError::Empty));
        assert!(store.snapshot().is_clean());
        assert!(!updates.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_success_sets_result_only() {
        let store = store();
        let outcome = store.search_by_text("Aspirin").await.unwrap();

        assert!(matches!(outcome, LookupOutcome::Found(ref r) if r.name == "Aspirin"));
        let state = store.snapshot();
        assert!(state.is_settled());
        assert_eq!(state.result.unwrap().id, "1");
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_failure_sets_error_only() {
        let store = store();
        let outcome = store.search_by_text("ibuprofen").await.unwrap();

        assert!(matches!(outcome, LookupOutcome::Failed { ref cause, .. } if cause.is_not_found()));
        let state = store.snapshot();
        assert!(state.is_settled());
        assert!(state.result.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to find medication. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_new_lookup_clears_previous_outcome() {
        let store = store();
        store.search_by_text("zinc").await.unwrap();
        assert!(store.snapshot().error.is_some());

        store.search_by_text("lisinopril").await.unwrap();
        let state = store.snapshot();
        assert!(state.error.is_none());
        assert_eq!(state.result.unwrap().name, "Lisinopril");
    }

    #[tokio::test]
    async fn test_in_flight_lookup_shows_only_loading() {
        let lookup = gated();
        let store = Arc::new(SessionStore::new(lookup.clone()));

        let first = tokio::spawn({
            let store = store.clone();
            async move { store.search_by_text("zinc").await }
        });
        lookup.entered.notified().await;
        lookup.gate.notify_one();
        first.await.unwrap().unwrap();
        assert!(store.snapshot().error.is_some());

        let second = tokio::spawn({
            let store = store.clone();
            async move { store.search_by_text("aspirin").await }
        });
        lookup.entered.notified().await;
        assert_eq!(
            store.snapshot(),
            SessionState {
                result: None,
                loading: true,
                error: None,
            }
        );

        lookup.gate.notify_one();
        second.await.unwrap().unwrap();
        assert!(store.snapshot().is_settled());
    }

    #[tokio::test]
    async fn test_timed_out_lookup_clears_loading() {
        let store = SessionStore::new(Arc::new(catalog_lookup(&LookupSettings::default())));

        let timed_out =
            tokio::time::timeout(Duration::from_millis(10), store.search_by_text("aspirin")).await;

        assert!(timed_out.is_err());
        assert!(store.snapshot().is_clean());
    }

    #[tokio::test]
    async fn test_dropping_superseded_lookup_keeps_loading() {
        let lookup = gated();
        let store = Arc::new(SessionStore::new(lookup.clone()));

        let older = tokio::spawn({
            let store = store.clone();
            async move { store.search_by_text("aspirin").await }
        });
        lookup.entered.notified().await;
        let newer = tokio::spawn({
            let store = store.clone();
            async move { store.search_by_text("lisinopril").await }
        });
        lookup.entered.notified().await;

        older.abort();
        assert!(older.await.unwrap_err().is_cancelled());
        assert!(store.is_loading());

        lookup.gate.notify_one();
        let outcome = newer.await.unwrap().unwrap();
        assert!(matches!(outcome, LookupOutcome::Found(ref r) if r.name == "Lisinopril"));
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_image_failure_uses_image_message() {
        let store = store();
        let outcome = store
            .identify_from_image(&EncodedImage::jpeg(Vec::new()))
            .await;

        assert!(matches!(outcome, LookupOutcome::Failed { ref cause, .. } if cause.is_recognition_failed()));
        assert_eq!(
            store.snapshot().error.as_deref(),
            Some(LookupKind::Image.failure_message())
        );
    }

    #[tokio::test]
    async fn test_clear_resets_outcome() {
        let store = store();
        store.search_by_text("aspirin").await.unwrap();
        store.clear();
        assert!(store.snapshot().is_clean());
    }
}
