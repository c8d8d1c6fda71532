//! Interaction flow of one MediScan session.
//!
//! `InteractionSession` is the collaborator that drives the core: it owns the
//! tab and view state, the camera session while camera mode is on, and the
//! announcements made through speech. Every core failure is converted here
//! into a spoken (and visible) notice; nothing escapes as an error.

use std::sync::Arc;

use mediscan_core::camera::{CameraManager, CaptureConstraints, CaptureSession};
use mediscan_core::config::{FontSize, MediscanConfig};
use mediscan_core::platform::{Capabilities, Platform};
use mediscan_core::session_state::SessionState;
use mediscan_core::speech::SpeechOutput;
use mediscan_core::voice::VoiceRecognizer;
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

use crate::accessibility::AccessibilityPreferences;
use crate::session::{LookupOutcome, SessionStore};

pub const WELCOME: &str = "Welcome to MediScan, your AI medication identifier for visually impaired users. Press the Start button to begin scanning or searching for medications.";
pub const STARTING: &str = "Starting MediScan. Please wait.";
pub const SCAN_PROMPT: &str =
    "Medication scan page. You can search by text or take a photo of your medication.";
pub const ENTER_NAME: &str = "Please enter a medication name";
pub const CAMERA_ACTIVATED: &str =
    "Camera activated. Point your camera at the medication and capture when ready.";
pub const CAMERA_FAILED: &str = "Failed to start camera. Please check permissions and try again.";
pub const CAMERA_DEACTIVATED: &str = "Camera deactivated";
pub const CAPTURING: &str = "Capturing image. Please hold still.";
pub const CAPTURE_FAILED: &str = "Failed to capture image. Please try again.";
pub const PROCESSING_IMAGE: &str = "Processing image to identify medication. Please wait.";
pub const VOICE_UNSUPPORTED: &str = "Voice recognition is not supported on this device";
pub const LISTENING: &str = "Listening for medication name. Please speak clearly.";
pub const VOICE_FAILED: &str = "Error occurred in voice recognition. Please try again.";
pub const CONTROLS_OPENED: &str = "Accessibility controls opened";
pub const PAGE_NOT_FOUND: &str =
    "Page not found. We could not find the page you were looking for.";

/// Input mode on the scan view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    Search,
    Camera,
}

/// The screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum View {
    Landing,
    Scan,
    Results,
    NotFound,
}

pub struct InteractionSession {
    id: Uuid,
    store: Arc<SessionStore>,
    speech: SpeechOutput,
    camera: Option<CameraManager>,
    voice: Option<Arc<dyn VoiceRecognizer>>,
    voice_language: String,
    capabilities: Capabilities,
    accessibility: AccessibilityPreferences,
    view: View,
    active_tab: Tab,
    query: String,
    capture: Option<CaptureSession>,
    listening: bool,
    last_notice: Option<String>,
}

impl InteractionSession {
    /// Starts a session. Capabilities are probed once here and cached.
    pub fn new(store: Arc<SessionStore>, platform: &Platform, config: &MediscanConfig) -> Self {
        let capabilities = platform.probe();
        let speech = SpeechOutput::new(platform.speech.clone(), config.speech.clone());
        if !speech.is_supported() {
            tracing::warn!("Speech output unavailable, announcements are visible only");
        }

        let camera = platform.camera.clone().map(|device| {
            CameraManager::new(device, CaptureConstraints::from(&config.camera))
        });

        let id = Uuid::new_v4();
        tracing::info!(session = %id, ?capabilities, "Interaction session started");

        Self {
            id,
            store,
            speech,
            camera,
            voice: platform.voice.clone(),
            voice_language: config.voice.language.clone(),
            capabilities,
            accessibility: AccessibilityPreferences::from(&config.accessibility),
            view: View::Landing,
            active_tab: Tab::Search,
            query: String::new(),
            capture: None,
            listening: false,
            last_notice: None,
        }
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.store.snapshot()
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn speech(&self) -> &SpeechOutput {
        &self.speech
    }

    pub fn accessibility(&self) -> AccessibilityPreferences {
        self.accessibility
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_camera_active(&self) -> bool {
        self.capture.as_ref().is_some_and(CaptureSession::is_active)
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// The most recent announcement, for visible-only rendering.
    pub fn last_notice(&self) -> Option<&str> {
        self.last_notice.as_deref()
    }

    // ============================================================================
    // Navigation
    // ============================================================================

    pub fn open_landing(&mut self) {
        self.release_camera();
        self.view = View::Landing;
        self.announce(WELCOME);
    }

    /// Moves to the scan view. Leaving the landing view announces the start
    /// before the scan prompt.
    pub fn start_scan(&mut self) {
        if self.view == View::Landing {
            self.announce(STARTING);
        }
        self.view = View::Scan;
        self.announce(SCAN_PROMPT);
    }

    /// Leaves the results view, clearing the shown outcome.
    pub fn back_to_scan(&mut self) {
        self.store.clear();
        self.start_scan();
    }

    pub fn open_unknown_page(&mut self) {
        self.release_camera();
        self.view = View::NotFound;
        self.announce(PAGE_NOT_FOUND);
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab != Tab::Camera {
            self.release_camera();
        }
        self.active_tab = tab;
        self.announce(match tab {
            Tab::Search => "Text search mode activated",
            Tab::Camera => "Camera mode activated",
        });
    }

    // ============================================================================
    // Text search
    // ============================================================================

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Runs a text search for the current query.
    ///
    /// Returns `None` when the query is blank; the user is prompted instead
    /// and no lookup starts.
    pub async fn submit_search(&mut self) -> Option<LookupOutcome> {
        if self.query.trim().is_empty() {
            self.announce(ENTER_NAME);
            return None;
        }

        let query = self.query.clone();
        self.announce(&format!("Searching for {query}"));

        match self.store.search_by_text(&query).await {
            Ok(outcome) => {
                self.apply_outcome(&outcome);
                Some(outcome)
            }
            Err(err) => {
                self.announce(&err.to_string());
                None
            }
        }
    }

    // ============================================================================
    // Camera
    // ============================================================================

    /// Turns camera mode on or off. Returns whether the camera is now active.
    pub async fn toggle_camera(&mut self) -> bool {
        if self.is_camera_active() {
            self.release_camera();
            self.announce(CAMERA_DEACTIVATED);
            return false;
        }

        self.active_tab = Tab::Camera;
        let Some(manager) = &self.camera else {
            tracing::warn!(session = %self.id, "Camera requested but no capture device exists");
            self.announce(CAMERA_FAILED);
            return false;
        };

        match manager.acquire().await {
            Ok(capture) => {
                self.capture = Some(capture);
                self.announce(CAMERA_ACTIVATED);
                true
            }
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "Failed to start camera");
                self.announce(CAMERA_FAILED);
                false
            }
        }
    }

    /// Captures a still, turns the camera off, and identifies the image.
    ///
    /// Returns `None` when camera mode is off or the frame could not be read.
    pub async fn capture_image(&mut self) -> Option<LookupOutcome> {
        let mut capture = self.capture.take().filter(CaptureSession::is_active)?;

        self.announce(CAPTURING);
        let frame = capture.capture_frame();
        capture.release();

        let image = match frame {
            Ok(image) => image,
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "Frame capture failed");
                self.announce(CAPTURE_FAILED);
                return None;
            }
        };

        self.announce(PROCESSING_IMAGE);
        let outcome = self.store.identify_from_image(&image).await;
        self.apply_outcome(&outcome);
        Some(outcome)
    }

    fn release_camera(&mut self) {
        if let Some(mut capture) = self.capture.take() {
            capture.release();
        }
    }

    // ============================================================================
    // Voice input
    // ============================================================================

    /// Fills the query from one-shot voice recognition.
    pub async fn listen_for_query(&mut self) -> Option<String> {
        let Some(voice) = self.voice.clone() else {
            self.announce(VOICE_UNSUPPORTED);
            return None;
        };

        self.listening = true;
        self.announce(LISTENING);
        let heard = voice.listen_once(&self.voice_language).await;
        self.listening = false;

        match heard {
            Ok(transcript) => {
                self.announce(&format!("You said: {transcript}"));
                self.query = transcript.clone();
                Some(transcript)
            }
            Err(err) => {
                tracing::warn!(session = %self.id, error = %err, "Voice recognition failed");
                self.announce(VOICE_FAILED);
                None
            }
        }
    }

    // ============================================================================
    // Accessibility controls
    // ============================================================================

    pub fn open_accessibility_controls(&mut self) {
        self.announce(CONTROLS_OPENED);
    }

    pub fn toggle_high_contrast(&mut self) {
        let message = self.accessibility.toggle_high_contrast();
        self.announce(message);
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        let message = self.accessibility.set_font_size(size);
        self.announce(&message);
    }

    // ============================================================================
    // Lifecycle
    // ============================================================================

    /// Releases the camera and silences speech.
    pub fn teardown(&mut self) {
        self.release_camera();
        self.speech.stop_speaking();
        tracing::info!(session = %self.id, "Interaction session ended");
    }

    fn apply_outcome(&mut self, outcome: &LookupOutcome) {
        match outcome {
            LookupOutcome::Found(record) => {
                self.view = View::Results;
                self.announce(&record.announcement());
            }
            LookupOutcome::Failed { message, .. } => {
                self.announce(&format!("Error: {message}"));
            }
            LookupOutcome::Stale => {}
        }
    }

    fn announce(&mut self, message: &str) {
        tracing::debug!(session = %self.id, message, "Announcement");
        self.speech.speak(message);
        self.last_notice = Some(message.to_string());
    }
}

impl Drop for InteractionSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
