//! Scoped ownership of one active camera stream.

use std::sync::{Arc, Mutex};

use super::device::MediaStream;
use super::manager::{CameraPhase, lock_phase};
use crate::error::{MediscanError, Result};
use crate::image::EncodedImage;

/// Lifecycle of a single capture session object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Active,
    /// Terminal; a fresh acquire is required to resume
    Stopped,
}

/// One acquired camera stream.
///
/// Produced by [`CameraManager::acquire`](super::CameraManager::acquire).
/// The stream is stopped by [`release`](Self::release) or, failing that,
/// when the session is dropped.
pub struct CaptureSession {
    id: u64,
    stream: Option<Box<dyn MediaStream>>,
    manager_phase: Arc<Mutex<CameraPhase>>,
}

impl CaptureSession {
    pub(super) fn new(
        id: u64,
        stream: Box<dyn MediaStream>,
        manager_phase: Arc<Mutex<CameraPhase>>,
    ) -> Self {
        Self {
            id,
            stream: Some(stream),
            manager_phase,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn phase(&self) -> SessionPhase {
        if self.stream.is_some() {
            SessionPhase::Active
        } else {
            SessionPhase::Stopped
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase() == SessionPhase::Active
    }

    /// Samples the current frame into a still image.
    ///
    /// # Errors
    ///
    /// Returns `MediscanError::InvalidState` once the session is stopped.
    pub fn capture_frame(&mut self) -> Result<EncodedImage> {
        let stream = self.stream.as_mut().ok_or_else(|| {
            MediscanError::invalid_state("cannot capture a frame from a stopped camera session")
        })?;
        let image = stream.grab_still()?;
        tracing::debug!(session = self.id, bytes = image.bytes().len(), "Frame captured");
        Ok(image)
    }

    /// Stops every track of the stream. Safe to call any number of times.
    pub fn release(&mut self) {
        let Some(mut stream) = self.stream.take() else {
            return;
        };
        stream.stop_all_tracks();

        let mut phase = lock_phase(&self.manager_phase);
        if *phase == CameraPhase::Active(self.id) {
            *phase = CameraPhase::Idle;
        }
        tracing::info!(session = self.id, "Camera session released");
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for CaptureSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaptureSession")
            .field("id", &self.id)
            .field("phase", &self.phase())
            .finish()
    }
}
