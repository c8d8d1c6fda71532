//! Camera acquisition and serialisation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use super::device::{CaptureConstraints, CaptureDevice};
use super::session::CaptureSession;
use crate::error::{MediscanError, Result};

/// Manager-level camera state.
///
/// `Idle → Acquiring → Active(id)`; a failed or abandoned acquire returns
/// to `Idle`, and releasing the active session returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    Idle,
    Acquiring,
    Active(u64),
}

pub(super) fn lock_phase(phase: &Mutex<CameraPhase>) -> MutexGuard<'_, CameraPhase> {
    phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Hands out at most one [`CaptureSession`] at a time.
pub struct CameraManager {
    device: Arc<dyn CaptureDevice>,
    defaults: CaptureConstraints,
    phase: Arc<Mutex<CameraPhase>>,
    next_id: AtomicU64,
}

impl CameraManager {
    /// Creates a manager for `device`, using `defaults` for [`acquire`](Self::acquire).
    pub fn new(device: Arc<dyn CaptureDevice>, defaults: CaptureConstraints) -> Self {
        Self {
            device,
            defaults,
            phase: Arc::new(Mutex::new(CameraPhase::Idle)),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn phase(&self) -> CameraPhase {
        *lock_phase(&self.phase)
    }

    /// Acquires a stream using the configured default constraints.
    pub async fn acquire(&self) -> Result<CaptureSession> {
        self.acquire_with(self.defaults).await
    }

    /// Acquires a stream matching `constraints` (best effort).
    ///
    /// # Errors
    ///
    /// - `MediscanError::InvalidState` if another acquire is outstanding or a
    ///   session is still active
    /// - `MediscanError::DeviceUnavailable` if the device refuses access
    pub async fn acquire_with(&self, constraints: CaptureConstraints) -> Result<CaptureSession> {
        {
            let mut phase = lock_phase(&self.phase);
            if *phase != CameraPhase::Idle {
                return Err(MediscanError::invalid_state(format!(
                    "camera is busy ({:?})",
                    *phase
                )));
            }
            *phase = CameraPhase::Acquiring;
        }

        let guard = AcquireGuard {
            phase: &self.phase,
            armed: true,
        };

        let stream = match self.device.open_stream(&constraints).await {
            Ok(stream) => stream,
            Err(err) => {
                tracing::warn!(error = %err, "Camera access failed");
                return Err(match err {
                    MediscanError::DeviceUnavailable { .. } => err,
                    other => MediscanError::device_unavailable(other.to_string()),
                });
            }
        };

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        guard.finish(CameraPhase::Active(id));
        tracing::info!(
            session = id,
            facing = %constraints.facing,
            width = constraints.width_hint,
            height = constraints.height_hint,
            "Camera session acquired"
        );

        Ok(CaptureSession::new(id, stream, self.phase.clone()))
    }
}

/// Resets the manager to `Idle` unless the acquire completed.
///
/// Covers both the error path and a dropped acquire future.
struct AcquireGuard<'a> {
    phase: &'a Mutex<CameraPhase>,
    armed: bool,
}

impl AcquireGuard<'_> {
    fn finish(mut self, next: CameraPhase) {
        *lock_phase(self.phase) = next;
        self.armed = false;
    }
}

impl Drop for AcquireGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            *lock_phase(self.phase) = CameraPhase::Idle;
        }
    }
}
