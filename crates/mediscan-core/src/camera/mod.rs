//! Camera capture lifecycle.
//!
//! # Module Structure
//!
//! - `device`: Platform seams (`CaptureDevice`, `MediaStream`) and constraints
//! - `manager`: `CameraManager`, which serialises acquisition
//! - `session`: `CaptureSession`, the scoped owner of one active stream
//!
//! A `CaptureSession` releases its stream when dropped, so the device is
//! never left locked on an error path.

mod device;
mod manager;
mod session;

pub use device::{CaptureConstraints, CaptureDevice, MediaStream};
pub use manager::{CameraManager, CameraPhase};
pub use session::{CaptureSession, SessionPhase};
