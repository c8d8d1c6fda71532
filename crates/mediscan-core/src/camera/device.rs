//! Capture device seams.

use async_trait::async_trait;

use crate::config::{CameraSettings, FacingMode};
use crate::error::Result;
use crate::image::EncodedImage;

/// Best-effort hints for the requested video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConstraints {
    pub facing: FacingMode,
    pub width_hint: u32,
    pub height_hint: u32,
}

impl Default for CaptureConstraints {
    fn default() -> Self {
        Self::from(&CameraSettings::default())
    }
}

impl From<&CameraSettings> for CaptureConstraints {
    fn from(settings: &CameraSettings) -> Self {
        Self {
            facing: settings.facing,
            width_hint: settings.width_hint,
            height_hint: settings.height_hint,
        }
    }
}

/// A video-only capture device.
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Requests a stream matching the constraints as closely as possible.
    ///
    /// Implementations report permission denial or a missing device as
    /// `MediscanError::DeviceUnavailable`.
    async fn open_stream(&self, constraints: &CaptureConstraints) -> Result<Box<dyn MediaStream>>;
}

/// One open video stream and its tracks.
pub trait MediaStream: Send {
    /// Samples the current frame as an encoded still image.
    fn grab_still(&mut self) -> Result<EncodedImage>;

    /// Stops every underlying track, releasing the hardware.
    fn stop_all_tracks(&mut self);
}
