//! Capture device backed by an image file on disk.
//!
//! Stands in for a real camera on headless machines: opening the stream
//! reads the file, and every captured frame is that file's content.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mediscan_core::camera::{CaptureConstraints, CaptureDevice, MediaStream};
use mediscan_core::error::{MediscanError, Result};
use mediscan_core::image::{EncodedImage, ImageFormat};

#[derive(Debug, Clone)]
pub struct FileCaptureDevice {
    path: PathBuf,
    open_streams: Arc<AtomicUsize>,
}

impl FileCaptureDevice {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            open_streams: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of streams opened and not yet stopped.
    pub fn open_streams(&self) -> usize {
        self.open_streams.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptureDevice for FileCaptureDevice {
    async fn open_stream(&self, constraints: &CaptureConstraints) -> Result<Box<dyn MediaStream>> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            MediscanError::device_unavailable(format!(
                "cannot open capture source {}: {}",
                self.path.display(),
                err
            ))
        })?;

        let format = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension)
            .unwrap_or(ImageFormat::Jpeg);

        tracing::debug!(
            path = %self.path.display(),
            facing = %constraints.facing,
            "Opened file-backed capture stream"
        );
        self.open_streams.fetch_add(1, Ordering::SeqCst);

        Ok(Box::new(FileStream {
            frame: EncodedImage::new(format, bytes),
            open_streams: self.open_streams.clone(),
            live: true,
        }))
    }
}

struct FileStream {
    frame: EncodedImage,
    open_streams: Arc<AtomicUsize>,
    live: bool,
}

impl MediaStream for FileStream {
    fn grab_still(&mut self) -> Result<EncodedImage> {
        if !self.live {
            return Err(MediscanError::invalid_state("stream tracks are stopped"));
        }
        Ok(self.frame.clone())
    }

    fn stop_all_tracks(&mut self) {
        if self.live {
            self.live = false;
            self.open_streams.fetch_sub(1, Ordering::SeqCst);
        }
    }
}
