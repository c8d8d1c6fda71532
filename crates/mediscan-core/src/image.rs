//! Encoded still images exchanged between the camera and the lookup pipeline.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::error::{MediscanError, Result};

/// Raster formats a still frame may be encoded as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// MIME type, e.g. `image/jpeg`.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
        }
    }

    /// Guesses the format from a file extension (`jpg`, `jpeg`, `png`).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            _ => None,
        }
    }
}

/// A still image in a lossy or lossless raster encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: ImageFormat,
    bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn new(format: ImageFormat, bytes: Vec<u8>) -> Self {
        Self { format, bytes }
    }

    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self::new(ImageFormat::Jpeg, bytes)
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Base64 payload without the data-URL prefix.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// Renders the image as a `data:image/<fmt>;base64,...` URL.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.format.mime_type(), self.to_base64())
    }

    /// Parses a `data:image/(png|jpeg|jpg);base64,...` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:image/")
            .ok_or_else(|| MediscanError::invalid_state("not an image data URL"))?;
        let (subtype, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| MediscanError::invalid_state("data URL is not base64 encoded"))?;
        let format = ImageFormat::from_extension(subtype).ok_or_else(|| {
            MediscanError::invalid_state(format!("unsupported image type '{subtype}'"))
        })?;
        let bytes = STANDARD.decode(payload)?;
        Ok(Self::new(format, bytes))
    }
}
