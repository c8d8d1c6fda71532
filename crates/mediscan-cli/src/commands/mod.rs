pub mod repl;
pub mod scan;
pub mod search;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use mediscan_application::SessionFactory;
use mediscan_core::config::{LookupSettings, MediscanConfig};
use mediscan_core::platform::Platform;
use mediscan_infrastructure::{ConfigService, FileCaptureDevice};

use crate::console::{ConsoleSynthesizer, PromptVoiceRecognizer};

/// Flags shared by every subcommand.
pub struct SessionOptions {
    pub config_path: Option<PathBuf>,
    pub mute: bool,
    pub no_latency: bool,
}

impl SessionOptions {
    fn load_config(&self) -> Result<MediscanConfig> {
        let service = match &self.config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(),
        };
        let path = service.config_path()?;
        let mut config = service
            .get_config()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        if self.no_latency {
            config.lookup = LookupSettings::immediate();
        }
        Ok(config)
    }

    /// Builds a factory with console speech and, optionally, voice input and
    /// a file-backed camera.
    pub fn factory(&self, camera_image: Option<PathBuf>, voice: bool) -> Result<SessionFactory> {
        let config = self.load_config()?;

        let mut platform = Platform::default();
        if !self.mute {
            platform = platform.with_speech(Arc::new(ConsoleSynthesizer::new()));
        }
        if voice {
            platform = platform.with_voice(Arc::new(PromptVoiceRecognizer));
        }
        if let Some(path) = camera_image {
            platform = platform.with_camera(Arc::new(FileCaptureDevice::new(path)));
        }

        Ok(SessionFactory::new(config, platform))
    }
}
