//! Configuration service implementation.
//!
//! Loads `MediscanConfig` from `~/.config/mediscan/config.toml` (or an
//! explicit path) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use mediscan_core::config::MediscanConfig;
use mediscan_core::error::{MediscanError, Result};

use crate::paths::MediscanPaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults; a malformed file is an error.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit config location; `None` resolves via [`MediscanPaths`]
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<MediscanConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading a specific file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<MediscanConfig> {
        {
            let read_lock = self
                .config
                .read()
                .map_err(|_| MediscanError::internal("config cache lock poisoned"))?;
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_config(&self.config_path()?)?;

        {
            let mut write_lock = self
                .config
                .write()
                .map_err(|_| MediscanError::internal("config cache lock poisoned"))?;
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        if let Ok(mut write_lock) = self.config.write() {
            *write_lock = None;
        }
    }

    /// Resolved location of the config file.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => MediscanPaths::config_file().map_err(|e| MediscanError::config(e.to_string())),
        }
    }

    fn load_config(path: &Path) -> Result<MediscanConfig> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(MediscanConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: MediscanConfig = toml::from_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediscan_core::config::{FacingMode, FontSize};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), MediscanConfig::default());
    }

    #[test]
    fn test_loads_and_caches_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[camera]\nfacing = \"user\"\n\n[accessibility]\nfont_size = \"large\"\n",
        )
        .unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config().unwrap();
        assert_eq!(config.camera.facing, FacingMode::User);
        assert_eq!(config.accessibility.font_size, FontSize::Large);

        // Cached value survives a file change until invalidated
        std::fs::write(&path, "[camera]\nfacing = \"environment\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().camera.facing, FacingMode::User);

        service.invalidate_cache();
        assert_eq!(
            service.get_config().unwrap().camera.facing,
            FacingMode::Environment
        );
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[speech\nrate = fast").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(matches!(err, MediscanError::Serialization { ref format, .. } if format == "TOML"));
    }
}
