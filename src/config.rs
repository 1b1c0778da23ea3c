//! Application configuration.
//!
//! Handles loading configuration from the settings file, environment
//! variables and .env files.

use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::files::{APP_DIR, SETTINGS_FILE};
use crate::error::{Error, Result};
use crate::types::{LinkService, Translation};

/// User-facing link settings, stored as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Translation every generated link points at.
    #[serde(rename = "defaultTranslation")]
    pub translation: Translation,
    /// Service (or services) links are generated for.
    pub link_service: LinkService,
}

impl Settings {
    /// Settings with a translation the chosen service can actually open.
    ///
    /// Bolls does not carry every translation; when Bolls is involved and the
    /// translation is unsupported, ESV is used instead.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.link_service.uses_bolls() && !self.translation.config().supports_bolls {
            tracing::info!(
                "{} is not available on Bolls, falling back to {}",
                self.translation,
                Translation::Esv
            );
            return Self { translation: Translation::Esv, ..self };
        }
        self
    }

    /// Read settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).map_err(Error::at(path))?;
        serde_json::from_str(&content).map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))
    }

    /// Write settings as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent).map_err(Error::at(parent))?;
        }
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))?;
        fs_err::write(path, json).map_err(Error::at(path))?;
        Ok(())
    }
}

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Link settings after file and environment overrides
    pub settings: Settings,
    /// Settings file the configuration was read from, if it exists
    pub settings_path: Option<PathBuf>,
    /// Default notes directory used when no paths are given
    pub notes_path: Option<PathBuf>,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings: Settings::default(),
            settings_path: None,
            notes_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the settings file and environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        // Settings file: env var override, or <config dir>/scripture-linker/settings.json
        if let Some(path) = settings_file() {
            if path.is_file() {
                config.settings = Settings::load(&path)?;
                tracing::debug!("Loaded settings from {}", path.display());
            }
            config.settings_path = Some(path);
        }

        if let Ok(translation) = env::var("SCRIPTURE_TRANSLATION") {
            config.settings.translation = translation.parse()?;
        }

        if let Ok(service) = env::var("SCRIPTURE_LINK_SERVICE") {
            config.settings.link_service = service.parse()?;
        }

        config.notes_path = env::var("SCRIPTURE_NOTES_PATH")
            .ok()
            .map(|path| PathBuf::from(shellexpand::tilde(&path).to_string()))
            .filter(|p| p.is_dir());

        config.settings = config.settings.normalized();
        Ok(config)
    }
}

/// Location of the settings file, if one can be determined
fn settings_file() -> Option<PathBuf> {
    env::var("SCRIPTURE_LINKER_SETTINGS").ok().map_or_else(
        || dirs::config_dir().map(|d| d.join(APP_DIR).join(SETTINGS_FILE)),
        |path| Some(PathBuf::from(shellexpand::tilde(&path).to_string())),
    )
}
