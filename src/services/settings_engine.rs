// Bookmark Saver Settings Engine
// Client settings live in a JSON file under the platform config directory.
// The API URL may be overridden from the environment; that override is applied
// on top of the stored settings and never written back to the file.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::ClientSettings;

/// Environment variable overriding `api.base_url` after the file is loaded.
pub const API_URL_ENV: &str = "BOOKMARK_SAVER_API_URL";

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<ClientSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &ClientSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine persisting [`ClientSettings`] as pretty-printed JSON.
pub struct SettingsEngine {
    config_path: String,
    /// Exactly what the file holds (or will hold on the next save).
    stored: ClientSettings,
    /// `stored` with the environment override applied; what callers see.
    effective: ClientSettings,
    api_url_override: Option<String>,
}

impl SettingsEngine {
    /// `path_override` replaces the default `<config dir>/settings.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::get_config_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            stored: ClientSettings::default(),
            effective: ClientSettings::default(),
            api_url_override: None,
        }
    }

    /// Overrides `api.base_url` for this process, typically from [`API_URL_ENV`].
    /// Blank values are ignored.
    pub fn apply_api_url_override(&mut self, base_url: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(%url, "API base URL overridden from environment");
            self.api_url_override = Some(url);
            self.refresh_effective();
        }
    }

    fn refresh_effective(&mut self) {
        self.effective = self.stored.clone();
        if let Some(url) = &self.api_url_override {
            self.effective.api.base_url = url.clone();
        }
    }

    /// Turns `"toasts.limit"` into the JSON pointer `"/toasts/limit"`.
    fn pointer_for(key: &str) -> Result<String, SettingsError> {
        if key.is_empty() || key.split('.').any(str::is_empty) {
            return Err(SettingsError::InvalidKey(format!("'{}'", key)));
        }
        Ok(key.split('.').fold(String::new(), |mut acc, part| {
            acc.push('/');
            acc.push_str(part);
            acc
        }))
    }
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the config file. A missing file means defaults; a malformed one is an error.
    fn load(&mut self) -> Result<ClientSettings, SettingsError> {
        let path = Path::new(&self.config_path);

        self.stored = if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| SettingsError::IoError(format!("{}: {}", self.config_path, e)))?;
            serde_json::from_str(&content)
                .map_err(|e| SettingsError::SerializationError(format!("{}: {}", self.config_path, e)))?
        } else {
            tracing::debug!(path = %self.config_path, "no settings file, using defaults");
            ClientSettings::default()
        };

        self.refresh_effective();
        Ok(self.effective.clone())
    }

    /// Writes the stored settings (without the environment override).
    fn save(&self) -> Result<(), SettingsError> {
        let path = Path::new(&self.config_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::IoError(format!("{}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(&self.stored)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        fs::write(path, json)
            .map_err(|e| SettingsError::IoError(format!("{}: {}", self.config_path, e)))
    }

    fn get_settings(&self) -> &ClientSettings {
        &self.effective
    }

    /// Replaces one existing leaf, addressed as `section.field`, then saves.
    ///
    /// Unknown keys are rejected; the new tree must still deserialize.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), SettingsError> {
        let pointer = Self::pointer_for(key)?;

        let mut tree = serde_json::to_value(&self.stored)
            .map_err(|e| SettingsError::SerializationError(e.to_string()))?;
        let slot = tree
            .pointer_mut(&pointer)
            .ok_or_else(|| SettingsError::InvalidKey(key.to_string()))?;
        *slot = value;

        self.stored = serde_json::from_value(tree)
            .map_err(|e| SettingsError::InvalidValue(format!("{}: {}", key, e)))?;
        self.refresh_effective();
        tracing::info!(key, "setting updated");
        self.save()
    }

    /// Restores defaults and saves. The environment override stays in effect.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.stored = ClientSettings::default();
        self.refresh_effective();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
