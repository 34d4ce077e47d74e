use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use portfolio_core::theme::STORAGE_KEY;
use portfolio_core::{ColorScheme, Result};

/// Small key/value store persisted as a JSON object, the terminal stand-in
/// for the browser's `localStorage`.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl SettingsStore {
    /// Opens the store; a missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|error| {
                tracing::warn!("ignoring malformed settings {}: {error}", path.display());
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, content)?;
        Ok(())
    }

    /// Stored colour scheme, if one was saved and is still recognised.
    pub fn color_scheme(&self) -> Option<ColorScheme> {
        let stored = self.get(STORAGE_KEY)?;
        let scheme = ColorScheme::from_css_value(stored);
        if scheme.is_none() {
            tracing::warn!("unknown stored color scheme {stored:?}");
        }
        scheme
    }

    pub fn set_color_scheme(&mut self, scheme: ColorScheme) -> Result<()> {
        self.set(STORAGE_KEY, scheme.css_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_scheme_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested/settings.json");

        let mut store = SettingsStore::open(&path);
        assert_eq!(store.color_scheme(), None);
        store.set_color_scheme(ColorScheme::Dark)?;

        let reopened = SettingsStore::open(&path);
        assert_eq!(reopened.color_scheme(), Some(ColorScheme::Dark));
        assert_eq!(reopened.get("colorScheme"), Some("dark"));
        Ok(())
    }

    #[test]
    fn test_unknown_or_malformed_values_are_ignored() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("settings.json");

        fs::write(&path, r#"{"colorScheme": "sepia"}"#)?;
        assert_eq!(SettingsStore::open(&path).color_scheme(), None);

        fs::write(&path, "not json")?;
        assert_eq!(SettingsStore::open(&path).get("colorScheme"), None);
        Ok(())
    }
}
