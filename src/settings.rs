//! User display preferences, shared through a watch channel.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub compact_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            compact_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Settings {
    pub fn theme(&self) -> Theme {
        if self.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Owns the current settings; views subscribe for changes
pub struct SettingsStore {
    tx: watch::Sender<Settings>,
    path: Option<PathBuf>,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx, path: None }
    }

    /// Read settings from `path`. A missing file gives defaults, as does one
    /// that cannot be parsed. `persist` writes back to the same path.
    pub async fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let settings = match tokio::fs::read_to_string(&path).await {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Settings::default()
                }
            },
            Err(e) => {
                debug!("No settings at {} ({}), using defaults", path.display(), e);
                Settings::default()
            }
        };

        let mut store = Self::new(settings);
        store.path = Some(path);
        store
    }

    pub fn subscribe(&self) -> watch::Receiver<Settings> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Settings {
        *self.tx.borrow()
    }

    /// Apply `f` and notify subscribers if anything changed.
    pub fn update<F: FnOnce(&mut Settings)>(&self, f: F) {
        self.tx.send_if_modified(|settings| {
            let before = *settings;
            f(settings);
            *settings != before
        });
    }

    pub fn toggle_dark(&self) {
        self.update(|s| s.dark_mode = !s.dark_mode);
    }

    pub fn toggle_notifications(&self) {
        self.update(|s| s.notifications = !s.notifications);
    }

    pub fn toggle_compact_mode(&self) {
        self.update(|s| s.compact_mode = !s.compact_mode);
    }

    /// Write the current settings to the file they were loaded from.
    pub async fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.current())?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        info!("💾 Saved settings to {}", path.display());
        Ok(())
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard() {
        let settings = Settings::default();
        assert!(!settings.dark_mode);
        assert!(settings.notifications);
        assert!(!settings.compact_mode);
        assert_eq!(settings.theme(), Theme::Light);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"darkMode": true}"#).unwrap();
        assert!(settings.dark_mode);
        assert!(settings.notifications);
    }

    #[tokio::test]
    async fn subscribers_see_toggles() {
        let store = SettingsStore::default();
        let mut rx = store.subscribe();

        store.toggle_dark();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().theme(), Theme::Dark);

        store.toggle_compact_mode();
        store.toggle_notifications();
        rx.changed().await.unwrap();
        let seen = *rx.borrow_and_update();
        assert!(seen.compact_mode);
        assert!(!seen.notifications);
    }

    #[tokio::test]
    async fn no_op_update_does_not_notify() {
        let store = SettingsStore::default();
        let rx = store.subscribe();
        store.update(|s| s.notifications = true);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("settings.json");

        let store = SettingsStore::load(&path).await;
        assert_eq!(store.current(), Settings::default());
        store.toggle_dark();
        store.persist().await.unwrap();

        let reloaded = SettingsStore::load(&path).await;
        assert!(reloaded.current().dark_mode);
    }

    #[tokio::test]
    async fn malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = SettingsStore::load(&path).await;
        assert_eq!(store.current(), Settings::default());
    }
}
