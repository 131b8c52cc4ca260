//! UI preference flags persisted between runs.
//!
//! Stored as `name=value` lines, one flag per line, next to the config file.
//! Read once at startup and written back in full on every toggle.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
#[cfg(unix)]
use std::{io::Write, os::unix::fs::OpenOptionsExt};

const DARK_MODE_KEY: &str = "darkMode";
const LARGE_FONT_KEY: &str = "largeFont";
const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub large_font: bool,
    pub sidebar_collapsed: bool,
}

impl Preferences {
    pub fn defaults(prefer_dark: bool) -> Self {
        Self {
            dark_mode: prefer_dark,
            large_font: false,
            sidebar_collapsed: false,
        }
    }

    /// Parse stored flags on top of `defaults`. Unknown keys and malformed lines are skipped.
    pub fn parse(raw: &str, defaults: Self) -> Self {
        let mut prefs = defaults;
        for line in raw.lines() {
            let mut parts = line.splitn(2, '=');
            let (Some(name), Some(value)) = (parts.next(), parts.next()) else {
                continue;
            };
            let value = match value.trim() {
                "true" => true,
                "false" => false,
                _ => continue,
            };
            match name.trim() {
                DARK_MODE_KEY => prefs.dark_mode = value,
                LARGE_FONT_KEY => prefs.large_font = value,
                SIDEBAR_COLLAPSED_KEY => prefs.sidebar_collapsed = value,
                _ => {}
            }
        }
        prefs
    }

    pub fn serialize(&self) -> String {
        [
            (DARK_MODE_KEY, self.dark_mode),
            (LARGE_FONT_KEY, self.large_font),
            (SIDEBAR_COLLAPSED_KEY, self.sidebar_collapsed),
        ]
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

fn secure_write(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    #[cfg(unix)]
    {
        std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)?
            .write_all(content.as_bytes())?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content)?;
    }

    Ok(())
}

/// File-backed home of the [`Preferences`] flags.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    defaults: Preferences,
}

impl PreferenceStore {
    pub fn new(path: PathBuf, defaults: Preferences) -> Self {
        Self { path, defaults }
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(crate::config::app_dir()?.join("preferences"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read flags from disk. A missing file means defaults.
    pub fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(self.defaults);
        }
        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences at {}", self.path.display()))?;
        Ok(Preferences::parse(&raw, self.defaults))
    }

    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        secure_write(&self.path, &prefs.serialize())
            .with_context(|| format!("Failed to write preferences at {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let prefs = Preferences::parse("largeFont=true", Preferences::defaults(true));
        assert_eq!(
            prefs,
            Preferences {
                dark_mode: true,
                large_font: true,
                sidebar_collapsed: false,
            }
        );
    }

    #[test]
    fn garbage_lines_are_ignored() {
        let raw = "darkMode=maybe\nnot a flag\ncolor=blue\nsidebarCollapsed = true\n";
        let prefs = Preferences::parse(raw, Preferences::defaults(false));
        assert!(!prefs.dark_mode);
        assert!(prefs.sidebar_collapsed);
    }

    #[test]
    fn store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(
            dir.path().join("nested").join("preferences"),
            Preferences::defaults(true),
        );

        assert_eq!(store.load().unwrap(), Preferences::defaults(true));

        let prefs = Preferences {
            dark_mode: false,
            large_font: true,
            sidebar_collapsed: true,
        };
        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), prefs);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("darkMode=false"));
        assert!(raw.contains("largeFont=true"));
        assert!(raw.contains("sidebarCollapsed=true"));
    }
}
