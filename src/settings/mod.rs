//! Per-vault settings store.
//!
//! The sole durable entity of the plugin: a single JSON document mapping
//! template paths to their configuration records, plus the template-folder
//! path itself. Loaded wholesale at startup and rewritten wholesale on every
//! mutation; persistence is last-write-wins. The wire shape (camelCase keys)
//! matches the host's key-value store so an existing `data.json` can be
//! dropped in unchanged.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Root settings document for one vault.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VaultSettings {
    /// Vault-relative path of the folder scanned for templates.
    #[serde(default)]
    pub template_folder: String,
    /// Per-template configuration, keyed by vault-relative template path.
    #[serde(default)]
    pub templates: BTreeMap<String, TemplateConfig>,
}

/// Mutable configuration record for one template.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateConfig {
    /// Display name, refreshed to the file stem on every scan.
    pub name: String,
    /// Vault-relative folder new notes are created in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_folder: Option<String>,
    /// Front-matter keys flagged for auto-set-to-today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_fields: Option<BTreeMap<String, bool>>,
    /// Token string expanded into the new note's base name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_format: Option<String>,
    /// Whether a dedicated host command is registered for this template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_command_registered: Option<bool>,
}

impl TemplateConfig {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Front-matter keys currently flagged `true`.
    pub fn enabled_date_fields(&self) -> Vec<String> {
        self.date_fields
            .as_ref()
            .map(|fields| {
                fields
                    .iter()
                    .filter(|(_, enabled)| **enabled)
                    .map(|(key, _)| key.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Owns the settings document and its location on disk.
#[derive(Debug)]
pub struct SettingsStore {
    path: PathBuf,
    pub settings: VaultSettings,
}

impl SettingsStore {
    /// Loads the settings document from `data_dir`, or starts from defaults
    /// when none exists yet.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(SETTINGS_FILE_NAME);
        let settings = if path.exists() {
            let data = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings file {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("Failed to parse settings file {}", path.display()))?
        } else {
            VaultSettings::default()
        };
        Ok(Self { path, settings })
    }

    /// Rewrites the whole document.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&self.settings)?)
            .with_context(|| format!("Failed to write settings file {}", self.path.display()))?;
        Ok(())
    }

    pub fn template(&self, path: &str) -> Option<&TemplateConfig> {
        self.settings.templates.get(path)
    }

    pub fn template_mut(&mut self, path: &str) -> Option<&mut TemplateConfig> {
        self.settings.templates.get_mut(path)
    }
}
