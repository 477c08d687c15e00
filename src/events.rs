//! Append-only JSONL event log under the vault's data directory.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::Path;
use uuid::Uuid;

pub const EVENTS_FILE_NAME: &str = "events.jsonl";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    VaultOpened,
    TemplatesScanned,
    NoteCreated,
    SettingsSaved,
    CommandRegistered,
    CommandUnregistered,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginEvent {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub recorded_at: DateTime<Utc>,
    pub details: serde_json::Value,
}

/// Appends one event to `events.jsonl` in `data_dir`.
pub fn log_event(data_dir: &Path, event_type: EventType, details: serde_json::Value) -> Result<()> {
    let event = PluginEvent {
        event_id: Uuid::new_v4(),
        event_type,
        recorded_at: Utc::now(),
        details,
    };
    let path = data_dir.join(EVENTS_FILE_NAME);
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open event log {}", path.display()))?;
    file.write_all(serde_json::to_string(&event)?.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Reads the whole event log, oldest first. Missing log reads as empty.
pub fn read_events(data_dir: &Path) -> Result<Vec<PluginEvent>> {
    let path = data_dir.join(EVENTS_FILE_NAME);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(&path)?;
    let mut events = Vec::new();
    for line in data.lines().filter(|line| !line.trim().is_empty()) {
        events.push(serde_json::from_str(line)?);
    }
    Ok(events)
}
