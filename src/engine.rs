//! Instantiation Engine.
//!
//! Turns a chosen template into a new note: resolves the template file and
//! its stored configuration, copies the content verbatim, expands the title
//! format (or falls back to the fixed placeholder name), stamps the enabled
//! date fields, and creates the note in the configured target folder. The
//! date stamping happens in the content string before the single create
//! call, so a failed write never leaves a half-patched note behind. A name
//! collision in the target folder is resolved by suffixing ` 1`, ` 2`, ...

use anyhow::Result;
use chrono::NaiveDate;

use crate::frontmatter::{apply_date_fields, date_field_candidates};
use crate::notices::Notice;
use crate::settings::VaultSettings;
use crate::title::format_title;
use crate::vault::FsVault;

/// Base name used when no title format is configured.
pub const DEFAULT_NOTE_NAME: &str = "Untitled";

/// Bound on collision suffix probing.
const MAX_NAME_ATTEMPTS: usize = 512;

/// Outcome of a successful instantiation, handed to the host to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedNote {
    /// Vault-relative path of the new note.
    pub path: String,
    /// Base name the note was created under (collision suffix included).
    pub name: String,
    /// Template the note was copied from.
    pub template_path: String,
    /// Front-matter keys stamped with today's date.
    pub date_fields_set: Vec<String>,
}

/// Creates a new note from the template at `template_path`, using `today`
/// for the title format and the date fields.
pub fn create_from_template(
    vault: &FsVault,
    settings: &VaultSettings,
    template_path: &str,
    today: NaiveDate,
) -> Result<CreatedNote> {
    if !vault.is_file(template_path) {
        return Err(Notice::resource(format!(
            "Template file {template_path} not found"
        )));
    }
    let config = settings.templates.get(template_path).ok_or_else(|| {
        Notice::configuration(format!("No settings found for template {template_path}"))
    })?;
    let target_folder = config
        .target_folder
        .as_deref()
        .map(|folder| folder.trim_matches('/'))
        .filter(|folder| !folder.is_empty())
        .ok_or_else(|| {
            Notice::configuration(format!(
                "No target folder configured for template {}",
                config.name
            ))
        })?;
    if !vault.is_dir(target_folder) {
        return Err(Notice::resource(format!(
            "Target folder {target_folder} no longer exists"
        )));
    }

    let content = vault.read(template_path)?;

    let base_name = match config.title_format.as_deref() {
        Some(format) if !format.trim().is_empty() => {
            let formatted = format_title(format, today);
            if formatted.trim().is_empty() {
                DEFAULT_NOTE_NAME.to_string()
            } else {
                formatted
            }
        }
        _ => DEFAULT_NOTE_NAME.to_string(),
    };

    // Only fields still present in the template's front matter are stamped.
    let candidates = date_field_candidates(&content);
    let enabled: Vec<String> = config
        .enabled_date_fields()
        .into_iter()
        .filter(|field| candidates.contains_key(field))
        .collect();
    let content = apply_date_fields(&content, &enabled, today)?;

    let (name, path) = free_destination(vault, target_folder, &base_name)?;
    vault.create(&path, &content)?;

    Ok(CreatedNote {
        path,
        name,
        template_path: template_path.to_string(),
        date_fields_set: enabled,
    })
}

/// First collision-free `(name, path)` in the target folder.
fn free_destination(
    vault: &FsVault,
    target_folder: &str,
    base_name: &str,
) -> Result<(String, String)> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = if attempt == 0 {
            base_name.to_string()
        } else {
            format!("{base_name} {attempt}")
        };
        let path = format!("{target_folder}/{name}.md");
        if !vault.exists(&path) {
            return Ok((name, path));
        }
    }
    Err(Notice::write(format!(
        "No free name for {base_name} in {target_folder}"
    )))
}
