//! Folder Scanner.
//!
//! Walks the configured template folder and produces the flat
//! `(path, category)` listing the index is built from. A template's category
//! is the name of the subfolder directly below the template folder that
//! contains it; files sitting in the folder itself get the empty category.
//! Nested subfolders collapse to their outermost name. The settings surface
//! uses [`scan_templates_with_subpaths`], which keeps the full relative
//! subpath instead.
//!
//! Scanning also keeps the settings store honest: every discovered path gets
//! a configuration record (created with the file stem as its name if absent)
//! and the stored name is refreshed to the current stem. Records for files
//! that vanished are retained so a restored file picks its settings back up.

use anyhow::Result;

use crate::notices::Notice;
use crate::settings::{TemplateConfig, VaultSettings};
use crate::vault::{file_stem, Entry, FsVault};

/// One discovered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedTemplate {
    pub path: String,
    pub category: String,
}

/// Scans the template folder, collapsing nested subfolders to their
/// outermost name below the root.
pub fn scan_templates(
    vault: &FsVault,
    settings: &mut VaultSettings,
) -> Result<Vec<ScannedTemplate>> {
    scan(vault, settings, CategoryStyle::Outermost)
}

/// Settings-surface variant: the category is the full relative subpath
/// joined by `/`, so `Work/Deep/B.md` reports `Work/Deep`.
pub fn scan_templates_with_subpaths(
    vault: &FsVault,
    settings: &mut VaultSettings,
) -> Result<Vec<ScannedTemplate>> {
    scan(vault, settings, CategoryStyle::FullSubpath)
}

#[derive(Clone, Copy)]
enum CategoryStyle {
    Outermost,
    FullSubpath,
}

fn scan(
    vault: &FsVault,
    settings: &mut VaultSettings,
    style: CategoryStyle,
) -> Result<Vec<ScannedTemplate>> {
    let folder = settings.template_folder.trim_matches('/').to_string();
    if folder.is_empty() {
        return Err(Notice::configuration("No template folder configured"));
    }
    let root = match vault.entry(&folder) {
        Some(entry @ Entry::Directory { .. }) => entry,
        _ => {
            return Err(Notice::resource(format!(
                "Template folder {folder} not found in vault"
            )))
        }
    };

    let mut listing = Vec::new();
    collect(&root, &folder, style, &mut listing);

    for scanned in &listing {
        let stem = file_stem(&scanned.path).to_string();
        let record = settings
            .templates
            .entry(scanned.path.clone())
            .or_insert_with(|| TemplateConfig::named(stem.clone()));
        record.name = stem;
    }

    Ok(listing)
}

fn collect(entry: &Entry, root: &str, style: CategoryStyle, out: &mut Vec<ScannedTemplate>) {
    let Entry::Directory { children, .. } = entry else {
        return;
    };
    for child in children {
        match child {
            Entry::File { path } => out.push(ScannedTemplate {
                path: path.clone(),
                category: category_of(path, root, style),
            }),
            Entry::Directory { .. } => collect(child, root, style, out),
        }
    }
}

fn category_of(path: &str, root: &str, style: CategoryStyle) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path).trim_start_matches('/');
    match relative.rsplit_once('/') {
        None => String::new(),
        Some((subpath, _)) => match style {
            CategoryStyle::FullSubpath => subpath.to_string(),
            CategoryStyle::Outermost => subpath
                .split('/')
                .next()
                .unwrap_or(subpath)
                .to_string(),
        },
    }
}
