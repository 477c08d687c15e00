//! Front-matter parsing, the Date-Field Resolver, and the date patcher.
//!
//! Front matter is the YAML block delimited by `---` lines at the head of a
//! note. The resolver derives which keys are eligible for auto-set-to-today:
//! every key except the structural blocklist (tag list, alias list,
//! CSS-class list), each defaulting to `false`. The patcher rewrites the
//! selected keys to a `YYYY-MM-DD` value and leaves every other key alone.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Structural keys never offered as date fields.
pub const DATE_FIELD_BLOCKLIST: [&str; 3] = ["tags", "aliases", "cssclasses"];

struct FrontMatterSplit<'a> {
    yaml: &'a str,
    body: &'a str,
}

fn split_front_matter(content: &str) -> Option<FrontMatterSplit<'_>> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }
    let yaml_start = first.len();
    let mut offset = yaml_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some(FrontMatterSplit {
                yaml: &content[yaml_start..offset],
                body: &content[offset + line.len()..],
            });
        }
        offset += line.len();
    }
    None
}

fn parse_mapping(yaml: &str) -> Result<Mapping> {
    if yaml.trim().is_empty() {
        return Ok(Mapping::new());
    }
    serde_yaml::from_str(yaml).context("Failed to parse front matter")
}

/// Front-matter keys of `content`, in document order. Empty when the note
/// has no front-matter block or the block is not a mapping.
pub fn front_matter_keys(content: &str) -> Vec<String> {
    let Some(split) = split_front_matter(content) else {
        return Vec::new();
    };
    let Ok(mapping) = parse_mapping(split.yaml) else {
        return Vec::new();
    };
    mapping
        .keys()
        .filter_map(|key| key.as_str().map(str::to_string))
        .collect()
}

/// Date-Field Resolver: every front-matter key outside the blocklist,
/// mapped to the default `false`.
pub fn date_field_candidates(content: &str) -> BTreeMap<String, bool> {
    front_matter_keys(content)
        .into_iter()
        .filter(|key| !DATE_FIELD_BLOCKLIST.contains(&key.as_str()))
        .map(|key| (key, false))
        .collect()
}

/// Rewrites the given front-matter keys of `content` to `date` in
/// `YYYY-MM-DD` form. Keys absent from the block are skipped; with no
/// applicable key the content comes back byte-identical.
pub fn apply_date_fields(content: &str, fields: &[String], date: NaiveDate) -> Result<String> {
    if fields.is_empty() {
        return Ok(content.to_string());
    }
    let Some(split) = split_front_matter(content) else {
        return Ok(content.to_string());
    };
    let mut mapping = parse_mapping(split.yaml)?;
    let mut touched = false;
    let stamp = date.format("%Y-%m-%d").to_string();
    for field in fields {
        let key = Value::String(field.clone());
        if mapping.contains_key(&key) {
            mapping.insert(key, Value::String(stamp.clone()));
            touched = true;
        }
    }
    if !touched {
        return Ok(content.to_string());
    }
    let yaml = serde_yaml::to_string(&mapping)?;
    Ok(format!("---\n{yaml}---\n{}", split.body))
}
