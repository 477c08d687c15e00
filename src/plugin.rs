//! Application facade.
//!
//! [`AppContext`] bundles the vault accessor and the settings store and is
//! passed into every component; there is no global plugin state.
//! [`TemplatePlugin`] exposes the user-visible operations behind the host
//! UI: open the picker, instantiate a template, edit per-template settings,
//! and invoke palette commands. Every settings mutation is saved wholesale
//! and followed by a command-registry sync so the palette tracks the
//! `isCommandRegistered` flags.

use anyhow::{bail, Context, Result};
use serde_json::json;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::commands::{CommandAction, CommandRegistry};
use crate::config;
use crate::engine::{create_from_template, CreatedNote};
use crate::events::{log_event, EventType};
use crate::frontmatter::date_field_candidates;
use crate::index::TemplateIndex;
use crate::notices::Notice;
use crate::picker::PickerSession;
use crate::scan::{scan_templates, scan_templates_with_subpaths, ScannedTemplate};
use crate::settings::{SettingsStore, TemplateConfig};
use crate::title::{format_title, today_local};
use crate::vault::FsVault;

/// Shared accessors handed to every component.
pub struct AppContext {
    pub vault: FsVault,
    pub settings: SettingsStore,
    data_dir: PathBuf,
}

impl AppContext {
    /// Opens the vault at `root` and loads its settings store.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let vault = FsVault::open(root)?;
        let data_dir = vault.data_dir()?;
        let settings = SettingsStore::load(&data_dir)?;
        Ok(Self {
            vault,
            settings,
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// What invoking a palette command produced.
#[derive(Debug)]
pub enum CommandOutcome {
    PickerOpened(PickerSession),
    NoteCreated(CreatedNote),
}

pub struct TemplatePlugin {
    ctx: AppContext,
    registry: CommandRegistry,
    in_flight: HashSet<String>,
}

impl TemplatePlugin {
    /// Opens the vault recorded as active in the install config.
    pub fn new() -> Result<Self> {
        let config = config::load_or_default()?;
        let root = config.active_vault.ok_or_else(|| {
            Notice::configuration("No active vault configured. Run setup --vault <path> first.")
        })?;
        Self::open(root)
    }

    /// Opens a specific vault directly.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let ctx = AppContext::open(root)?;
        let mut registry = CommandRegistry::new();
        let outcome = registry.sync_templates(&ctx.settings.settings);
        log_event(
            ctx.data_dir(),
            EventType::VaultOpened,
            json!({
                "vault": ctx.vault.root().display().to_string(),
                "template_commands": outcome.registered.len(),
            }),
        )?;
        Ok(Self {
            ctx,
            registry,
            in_flight: HashSet::new(),
        })
    }

    pub fn context(&self) -> &AppContext {
        &self.ctx
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Rescans the template folder, persisting refreshed records.
    pub fn rescan(&mut self) -> Result<Vec<ScannedTemplate>> {
        let listing = scan_templates(&self.ctx.vault, &mut self.ctx.settings.settings)?;
        self.ctx.settings.save()?;
        log_event(
            self.ctx.data_dir(),
            EventType::TemplatesScanned,
            json!({ "templates": listing.len() }),
        )?;
        Ok(listing)
    }

    /// Settings-surface listing with full relative subpath categories.
    pub fn rescan_with_subpaths(&mut self) -> Result<Vec<ScannedTemplate>> {
        let listing =
            scan_templates_with_subpaths(&self.ctx.vault, &mut self.ctx.settings.settings)?;
        self.ctx.settings.save()?;
        Ok(listing)
    }

    /// Builds a fresh picker session from a new scan. The selection starts
    /// at the first template of the first category.
    pub fn open_picker(&mut self) -> Result<PickerSession> {
        let listing = self.rescan()?;
        let index = TemplateIndex::build(&listing, &self.ctx.settings.settings);
        Ok(PickerSession::new(index))
    }

    /// Instantiates the committed selection of a picker session.
    pub fn commit_picker(&mut self, session: &PickerSession) -> Result<CreatedNote> {
        let path = session
            .commit()
            .context("Nothing selected in the picker")?
            .to_string();
        self.create_from_template(&path)
    }

    /// Instantiates the template at `path` with today's local date.
    pub fn create_from_template(&mut self, path: &str) -> Result<CreatedNote> {
        if !self.in_flight.insert(path.to_string()) {
            bail!("Instantiation already in progress for {path}");
        }
        let result = create_from_template(
            &self.ctx.vault,
            &self.ctx.settings.settings,
            path,
            today_local(),
        );
        self.in_flight.remove(path);
        let note = result?;
        log_event(
            self.ctx.data_dir(),
            EventType::NoteCreated,
            json!({
                "path": note.path,
                "template": note.template_path,
                "date_fields": note.date_fields_set,
            }),
        )?;
        Ok(note)
    }

    /// Runs a palette command by id.
    pub fn invoke(&mut self, command_id: &str) -> Result<CommandOutcome> {
        let action = self
            .registry
            .find(command_id)
            .map(|command| command.action.clone())
            .with_context(|| format!("Unknown command {command_id}"))?;
        match action {
            CommandAction::OpenPicker => Ok(CommandOutcome::PickerOpened(self.open_picker()?)),
            CommandAction::InstantiateTemplate { template_path } => Ok(
                CommandOutcome::NoteCreated(self.create_from_template(&template_path)?),
            ),
        }
    }

    pub fn set_template_folder(&mut self, folder: impl Into<String>) -> Result<()> {
        self.ctx.settings.settings.template_folder = folder.into();
        self.save_settings()
    }

    pub fn set_target_folder(&mut self, path: &str, folder: Option<String>) -> Result<()> {
        self.template_config_mut(path)?.target_folder = folder;
        self.save_settings()
    }

    pub fn set_title_format(&mut self, path: &str, format: Option<String>) -> Result<()> {
        self.template_config_mut(path)?.title_format = format;
        self.save_settings()
    }

    /// Flips one date-field toggle for a template.
    pub fn set_date_field(&mut self, path: &str, field: &str, enabled: bool) -> Result<()> {
        let config = self.template_config_mut(path)?;
        config
            .date_fields
            .get_or_insert_with(BTreeMap::new)
            .insert(field.to_string(), enabled);
        self.save_settings()
    }

    /// Toggles the dedicated palette command for a template and syncs the
    /// registry.
    pub fn set_command_registered(&mut self, path: &str, enabled: bool) -> Result<()> {
        self.template_config_mut(path)?.is_command_registered = Some(enabled);
        self.save_settings()?;
        let outcome = self.registry.sync_templates(&self.ctx.settings.settings);
        for registered in &outcome.registered {
            log_event(
                self.ctx.data_dir(),
                EventType::CommandRegistered,
                json!({ "template": registered }),
            )?;
        }
        for unregistered in &outcome.unregistered {
            log_event(
                self.ctx.data_dir(),
                EventType::CommandUnregistered,
                json!({ "template": unregistered }),
            )?;
        }
        Ok(())
    }

    /// Toggle list for the date-field settings modal: resolver defaults
    /// overlaid with the stored selections.
    pub fn date_field_toggles(&self, path: &str) -> Result<BTreeMap<String, bool>> {
        let content = self.ctx.vault.read(path)?;
        let mut toggles = date_field_candidates(&content);
        if let Some(config) = self.ctx.settings.template(path) {
            if let Some(stored) = &config.date_fields {
                for (field, enabled) in stored {
                    if let Some(toggle) = toggles.get_mut(field) {
                        *toggle = *enabled;
                    }
                }
            }
        }
        Ok(toggles)
    }

    /// Live preview for the title-format editor modal.
    pub fn preview_title(&self, format: &str) -> String {
        format_title(format, today_local())
    }

    fn template_config_mut(&mut self, path: &str) -> Result<&mut TemplateConfig> {
        self.ctx.settings.template_mut(path).ok_or_else(|| {
            Notice::configuration(format!("No settings found for template {path}"))
        })
    }

    fn save_settings(&self) -> Result<()> {
        self.ctx.settings.save()?;
        log_event(self.ctx.data_dir(), EventType::SettingsSaved, json!({}))?;
        Ok(())
    }
}
