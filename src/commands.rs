//! Command registry.
//!
//! The host exposes a command palette; this registry is the plugin-side
//! bookkeeping for it. One fixed command opens the picker, and each template
//! flagged in its settings gets a dynamic command that instantiates it
//! directly. Registrations are held through revocable handles and
//! added/removed with ordinary collection operations instead of reaching
//! into the host's command table by derived string ids.

use uuid::Uuid;

use crate::settings::VaultSettings;

/// Identifier of the fixed open-picker command.
pub const OPEN_PICKER_COMMAND_ID: &str = "open-template-picker";

/// Revocable handle to one registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationHandle(Uuid);

/// What a command does when invoked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    OpenPicker,
    InstantiateTemplate { template_path: String },
}

#[derive(Debug, Clone)]
pub struct CommandRegistration {
    pub handle: RegistrationHandle,
    pub id: String,
    pub name: String,
    pub action: CommandAction,
}

/// Summary of one registry sync against the settings store.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    pub registered: Vec<String>,
    pub unregistered: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandRegistration>,
}

impl CommandRegistry {
    /// Empty registry with the fixed open-picker command preregistered.
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.register(
            OPEN_PICKER_COMMAND_ID,
            "Create note from template",
            CommandAction::OpenPicker,
        );
        registry
    }

    pub fn register(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        action: CommandAction,
    ) -> RegistrationHandle {
        let handle = RegistrationHandle(Uuid::new_v4());
        self.commands.push(CommandRegistration {
            handle,
            id: id.into(),
            name: name.into(),
            action,
        });
        handle
    }

    /// Removes the registration behind `handle`. Returns `false` when the
    /// handle was already revoked.
    pub fn revoke(&mut self, handle: RegistrationHandle) -> bool {
        let before = self.commands.len();
        self.commands.retain(|command| command.handle != handle);
        self.commands.len() != before
    }

    pub fn commands(&self) -> &[CommandRegistration] {
        &self.commands
    }

    pub fn find(&self, id: &str) -> Option<&CommandRegistration> {
        self.commands.iter().find(|command| command.id == id)
    }

    /// Handle of the dynamic command bound to `template_path`, if any.
    pub fn handle_for_template(&self, template_path: &str) -> Option<RegistrationHandle> {
        self.commands
            .iter()
            .find(|command| {
                matches!(
                    &command.action,
                    CommandAction::InstantiateTemplate { template_path: path }
                        if path == template_path
                )
            })
            .map(|command| command.handle)
    }

    /// Brings the dynamic per-template commands in line with the settings
    /// store: flagged templates gain a command, unflagged ones lose theirs.
    pub fn sync_templates(&mut self, settings: &VaultSettings) -> SyncOutcome {
        let mut outcome = SyncOutcome::default();

        let stale: Vec<(RegistrationHandle, String)> = self
            .commands
            .iter()
            .filter_map(|command| match &command.action {
                CommandAction::InstantiateTemplate { template_path }
                    if !is_flagged(settings, template_path) =>
                {
                    Some((command.handle, template_path.clone()))
                }
                _ => None,
            })
            .collect();
        for (handle, path) in stale {
            self.revoke(handle);
            outcome.unregistered.push(path);
        }

        for (path, config) in &settings.templates {
            if config.is_command_registered == Some(true)
                && self.handle_for_template(path).is_none()
            {
                self.register(
                    format!("create-{path}"),
                    format!("Create {}", config.name),
                    CommandAction::InstantiateTemplate {
                        template_path: path.clone(),
                    },
                );
                outcome.registered.push(path.clone());
            }
        }

        outcome
    }
}

fn is_flagged(settings: &VaultSettings, template_path: &str) -> bool {
    settings
        .templates
        .get(template_path)
        .and_then(|config| config.is_command_registered)
        .unwrap_or(false)
}
