use super::VaultFixture;
use anyhow::Result;
use notestencil::config;
use notestencil::index::TemplateIndex;
use notestencil::picker::PickerSession;
use std::env;
use tempfile::TempDir;

#[test]
fn wire_shape_uses_camel_case_keys() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", "---\ncreated: x\n---\nbody\n");
    vault.mkdir("Inbox");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;
    plugin.set_title_format("Templates/Meeting.md", Some("{{date}}".into()))?;
    plugin.set_date_field("Templates/Meeting.md", "created", true)?;
    plugin.set_command_registered("Templates/Meeting.md", true)?;

    let raw = vault.read(".notestencil/settings.json");
    for key in [
        "templateFolder",
        "targetFolder",
        "titleFormat",
        "dateFields",
        "isCommandRegistered",
    ] {
        assert!(raw.contains(key), "missing {key} in {raw}");
    }
    Ok(())
}

#[test]
fn mutations_are_rewritten_wholesale_and_reload_intact() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", "body\n");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Archive".into()))?;
    drop(plugin);

    let reopened = vault.plugin();
    let config = reopened
        .context()
        .settings
        .template("Templates/Meeting.md")
        .expect("record missing after reload");
    assert_eq!(config.target_folder.as_deref(), Some("Archive"));
    assert_eq!(
        reopened.context().settings.settings.template_folder,
        "Templates"
    );
    Ok(())
}

#[test]
fn records_for_vanished_templates_are_retained() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", "body\n");
    vault.write("Templates/Keep.md", "body\n");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;

    vault.remove("Templates/Meeting.md");
    let listing = plugin.rescan()?;
    assert_eq!(listing.len(), 1);

    // The listing no longer offers the file, but its settings survive a
    // restore.
    let settings = &plugin.context().settings.settings;
    assert!(settings.templates.contains_key("Templates/Meeting.md"));
    let index = TemplateIndex::build(&listing, settings);
    let session = PickerSession::new(index);
    assert_eq!(session.current().unwrap().path, "Templates/Keep.md");
    Ok(())
}

#[test]
fn install_config_round_trips_the_active_vault() -> Result<()> {
    let home = TempDir::new()?;
    env::set_var("NOTESTENCIL_HOME", home.path());

    let vault = VaultFixture::new();
    let mut config = config::load_or_default()?;
    assert!(config.active_vault.is_none());
    config.active_vault = Some(vault.path().to_path_buf());
    config::save(&config)?;

    let reloaded = config::load_or_default()?;
    assert_eq!(reloaded.active_vault.as_deref(), Some(vault.path()));
    Ok(())
}
