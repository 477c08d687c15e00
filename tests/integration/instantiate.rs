use super::VaultFixture;
use anyhow::Result;
use chrono::NaiveDate;
use notestencil::engine::{create_from_template, DEFAULT_NOTE_NAME};
use notestencil::events::{read_events, EventType};
use notestencil::Notice;

const TEMPLATE: &str = "---\ntitle: Meeting\ncreated: 2020-01-01\ndue: someday\n---\n# Agenda\n\n- item\n";

fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn plain_instantiation_copies_the_template_byte_for_byte() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);
    vault.mkdir("Inbox");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;

    let note = plugin.create_from_template("Templates/Meeting.md")?;
    assert_eq!(note.name, DEFAULT_NOTE_NAME);
    assert_eq!(note.path, "Inbox/Untitled.md");
    assert!(note.date_fields_set.is_empty());
    assert_eq!(vault.read("Inbox/Untitled.md"), TEMPLATE);
    assert_eq!(vault.read("Templates/Meeting.md"), TEMPLATE);

    let events = read_events(plugin.context().data_dir())?;
    assert!(events
        .iter()
        .any(|event| event.event_type == EventType::NoteCreated));
    Ok(())
}

#[test]
fn title_format_names_the_note() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);
    vault.mkdir("Inbox");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;
    plugin.set_title_format("Templates/Meeting.md", Some("{{date}}-note".into()))?;

    let ctx = plugin.context();
    let note = create_from_template(
        &ctx.vault,
        &ctx.settings.settings,
        "Templates/Meeting.md",
        fixed_date(),
    )?;
    assert_eq!(note.name, "2024-03-15-note");
    assert_eq!(note.path, "Inbox/2024-03-15-note.md");
    Ok(())
}

#[test]
fn unset_target_folder_aborts_without_creating_anything() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);
    vault.mkdir("Inbox");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;

    let err = plugin
        .create_from_template("Templates/Meeting.md")
        .expect_err("instantiation should fail");
    assert!(matches!(
        err.downcast_ref::<Notice>(),
        Some(Notice::ConfigurationMissing(_))
    ));
    assert!(!vault.exists("Inbox/Untitled.md"));
    Ok(())
}

#[test]
fn vanished_target_folder_is_a_resource_error() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Gone".into()))?;

    let err = plugin
        .create_from_template("Templates/Meeting.md")
        .expect_err("instantiation should fail");
    assert!(matches!(
        err.downcast_ref::<Notice>(),
        Some(Notice::ResourceMissing(_))
    ));
    Ok(())
}

#[test]
fn missing_template_file_is_a_resource_error() {
    let vault = VaultFixture::new();
    vault.mkdir("Templates");
    let mut plugin = vault.plugin_with_folder("Templates");
    let err = plugin
        .create_from_template("Templates/Nope.md")
        .expect_err("instantiation should fail");
    assert!(matches!(
        err.downcast_ref::<Notice>(),
        Some(Notice::ResourceMissing(_))
    ));
}

#[test]
fn name_collisions_get_a_numeric_suffix() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);
    vault.mkdir("Inbox");
    vault.write("Inbox/Untitled.md", "already here\n");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;

    let note = plugin.create_from_template("Templates/Meeting.md")?;
    assert_eq!(note.name, "Untitled 1");
    assert_eq!(vault.read("Inbox/Untitled 1.md"), TEMPLATE);
    assert_eq!(vault.read("Inbox/Untitled.md"), "already here\n");
    Ok(())
}

#[test]
fn enabled_date_fields_are_stamped_with_the_given_date() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);
    vault.mkdir("Inbox");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;
    plugin.set_date_field("Templates/Meeting.md", "created", true)?;
    plugin.set_date_field("Templates/Meeting.md", "due", false)?;

    let ctx = plugin.context();
    let note = create_from_template(
        &ctx.vault,
        &ctx.settings.settings,
        "Templates/Meeting.md",
        fixed_date(),
    )?;
    assert_eq!(note.date_fields_set, vec!["created".to_string()]);

    let created = vault.read(&note.path);
    assert!(created.contains("created: 2024-03-15"));
    assert!(created.contains("due: someday"));
    assert!(created.contains("title: Meeting"));
    assert!(created.ends_with("# Agenda\n\n- item\n"));
    Ok(())
}

#[test]
fn flagged_fields_missing_from_the_template_are_skipped() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Meeting.md", TEMPLATE);
    vault.mkdir("Inbox");

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_target_folder("Templates/Meeting.md", Some("Inbox".into()))?;
    plugin.set_date_field("Templates/Meeting.md", "ghost", true)?;

    let note = plugin.create_from_template("Templates/Meeting.md")?;
    assert!(note.date_fields_set.is_empty());
    assert_eq!(vault.read(&note.path), TEMPLATE);
    Ok(())
}
