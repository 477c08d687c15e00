use super::VaultFixture;
use anyhow::Result;
use notestencil::frontmatter::date_field_candidates;

const TEMPLATE: &str = "---\ntitle: Weekly review\ntags:\n  - review\naliases:\n  - weekly\ncssclasses:\n  - wide\ncreated: 2020-01-01\ndue: someday\n---\n# Review\n";

#[test]
fn resolver_excludes_exactly_the_blocklist() {
    let candidates = date_field_candidates(TEMPLATE);
    let keys: Vec<&str> = candidates.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["created", "due", "title"]);
    assert!(candidates.values().all(|enabled| !enabled));
}

#[test]
fn notes_without_front_matter_have_no_candidates() {
    assert!(date_field_candidates("# Just a heading\n").is_empty());
}

#[test]
fn toggles_overlay_stored_selections_on_the_candidates() -> Result<()> {
    let vault = VaultFixture::new();
    vault.write("Templates/Review.md", TEMPLATE);

    let mut plugin = vault.plugin_with_folder("Templates");
    plugin.rescan()?;
    plugin.set_date_field("Templates/Review.md", "created", true)?;

    let toggles = plugin.date_field_toggles("Templates/Review.md")?;
    assert_eq!(toggles.get("created"), Some(&true));
    assert_eq!(toggles.get("due"), Some(&false));
    assert_eq!(toggles.get("title"), Some(&false));
    assert!(!toggles.contains_key("tags"));
    Ok(())
}
