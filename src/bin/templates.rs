use anyhow::Result;
use notestencil::index::TemplateIndex;
use notestencil::TemplatePlugin;

/// Scans the active vault's template folder and prints the categorized
/// index the picker would show.
fn main() -> Result<()> {
    let mut plugin = TemplatePlugin::new()?;
    let listing = plugin.rescan()?;
    let index = TemplateIndex::build(&listing, &plugin.context().settings.settings);

    if index.is_empty() {
        println!("No templates found.");
        return Ok(());
    }

    for group in index.categories() {
        let label = if group.label.is_empty() {
            "(uncategorized)"
        } else {
            &group.label
        };
        println!("{label}");
        for template in &group.templates {
            println!("  {}  ({})", template.name, template.path);
        }
    }
    println!("{} templates total.", index.total_templates());
    Ok(())
}
