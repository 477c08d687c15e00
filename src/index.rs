//! Category/Template Index.
//!
//! Groups the scanner's flat listing under category labels with one
//! canonical ordering: the uncategorized group (empty label) first, the
//! remaining categories alphabetically, and templates alphabetically by
//! display name within each group. The sort happens once at build time;
//! both rendering and cursor navigation consume the built index, so the two
//! can never disagree.
//!
//! "Alphabetical" is Unicode case-folded comparison with the raw label as
//! tie-break. It is deterministic across platforms, which matters more here
//! than matching any particular system locale.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::scan::ScannedTemplate;
use crate::settings::VaultSettings;
use crate::vault::file_stem;

/// One entry of the built index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub path: String,
    pub name: String,
}

/// One category with its ordered templates.
#[derive(Debug, Clone)]
pub struct CategoryGroup {
    pub label: String,
    pub templates: Vec<TemplateRef>,
}

/// Immutable, fully sorted view of the scanned templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateIndex {
    categories: Vec<CategoryGroup>,
}

/// Canonical label comparator used for categories and display names.
pub fn compare_labels(a: &str, b: &str) -> Ordering {
    let folded_a = a.to_lowercase();
    let folded_b = b.to_lowercase();
    folded_a.cmp(&folded_b).then_with(|| a.cmp(b))
}

impl TemplateIndex {
    /// Builds the index from a scan listing. Display names come from the
    /// settings records, falling back to the file stem for paths the store
    /// has not seen.
    pub fn build(listing: &[ScannedTemplate], settings: &VaultSettings) -> Self {
        let mut groups: BTreeMap<String, Vec<TemplateRef>> = BTreeMap::new();
        for scanned in listing {
            let name = settings
                .templates
                .get(&scanned.path)
                .map(|config| config.name.clone())
                .unwrap_or_else(|| file_stem(&scanned.path).to_string());
            groups.entry(scanned.category.clone()).or_default().push(TemplateRef {
                path: scanned.path.clone(),
                name,
            });
        }

        let mut labels: Vec<String> = groups.keys().cloned().collect();
        labels.sort_by(|a, b| match (a.is_empty(), b.is_empty()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_labels(a, b),
        });

        let categories = labels
            .into_iter()
            .map(|label| {
                let mut templates = groups.remove(&label).unwrap_or_default();
                templates.sort_by(|a, b| {
                    compare_labels(&a.name, &b.name).then_with(|| a.path.cmp(&b.path))
                });
                CategoryGroup { label, templates }
            })
            .collect();

        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> &[CategoryGroup] {
        &self.categories
    }

    pub fn category(&self, index: usize) -> Option<&CategoryGroup> {
        self.categories.get(index)
    }

    pub fn template_at(&self, category: usize, template: usize) -> Option<&TemplateRef> {
        self.categories.get(category)?.templates.get(template)
    }

    pub fn total_templates(&self) -> usize {
        self.categories.iter().map(|c| c.templates.len()).sum()
    }

    /// Position of the template with the given path, if listed.
    pub fn position_of(&self, path: &str) -> Option<(usize, usize)> {
        for (category_index, group) in self.categories.iter().enumerate() {
            if let Some(template_index) =
                group.templates.iter().position(|t| t.path == path)
            {
                return Some((category_index, template_index));
            }
        }
        None
    }
}
