//! Picker session.
//!
//! One open picker modal: the index built from the latest scan plus the
//! selection cursor driving it. The index is built once per open and both
//! rendering and navigation read from it, so the categorized view and the
//! keyboard position can never drift apart. Committing hands the selected
//! template path back to the caller for instantiation.

use crate::cursor::{Direction, SelectionCursor};
use crate::index::{TemplateIndex, TemplateRef};

#[derive(Debug)]
pub struct PickerSession {
    index: TemplateIndex,
    cursor: SelectionCursor,
}

impl PickerSession {
    pub fn new(index: TemplateIndex) -> Self {
        Self {
            index,
            cursor: SelectionCursor::new(),
        }
    }

    pub fn index(&self) -> &TemplateIndex {
        &self.index
    }

    pub fn position(&self) -> (usize, usize) {
        self.cursor.position()
    }

    pub fn current(&self) -> Option<&TemplateRef> {
        self.cursor.current(&self.index)
    }

    pub fn move_category(&mut self, direction: Direction) {
        self.cursor.navigate_category(&self.index, direction);
    }

    pub fn move_template(&mut self, direction: Direction) {
        self.cursor.navigate_within_category(&self.index, direction);
    }

    /// Pointer selection. Returns `false` for paths not in the listing.
    pub fn select(&mut self, path: &str) -> bool {
        self.cursor.select(&self.index, path)
    }

    /// Path to instantiate, if anything is selected.
    pub fn commit(&self) -> Option<&str> {
        self.current().map(|template| template.path.as_str())
    }
}
