//! Selection Cursor.
//!
//! Tracks the `(category, template)` position of the picker's keyboard
//! selection against a built [`TemplateIndex`]. Navigation wraps at every
//! boundary; moving between categories preserves the template position and
//! clamps it to the destination category's last entry. All operations are
//! no-ops against an empty index, and the cursor is reset to the first
//! template of the first category whenever the index is rebuilt.

use crate::index::{TemplateIndex, TemplateRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionCursor {
    category: usize,
    template: usize,
}

impl SelectionCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn position(&self) -> (usize, usize) {
        (self.category, self.template)
    }

    /// The template the cursor points at, if the index is non-empty.
    pub fn current<'a>(&self, index: &'a TemplateIndex) -> Option<&'a TemplateRef> {
        index.template_at(self.category, self.template)
    }

    /// Moves to the adjacent category, wrapping modulo the category count.
    pub fn navigate_category(&mut self, index: &TemplateIndex, direction: Direction) {
        let count = index.categories().len();
        if count == 0 {
            return;
        }
        self.category = match direction {
            Direction::Forward => (self.category + 1) % count,
            Direction::Backward => (self.category + count - 1) % count,
        };
        let len = index
            .category(self.category)
            .map(|group| group.templates.len())
            .unwrap_or(0);
        self.template = self.template.min(len.saturating_sub(1));
    }

    /// Moves within the current category; crossing a boundary continues
    /// into the adjacent category's first or last template.
    pub fn navigate_within_category(&mut self, index: &TemplateIndex, direction: Direction) {
        let count = index.categories().len();
        if count == 0 || index.total_templates() == 0 {
            return;
        }
        let len = index
            .category(self.category)
            .map(|group| group.templates.len())
            .unwrap_or(0);
        match direction {
            Direction::Forward => {
                if self.template + 1 < len {
                    self.template += 1;
                } else {
                    self.category = (self.category + 1) % count;
                    self.template = 0;
                }
            }
            Direction::Backward => {
                if self.template > 0 {
                    self.template -= 1;
                } else {
                    self.category = (self.category + count - 1) % count;
                    self.template = index
                        .category(self.category)
                        .map(|group| group.templates.len())
                        .unwrap_or(1)
                        .saturating_sub(1);
                }
            }
        }
    }

    /// Explicit set, used on pointer interaction. Returns `false` when the
    /// path is not in the current listing.
    pub fn select(&mut self, index: &TemplateIndex, path: &str) -> bool {
        match index.position_of(path) {
            Some((category, template)) => {
                self.category = category;
                self.template = template;
                true
            }
            None => false,
        }
    }
}
