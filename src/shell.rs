//! Selector shell: which page is active

use crate::error::ShellError;
use crate::pages::{self, Content, PageDescriptor, DEFAULT_PAGE, PAGES, PAGE_COUNT};

/// Holds the active page id. Always one of the catalog ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shell {
    active_id: usize,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            active_id: DEFAULT_PAGE,
        }
    }

    pub fn active_id(&self) -> usize {
        self.active_id
    }

    pub fn active(&self) -> PageDescriptor {
        PAGES[self.active_id].descriptor
    }

    pub fn is_active(&self, id: usize) -> bool {
        self.active_id == id
    }

    /// Navigation controls in menu order
    pub fn descriptors(&self) -> impl Iterator<Item = PageDescriptor> {
        PAGES.iter().map(|page| page.descriptor)
    }

    /// Activate `id`. Returns whether the selection changed.
    pub fn select(&mut self, id: usize) -> Result<bool, ShellError> {
        if pages::descriptor(id).is_none() {
            return Err(ShellError::UnknownPage(id));
        }
        let changed = self.active_id != id;
        self.active_id = id;
        Ok(changed)
    }

    pub fn select_next(&mut self) -> PageDescriptor {
        self.active_id = (self.active_id + 1) % PAGE_COUNT;
        self.active()
    }

    pub fn select_prev(&mut self) -> PageDescriptor {
        self.active_id = (self.active_id + PAGE_COUNT - 1) % PAGE_COUNT;
        self.active()
    }

    pub fn content(&self) -> Content {
        (PAGES[self.active_id].render)()
    }
}
