//! Fixed page catalog and content resolution
//!
//! Descriptors and their content functions live in one ordered table, so
//! every navigation control has exactly one page behind it.

use crate::error::ShellError;

/// Static record pairing a page identifier with its menu label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageDescriptor {
    pub id: usize,
    pub label: &'static str,
}

/// Placeholder output for one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Content {
    pub heading: &'static str,
}

/// Catalog entry: descriptor plus the function producing its content
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub descriptor: PageDescriptor,
    pub render: fn() -> Content,
}

pub const PAGE_COUNT: usize = 6;

/// Page shown on startup (Projects)
pub const DEFAULT_PAGE: usize = 1;

pub const PAGES: [Page; PAGE_COUNT] = [
    page(0, "Settings", settings),
    page(1, "Projects", projects),
    page(2, "Badges", badges),
    page(3, "Resume", resume),
    page(4, "Portfolio", portfolio),
    page(5, "Help", help),
];

const fn page(id: usize, label: &'static str, render: fn() -> Content) -> Page {
    Page {
        descriptor: PageDescriptor { id, label },
        render,
    }
}

pub fn descriptor(id: usize) -> Option<PageDescriptor> {
    PAGES
        .iter()
        .find(|page| page.descriptor.id == id)
        .map(|page| page.descriptor)
}

/// Map a page id to its content
pub fn resolve_content(id: usize) -> Result<Content, ShellError> {
    PAGES
        .iter()
        .find(|page| page.descriptor.id == id)
        .map(|page| (page.render)())
        .ok_or(ShellError::UnknownPage(id))
}

fn settings() -> Content {
    Content {
        heading: "This is the Settings page.",
    }
}

fn projects() -> Content {
    Content {
        heading: "This is the Projects page.",
    }
}

fn badges() -> Content {
    Content {
        heading: "This is the Badges page.",
    }
}

fn resume() -> Content {
    Content {
        heading: "This is the Resume page.",
    }
}

fn portfolio() -> Content {
    Content {
        heading: "This is the Portfolio page.",
    }
}

fn help() -> Content {
    Content {
        heading: "This is the Help page.",
    }
}
