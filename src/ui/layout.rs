use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub sidebar: Rect,
    pub content: Rect,
    pub status_line: Rect,
}

pub fn areas(size: Rect, sidebar_width: u16) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
        .split(vertical[0]);

    UiAreas {
        size,
        sidebar: main_chunks[0],
        content: main_chunks[1],
        status_line: vertical[1],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Index of the navigation row under (col, row), if any
pub fn nav_row_at(areas: UiAreas, col: u16, row: u16, rows: usize) -> Option<usize> {
    let inner = rect_inner(areas.sidebar);
    if !rect_contains(inner, col, row) {
        return None;
    }
    let idx = (row - inner.y) as usize;
    (idx < rows).then_some(idx)
}
