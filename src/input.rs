//! Terminal events to navigation actions

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::App;
use crate::core::Action;
use crate::pages::PAGE_COUNT;
use crate::ui::layout;

pub fn map_key(app: &App, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    if app.help_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') => Action::CloseOverlay,
            KeyCode::Char('q') => Action::Quit,
            _ => Action::None,
        };
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), mods) if mods.contains(KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) => Action::Quit,
        (KeyCode::Char('?'), _) => Action::ToggleHelp,
        (KeyCode::Char('j'), _) | (KeyCode::Down, _) | (KeyCode::Tab, _) => Action::Next,
        (KeyCode::Char('k'), _) | (KeyCode::Up, _) | (KeyCode::BackTab, _) => Action::Prev,
        (KeyCode::Char(c), _) => match c.to_digit(10) {
            Some(n) if (1..=PAGE_COUNT).contains(&(n as usize)) => Action::Select(n as usize - 1),
            _ => Action::None,
        },
        _ => Action::None,
    }
}

pub fn map_mouse(app: &App, mouse: MouseEvent, size: Rect) -> Action {
    if app.help_open {
        return Action::None;
    }
    let areas = layout::areas(size, app.sidebar_width);
    let over_sidebar = layout::rect_contains(areas.sidebar, mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout::nav_row_at(areas, mouse.column, mouse.row, PAGE_COUNT)
                .map_or(Action::None, Action::Select)
        }
        MouseEventKind::ScrollDown if over_sidebar => Action::Next,
        MouseEventKind::ScrollUp if over_sidebar => Action::Prev,
        _ => Action::None,
    }
}
