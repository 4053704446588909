//! Key and mouse mapping

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use pageshell::app::App;
use pageshell::core::Action;
use pageshell::input::{map_key, map_mouse};
use ratatui::layout::Rect;

const SIZE: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn digits_select_pages() {
    let app = App::new();
    assert_eq!(map_key(&app, key(KeyCode::Char('1'))), Action::Select(0));
    assert_eq!(map_key(&app, key(KeyCode::Char('6'))), Action::Select(5));
    assert_eq!(map_key(&app, key(KeyCode::Char('0'))), Action::None);
    assert_eq!(map_key(&app, key(KeyCode::Char('7'))), Action::None);
}

#[test]
fn movement_keys() {
    let app = App::new();
    assert_eq!(map_key(&app, key(KeyCode::Char('j'))), Action::Next);
    assert_eq!(map_key(&app, key(KeyCode::Down)), Action::Next);
    assert_eq!(map_key(&app, key(KeyCode::Tab)), Action::Next);
    assert_eq!(map_key(&app, key(KeyCode::Char('k'))), Action::Prev);
    assert_eq!(map_key(&app, key(KeyCode::Up)), Action::Prev);
    assert_eq!(map_key(&app, key(KeyCode::BackTab)), Action::Prev);
}

#[test]
fn quit_and_help_keys() {
    let mut app = App::new();
    assert_eq!(map_key(&app, key(KeyCode::Char('q'))), Action::Quit);
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(map_key(&app, ctrl_c), Action::Quit);
    assert_eq!(map_key(&app, key(KeyCode::Char('?'))), Action::ToggleHelp);

    app.apply(Action::ToggleHelp);
    // navigation is blocked while help is open
    assert_eq!(map_key(&app, key(KeyCode::Char('3'))), Action::None);
    assert_eq!(map_key(&app, key(KeyCode::Esc)), Action::CloseOverlay);
}

#[test]
fn key_release_is_ignored() {
    let app = App::new();
    let release = KeyEvent {
        code: KeyCode::Char('2'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(map_key(&app, release), Action::None);
}

#[test]
fn clicking_menu_rows_selects() {
    let app = App::new();
    for idx in 0..6u16 {
        assert_eq!(map_mouse(&app, click(4, 1 + idx), SIZE), Action::Select(idx as usize));
    }
}

#[test]
fn clicks_outside_menu_rows_do_nothing() {
    let app = App::new();
    // border, empty menu space, content area, status line
    assert_eq!(map_mouse(&app, click(4, 0), SIZE), Action::None);
    assert_eq!(map_mouse(&app, click(4, 10), SIZE), Action::None);
    assert_eq!(map_mouse(&app, click(50, 2), SIZE), Action::None);
    assert_eq!(map_mouse(&app, click(4, 23), SIZE), Action::None);
}

#[test]
fn wheel_over_menu_moves() {
    let app = App::new();
    let scroll = |kind, column| MouseEvent {
        kind,
        column,
        row: 3,
        modifiers: KeyModifiers::NONE,
    };
    assert_eq!(map_mouse(&app, scroll(MouseEventKind::ScrollDown, 4), SIZE), Action::Next);
    assert_eq!(map_mouse(&app, scroll(MouseEventKind::ScrollUp, 4), SIZE), Action::Prev);
    assert_eq!(map_mouse(&app, scroll(MouseEventKind::ScrollUp, 50), SIZE), Action::None);
}

#[test]
fn click_then_apply_updates_shell() {
    let mut app = App::new();
    let action = map_mouse(&app, click(4, 4), SIZE);
    app.apply(action);
    assert_eq!(app.shell.active_id(), 3);
    assert_eq!(app.shell.content().heading, "This is the Resume page.");
}
