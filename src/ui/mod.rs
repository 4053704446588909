use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

pub mod layout;

use crate::app::App;
use crate::core::NotifyLevel;
use crate::pages::PageDescriptor;

pub const ACTIVE_MARKER: &str = "> ";
pub const INACTIVE_MARKER: &str = "  ";

pub fn active_style() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size(), app.sidebar_width);

    draw_sidebar(f, areas.sidebar, app);
    draw_content(f, areas.content, app);
    draw_status_line(f, areas.status_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size);
    }
}

fn nav_item(page: PageDescriptor, is_active: bool) -> ListItem<'static> {
    let (marker, style) = if is_active {
        (ACTIVE_MARKER, active_style())
    } else {
        (INACTIVE_MARKER, inactive_style())
    };
    ListItem::new(Line::from(vec![
        Span::raw(marker),
        Span::raw(page.label),
    ]))
    .style(style)
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .shell
        .descriptors()
        .map(|page| nav_item(page, app.shell.is_active(page.id)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Menu")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, area);
}

fn draw_content(f: &mut Frame, area: Rect, app: &App) {
    let page = app.shell.active();
    let content = app.shell.content();

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            content.heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title(page.label))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let page = app.shell.active();
    let mut spans = vec![
        Span::styled("Page ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", page.label)),
        Span::styled(
            "1-6 select  j/k move  ? help  q quit",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if let Some((text, level)) = app.status_text() {
        let color = match level {
            NotifyLevel::Info => Color::Green,
            NotifyLevel::Warn => Color::Yellow,
            NotifyLevel::Error => Color::Red,
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-6            Open page"),
        Line::from("  j / Down / Tab Next page"),
        Line::from("  k / Up         Previous page"),
        Line::from("  Mouse          Click or scroll the menu"),
        Line::from(""),
        Line::from("  ?              Toggle help"),
        Line::from("  Esc            Close help"),
        Line::from("  q              Quit"),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
