use std::time::{Duration, Instant};

use crate::core::{Action, NotifyLevel};
use crate::shell::Shell;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

#[derive(Debug, Clone)]
pub struct App {
    pub shell: Shell,
    pub help_open: bool,
    pub should_quit: bool,
    pub status: Option<StatusMessage>,
    pub sidebar_width: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            shell: Shell::new(),
            help_open: false,
            should_quit: false,
            status: None,
            sidebar_width: crate::config::UiConfig::default().sidebar_width(),
        }
    }

    /// Apply one event. Each call completes before the next event is read.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Select(id) => self.select(id),
            Action::Next => {
                let page = self.shell.select_next();
                tracing::info!(id = page.id, label = page.label, "page selected");
            }
            Action::Prev => {
                let page = self.shell.select_prev();
                tracing::info!(id = page.id, label = page.label, "page selected");
            }
            Action::ToggleHelp => self.help_open = !self.help_open,
            Action::CloseOverlay => self.help_open = false,
            Action::Quit => self.should_quit = true,
        }
    }

    fn select(&mut self, id: usize) {
        match self.shell.select(id) {
            Ok(changed) => {
                let page = self.shell.active();
                tracing::info!(id = page.id, label = page.label, changed, "page selected");
            }
            Err(err) => {
                tracing::warn!(%err, "selection rejected");
                self.set_status(err.to_string(), NotifyLevel::Warn);
            }
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = self.status.as_ref() {
            if status.since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }
}
