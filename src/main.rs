use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use pageshell::app::App;
use pageshell::core::{Action, NotifyLevel};
use pageshell::terminal::{session_result, TerminalGuard};
use pageshell::{config, input, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "pageshell",
    version,
    about = "Pageshell: a terminal menu shell with six placeholder pages"
)]
struct Args {
    /// Config file (defaults to ~/.config/pageshell/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file. Logging is off without one.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Do not capture the mouse
    #[arg(long)]
    no_mouse: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let loaded = config::load(args.config.as_deref());
    let log_file = args.log_file.clone().or_else(|| loaded.config.log.file.clone());
    logging::init(log_file.as_deref(), loaded.config.log.filter())?;

    tracing::info!(config = ?loaded.path, "starting pageshell");

    let mut app = App::new();
    app.sidebar_width = loaded.config.ui.sidebar_width();
    if let Some(warning) = loaded.warning {
        tracing::warn!("{warning}; using defaults");
        app.set_status(warning, NotifyLevel::Warn);
    }
    let mouse = loaded.config.ui.mouse && !args.no_mouse;

    let mut guard = TerminalGuard::enter(io::stdout(), mouse)?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("creating terminal")
        .and_then(|mut terminal| run_app(&mut terminal, app));
    let restored = guard.restore();

    tracing::info!("pageshell stopped");

    let res = session_result(res, restored);
    if let Err(err) = &res {
        tracing::error!("{err:?}");
    }
    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) => input::map_key(&app, key),
                Event::Mouse(mouse) => input::map_mouse(&app, mouse, terminal.size()?),
                _ => Action::None,
            };
            app.apply(action);
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
