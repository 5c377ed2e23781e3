//! folioterm: a single-page studio portfolio rendered in the terminal.

mod config;
mod event_loop;
mod hit_regions;
mod input;
mod layout;
mod render;
mod theme;

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use clap::Parser;
use crossbeam_channel::bounded;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::ViewerConfig;
use crate::event_loop::App;
use crate::input::{spawn_input_thread, INPUT_CHANNEL_CAPACITY};
use crate::theme::{apply_theme_file, load_theme_file, ThemeColors};

fn main() -> Result<()> {
    let config = ViewerConfig::parse();
    folioterm::init_logging(config.logging_enabled());
    folioterm::init_tracing(config.tracing_enabled());

    let colors = resolve_colors(&config)?;
    let (cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;

    let mut terminal = setup_terminal()?;
    let (tx, rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input = spawn_input_thread(tx);

    let mut app = App::new(
        cols,
        rows,
        colors,
        config.mailto_to.clone(),
        config.reduced_motion,
    );
    tracing::info!(cols, rows, theme = %config.effective_theme(), "viewer started");

    let result = event_loop::run(&mut terminal, &mut app, &rx);
    restore_terminal(&mut terminal);

    if config.logging_enabled() {
        eprintln!("debug log: {}", folioterm::log_file_path().display());
    }
    result
}

fn resolve_colors(config: &ViewerConfig) -> Result<ThemeColors> {
    let mut colors = config.effective_theme().colors();
    if let Some(path) = config.theme_file.as_ref() {
        let file = load_theme_file(path)?;
        if let Some(name) = file.meta.name.as_deref() {
            folioterm::log_debug(&format!("theme file '{name}' applied"));
        }
        colors = apply_theme_file(colors, &file);
    }
    Ok(colors)
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(err).context("failed to enter the alternate screen");
    }
    let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            return Err(err).context("failed to initialize the terminal");
        }
    };
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) {
    let _ = disable_raw_mode();
    let _ = execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    );
    let _ = terminal.show_cursor();
}
