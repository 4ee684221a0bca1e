//! Process runtime: settings, logging, terminal setup and the event loop.

use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::PlaybackEngine;
use crate::library::LibraryGate;
use crate::session::{SessionController, SessionStore, default_state_path};

mod event_loop;
mod logging;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init();

    let root = resolve_library_root(&settings);
    let mut gate = LibraryGate::new(root, settings.library.clone());
    // Denial is recoverable: the first pick surfaces it to the user.
    gate.request_access();

    let engine = PlaybackEngine::new();
    let state_path = settings
        .session
        .state_path
        .clone()
        .or_else(default_state_path)
        .unwrap_or_else(|| PathBuf::from("session.toml"));
    let store = SessionStore::new(state_path);

    let mut controller = SessionController::new(gate, engine, store);
    if settings.session.restore_on_start {
        controller.restore();
    }

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut controller);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // The desktop analog of a suspend: persist once on the way out.
    controller.suspend();
    controller.shutdown();

    run_result
}

/// Library root: CLI argument, then config, then `~/Music`, then `.`.
fn resolve_library_root(settings: &crate::config::Settings) -> PathBuf {
    if let Some(arg) = env::args().nth(1) {
        return PathBuf::from(arg);
    }
    if let Some(root) = &settings.library.root {
        return root.clone();
    }
    if let Some(home) = env::var_os("HOME") {
        return PathBuf::from(home).join("Music");
    }
    PathBuf::from(".")
}
