use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::session::SessionController;
use crate::ui;

const TICK: Duration = Duration::from_millis(50);

/// Main terminal event loop: applies pending engine readiness events,
/// redraws and handles input. Returns when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    controller: &mut SessionController,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        controller.poll_engine();

        terminal.draw(|f| ui::draw(f, controller.session(), &settings.ui))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('r') => controller.select_random(),
                    KeyCode::Char('p') | KeyCode::Char(' ') => controller.toggle(),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}
