//! UI rendering helpers for the terminal user interface.
//!
//! One screen: a header, three read-only metadata lines, a transport
//! line, the key help and a transient notice.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::audio::PlayerState;
use crate::config::UiSettings;
use crate::session::PlaybackSession;

/// Render one frame of the single-screen controller.
pub fn draw(f: &mut Frame, session: &PlaybackSession, ui: &UiSettings) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(5), // metadata
            Constraint::Length(3), // transport
            Constraint::Length(3), // key help
            Constraint::Min(1),    // notices
        ])
        .split(f.area());

    let header = Paragraph::new(ui.header_text.clone())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let metadata = Paragraph::new(vec![
        Line::from(format!("Artist: {}", session.metadata.artist)),
        Line::from(format!("Title:  {}", session.metadata.title)),
        Line::from(format!("Album:  {}", session.metadata.album)),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Now picked "));
    f.render_widget(metadata, chunks[1]);

    let transport = Paragraph::new(transport_text(session))
        .alignment(Alignment::Center)
        .style(transport_style(session))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(transport, chunks[2]);

    let help = Paragraph::new("[r] random track | [space/p] play/pause | [q] quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[3]);

    if let Some(notice) = &session.notice {
        let notice = Paragraph::new(notice.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::ITALIC));
        f.render_widget(notice, chunks[4]);
    }
}

// The affordance always advertises the action pressing it would take next:
// a play icon while paused (including right after a restore), a pause icon
// while playing.
fn transport_text(session: &PlaybackSession) -> &'static str {
    match session.state {
        PlayerState::Playing => "⏸  playing",
        PlayerState::Paused | PlayerState::Ready => "▶  paused",
        PlayerState::Preparing => "…  preparing",
        PlayerState::Idle => "▶  no track loaded",
        PlayerState::Error => "▶  nothing loaded",
    }
}

fn transport_style(session: &PlaybackSession) -> Style {
    if session.controls_enabled {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    }
}
