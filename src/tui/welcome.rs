//! The landing screen: title, theme carousel, how-to, and one secret.

use super::app::Welcome;
use super::ui::{center_rect, palette};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the welcome screen.
pub fn draw(frame: &mut Frame, welcome: &Welcome) {
    let area = center_rect(frame.area(), 56, 20);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Title
            Constraint::Length(6), // Theme carousel
            Constraint::Length(6), // How to play
            Constraint::Length(2), // Play prompt
            Constraint::Length(2), // Secret
        ])
        .split(area);

    let carousel_theme = welcome.carousel();
    let colors = palette(carousel_theme);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "T I C - T A C - T O E",
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "play with a friend or against the computer",
            Style::default().fg(colors.grid),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let preview = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " X ",
                Style::default().fg(colors.x).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                " O ",
                Style::default().fg(colors.o).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors.grid))
            .title(format!(" Theme preview: {carousel_theme} ")),
    );
    frame.render_widget(preview, chunks[1]);

    let howto = Paragraph::new(vec![
        Line::from("1. Pick a theme and game mode."),
        Line::from("2. Use arrows and Enter/Space, or the digits 1-9."),
        Line::from("3. Get three in a row to win."),
        Line::from("4. Scores are saved until you reset them."),
    ])
    .alignment(Alignment::Center)
    .style(Style::default().fg(colors.text))
    .block(Block::default().borders(Borders::NONE));
    frame.render_widget(howto, chunks[2]);

    let play = Paragraph::new(Span::styled(
        "Press Enter to play · q to quit",
        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(play, chunks[3]);

    if welcome.konami_found() {
        let secret = Paragraph::new("You found the Konami code! Unlimited luck to you!")
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors.o).add_modifier(Modifier::ITALIC));
        frame.render_widget(secret, chunks[4]);
    }
}
