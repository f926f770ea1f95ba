//! Stateless rendering for the game screen.

use crate::game::{Cell, GameMode, Mark, Outcome, Theme};
use crate::store::StateStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;

/// Terminal colors for a theme identifier.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Foreground for X marks.
    pub x: Color,
    /// Foreground for O marks.
    pub o: Color,
    /// Status and scoreboard text.
    pub text: Color,
    /// Board grid lines.
    pub grid: Color,
}

/// Maps a theme identifier to terminal colors.
pub fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Neon => Palette {
            x: Color::Magenta,
            o: Color::Cyan,
            text: Color::LightMagenta,
            grid: Color::DarkGray,
        },
        Theme::Nature => Palette {
            x: Color::Red,
            o: Color::Green,
            text: Color::Yellow,
            grid: Color::Green,
        },
        Theme::Retro => Palette {
            x: Color::LightYellow,
            o: Color::LightBlue,
            text: Color::White,
            grid: Color::Magenta,
        },
    }
}

/// Renders the whole frame, dispatching on the active screen.
pub fn draw<S: StateStore>(frame: &mut Frame, app: &App<S>) {
    match app.screen() {
        super::app::Screen::Welcome => super::welcome::draw(frame, app.welcome()),
        super::app::Screen::Game => draw_game(frame, app),
    }
}

fn draw_game<S: StateStore>(frame: &mut Frame, app: &App<S>) {
    let machine = app.machine();
    let colors = palette(machine.theme());
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Mode + theme
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Scoreboard
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(colors.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let mode_line = Paragraph::new(format!(
        "{}  ·  {} theme  ·  sound {}",
        machine.mode().name(),
        machine.theme(),
        if app.muted() { "off" } else { "on" },
    ))
    .style(Style::default().fg(colors.grid))
    .alignment(Alignment::Center);
    frame.render_widget(mode_line, chunks[1]);

    draw_board(frame, chunks[2], app, colors);

    let status = Paragraph::new(status_message(app))
        .style(Style::default().fg(colors.text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let scores = machine.scores();
    let scoreboard = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("X: {}", scores.x()),
            Style::default().fg(colors.x).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("O: {}", scores.o()),
            Style::default().fg(colors.o).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Ties: {}", scores.ties()),
            Style::default().fg(colors.text),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(scoreboard, chunks[4]);

    let help = Paragraph::new(
        "arrows move · enter/space place · 1-9 direct · u undo · n new round · m mode · t theme · s sound · r reset all · q quit",
    )
    .style(Style::default().fg(colors.grid))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[5]);
}

fn status_message<S: StateStore>(app: &App<S>) -> String {
    let machine = app.machine();
    match machine.outcome() {
        Outcome::Won { winner, .. } => {
            format!("Winner: {winner}!  'n' starts a new round")
        }
        Outcome::Draw => "Round ended in a tie!  'n' starts a new round".to_string(),
        Outcome::InProgress => {
            let undo = if machine.can_undo() {
                "  ·  'u' undoes"
            } else {
                ""
            };
            if machine.mode() == GameMode::VersusComputer && machine.turn() == Mark::O {
                format!("Computer is thinking...{undo}")
            } else {
                format!("Next player: {}{undo}", machine.turn())
            }
        }
    }
}

fn draw_board<S: StateStore>(frame: &mut Frame, area: Rect, app: &App<S>, colors: Palette) {
    let board_area = center_rect(area, 23, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [(0, rows[0]), (1, rows[2]), (2, rows[4])] {
        draw_row(frame, chunk, app, colors, row);
    }
    for chunk in [rows[1], rows[3]] {
        let sep = Paragraph::new("───────┼───────┼───────")
            .style(Style::default().fg(colors.grid));
        frame.render_widget(sep, chunk);
    }
}

fn draw_row<S: StateStore>(frame: &mut Frame, area: Rect, app: &App<S>, colors: Palette, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    for (col, chunk) in [(0, cols[0]), (1, cols[2]), (2, cols[4])] {
        draw_cell(frame, chunk, app, colors, row * 3 + col);
    }
    for chunk in [cols[1], cols[3]] {
        let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(colors.grid));
        frame.render_widget(sep, chunk);
    }
}

fn draw_cell<S: StateStore>(frame: &mut Frame, area: Rect, app: &App<S>, colors: Palette, index: usize) {
    let machine = app.machine();

    let (symbol, base_style) = match machine.board().get(index) {
        Some(Cell::Taken(Mark::X)) => (
            "X",
            Style::default().fg(colors.x).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Taken(Mark::O)) => (
            "O",
            Style::default().fg(colors.o).add_modifier(Modifier::BOLD),
        ),
        _ => (" ", Style::default().fg(colors.grid)),
    };

    let winning = machine
        .outcome()
        .winning_line()
        .is_some_and(|line| line.contains(&index));
    let focused = machine.focus() == index;

    let style = if winning {
        base_style.add_modifier(Modifier::REVERSED)
    } else if focused {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {symbol}   "), style)),
        Line::from(""),
    ];
    let cell = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

/// Centers a fixed-size rectangle inside an area.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
