//! TUI rendering with ratatui
//!
//! Tile grid, virtual keyboard, and status bar for the game interface.

use super::app::{App, Message, MessageStyle};
use crate::core::{COLUMNS, Cell, ROWS, Verdict};
use crate::engine::GameStatus;
use crate::output::formatters::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(ROWS as u16 + 2), // Board
            Constraint::Length(5),               // Keyboard
            Constraint::Min(4),                  // Messages
            Constraint::Length(3),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(cell: Cell) -> Style {
    match cell.verdict() {
        Verdict::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Misplaced => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        Verdict::Unchecked => Style::default().add_modifier(Modifier::BOLD),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .state
        .board()
        .rows()
        .map(|row| {
            let mut spans = Vec::with_capacity(COLUMNS * 2);
            for &cell in row {
                let text = match cell.letter() {
                    Some(letter) => format!(" {} ", char::from(letter)),
                    None => " _ ".to_string(),
                };
                spans.push(Span::styled(text, tile_style(cell)));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn key_style(status: Verdict) -> Style {
    match status {
        Verdict::Correct => Style::default()
            .fg(Color::White)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Verdict::Misplaced => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Verdict::Wrong => Style::default().fg(Color::White).bg(Color::DarkGray),
        Verdict::Unchecked => Style::default(),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let letters = app.state.letters();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!(" {letter} "),
                    key_style(letters.get(letter as u8)),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app.messages.iter().map(message_line).collect();

    let messages = Paragraph::new(lines).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(messages, area);
}

fn message_line(message: &Message) -> Line<'_> {
    let style = match message.style {
        MessageStyle::Info => Style::default().fg(Color::Cyan),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    Line::from(Span::styled(message.text.as_str(), style))
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let controls = match app.state.status() {
        GameStatus::InProgress => {
            "Letters: guess | Enter: submit | Backspace: delete | Ctrl-N: new | Esc: quit"
        }
        GameStatus::Won | GameStatus::Lost => "n: new game | q: quit",
    };
    let won = app.stats.games_won;
    let played = app.stats.total_games;

    let status = Paragraph::new(format!("{controls}  |  Won {won}/{played}"))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
