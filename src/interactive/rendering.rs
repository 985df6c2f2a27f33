//! TUI rendering with ratatui
//!
//! Board, on-screen keyboard, message line and session statistics.

use super::app::App;
use crate::config::{COLS, KEY_ROWS, ROWS};
use crate::core::{KeyStatus, LetterStatus};
use crate::game::{Cell, Phase, Tone};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(ROWS as u16 * 2 + 1), // Board
            Constraint::Length(3),                    // Message
            Constraint::Length(5),                    // Keyboard
            Constraint::Length(3),                    // Status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let board_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Distribution
        ])
        .split(chunks[1]);

    render_board(f, app, now, board_chunks[0]);
    render_distribution(f, app, board_chunks[1]);
    render_message(f, app, now, chunks[2]);
    render_keyboard(f, app, now, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
        LetterStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        LetterStatus::Absent => Style::new().fg(Color::White).bg(Color::DarkGray),
    }
}

fn tile(cell: Cell) -> Span<'static> {
    match (cell.letter, cell.status) {
        (Some(letter), Some(status)) => Span::styled(
            format!(" {letter} "),
            status_style(status).add_modifier(Modifier::BOLD),
        ),
        (Some(letter), None) => Span::styled(
            format!("[{letter}]"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        (None, _) => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
    }
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let round = app.session.round();
    let mut lines = Vec::with_capacity(ROWS * 2);

    for row in 0..ROWS {
        let mut spans = Vec::with_capacity(COLS * 2);
        for col in 0..COLS {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(tile(app.cell_view(row, col, now)));
        }
        lines.push(Line::from(spans));
        if row + 1 < ROWS {
            lines.push(Line::default());
        }
    }

    let settled = app.reveal.is_none();
    let title = match round.phase() {
        Phase::Lost if settled => format!(" Answer: {} ", round.secret()),
        Phase::Won if settled => format!(" Solved in {}/{ROWS} ", round.attempts()),
        _ => format!(" Guess {}/{ROWS} ", (round.attempts() + 1).min(ROWS)),
    };

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_distribution(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.session.stats();
    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    let width = usize::from(area.width.saturating_sub(10)).max(1);

    let lines: Vec<Line> = stats
        .distribution
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let filled = (count * width / max).max(usize::from(count > 0));
            Line::from(vec![
                Span::raw(format!("{} ", i + 1)),
                Span::styled("█".repeat(filled), Style::default().fg(Color::Green)),
                Span::raw(format!(" {count}")),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Guess Distribution ")
            .borders(Borders::ALL),
    );
    f.render_widget(paragraph, area);
}

fn render_message(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let content = app.session.visible_message(now).map_or_else(Line::default, |msg| {
        let style = match msg.tone {
            Tone::Info => Style::default().fg(Color::White),
            Tone::Warn => Style::default().fg(Color::Yellow),
            Tone::Win => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Tone::Lose => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        };
        Line::from(Span::styled(msg.text.clone(), style))
    });

    let message = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Unused => Style::new().fg(Color::Black).bg(Color::Gray),
        KeyStatus::Absent => Style::new().fg(Color::Gray).bg(Color::DarkGray),
        KeyStatus::Present => Style::new().fg(Color::Black).bg(Color::Yellow),
        KeyStatus::Correct => Style::new().fg(Color::Black).bg(Color::Green),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let keyboard = app.keyboard_view(now);

    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for (i, &label) in row.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                let status = match label.as_bytes() {
                    &[letter] => keyboard.status(letter),
                    _ => KeyStatus::Unused,
                };
                let mut style = key_style(status);
                if app.is_pressed(label, now) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(format!(" {label} "), style));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats = app.session.stats();
    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {} (best {})",
        stats.played,
        stats.win_rate(),
        stats.current_streak,
        stats.best_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let help = Paragraph::new("Enter: Submit | Ctrl-N: New Word | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
