//! Snack Math scene: Munchy the monster and a picnic plate of snacks.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::games::snack_math::types::{SnackMathGame, PLATE_COLS, STARS_PER_LEVEL};
use crate::ui::game_common;

pub fn render(frame: &mut Frame, area: Rect, game: &SnackMathGame) {
    let scene = game_common::split_game_frame(frame, area, " Snack Math ", Color::Yellow, 22);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // confetti
            Constraint::Length(2), // equation
            Constraint::Min(6),    // plate
        ])
        .split(scene.content);

    render_header(frame, rows[0], game);
    if game.celebration_ms > 0.0 {
        game_common::render_confetti_row(frame, rows[1]);
    }
    render_equation(frame, rows[2], game);
    render_plate(frame, rows[3], game);
    render_side_panel(frame, scene.side_panel, game);
    render_status(frame, scene.status_bar, game);
}

fn render_header(frame: &mut Frame, area: Rect, game: &SnackMathGame) {
    let mut spans = vec![
        Span::styled(
            format!("Level {}", game.level),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    spans.extend(game_common::stars_line(game.stars % STARS_PER_LEVEL, STARS_PER_LEVEL).spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_equation(frame: &mut Frame, area: Rect, game: &SnackMathGame) {
    let answer = if game.solved() {
        format!("{}", game.remaining())
    } else {
        "?".to_string()
    };
    let text = vec![
        Line::from(Span::styled(
            format!("{} - {} = {}", game.have, game.eat, answer),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Munchy wants {} snacks! Fed: {}", game.eat, game.eaten()),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(text), area);
}

fn render_plate(frame: &mut Frame, area: Rect, game: &SnackMathGame) {
    for (idx, &eaten) in game.items.iter().enumerate() {
        let col = (idx % PLATE_COLS) as u16;
        let row = (idx / PLATE_COLS) as u16;
        let cell = Rect {
            x: area.x + col * 5,
            y: area.y + row * 2,
            width: 4,
            height: 1,
        };
        if cell.y >= area.bottom() || cell.right() > area.right() {
            continue;
        }
        let glyph = if eaten { " ✖ " } else { game.snack_glyph() };
        let style = if idx == game.cursor {
            Style::default().bg(Color::Yellow).fg(Color::Black)
        } else if eaten {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        frame.render_widget(
            Paragraph::new(glyph).style(style).alignment(Alignment::Center),
            cell,
        );
    }
}

fn render_side_panel(frame: &mut Frame, area: Rect, game: &SnackMathGame) {
    let block = Block::default()
        .title(" Munchy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let face = if game.solved() { "(≧▽≦)" } else { "(o˘◡˘o)" };
    let mood = if game.solved() {
        "Yum! All full!"
    } else {
        "Feed me!"
    };
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            face,
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(mood),
        Line::from(""),
        Line::from(Span::styled(
            format!("Snack: {}", game.snack_glyph()),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled("t to change", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        inner,
    );
}

fn render_status(frame: &mut Frame, area: Rect, game: &SnackMathGame) {
    let (text, color) = if game.solved() {
        ("Solved! Press n for another snack problem", Color::Green)
    } else {
        ("Feed snacks to Munchy with Space or Enter", Color::Gray)
    };
    game_common::render_status_bar(
        frame,
        area,
        text,
        color,
        &[("n", "next"), ("t", "snack"), ("r", "restart"), ("Esc", "hub")],
    );
}
