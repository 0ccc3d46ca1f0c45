//! Number Garden scene: a seed grid for counting rounds, two pots for
//! addition rounds.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::games::number_garden::types::{
    GardenMode, NumberGardenGame, PotSide, GRID_COLS, GRID_SIZE, STAR_CAP,
};
use crate::ui::game_common;

pub fn render(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let scene = game_common::split_game_frame(frame, area, " Number Garden ", Color::Green, 22);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // confetti
            Constraint::Length(2), // prompt
            Constraint::Min(6),    // grid or pots
        ])
        .split(scene.content);

    render_header(frame, rows[0], game);
    if game.celebration_ms > 0.0 {
        game_common::render_confetti_row(frame, rows[1]);
    }
    match game.mode {
        GardenMode::Count => {
            render_count_prompt(frame, rows[2], game);
            render_grid(frame, rows[3], game);
        }
        GardenMode::Add => {
            render_add_prompt(frame, rows[2], game);
            render_pots(frame, rows[3], game);
        }
    }

    render_side_panel(frame, scene.side_panel, game);
    render_status(frame, scene.status_bar, game);
}

fn render_header(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let mut spans = vec![
        Span::styled(
            format!("Level {}", game.level),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    spans.extend(game_common::stars_line(game.stars, STAR_CAP).spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_count_prompt(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("Plant exactly {} seeds!", game.target),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("Planted: {} / {}", game.planted(), game.target),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(prompt, area);
}

fn render_grid(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    // Each hole takes 4 columns by 2 rows.
    for idx in 0..GRID_SIZE {
        let col = (idx % GRID_COLS) as u16;
        let row = (idx / GRID_COLS) as u16;
        let cell = Rect {
            x: area.x + col * 5,
            y: area.y + row * 2,
            width: 4,
            height: 1,
        };
        if cell.y >= area.bottom() || cell.right() > area.right() {
            continue;
        }
        let glyph = if game.holes[idx] { "🌱" } else { "(·)" };
        let style = if idx == game.cursor {
            Style::default().bg(Color::Green).fg(Color::Black)
        } else if game.holes[idx] {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(glyph).style(style).alignment(Alignment::Center),
            cell,
        );
    }
}

fn render_add_prompt(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let answer = if game.addition_done() {
        format!("{}", game.a + game.b)
    } else {
        "?".to_string()
    };
    let prompt = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} + {} = {}", game.a, game.b, answer),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Fill each pot with the right number of seeds",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(prompt, area);
}

fn render_pots(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    render_pot(frame, halves[0], game, PotSide::Left);
    render_pot(frame, halves[1], game, PotSide::Right);
}

fn render_pot(frame: &mut Frame, area: Rect, game: &NumberGardenGame, side: PotSide) {
    let (label, want, have) = match side {
        PotSide::Left => ("Left pot", game.a, game.pot_left),
        PotSide::Right => ("Right pot", game.b, game.pot_right),
    };
    let selected = game.selected_pot == side;
    let border = if selected { Color::Yellow } else { Color::DarkGray };
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let full = have == want;
    let seeds = "● ".repeat(have as usize);
    let text = vec![
        Line::from(Span::styled(
            format!("wants {}", want),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            seeds,
            Style::default().fg(if full { Color::Green } else { Color::White }),
        )),
        Line::from(Span::styled(
            format!("{} seeds", have),
            Style::default().fg(if full { Color::Green } else { Color::Gray }),
        )),
    ];
    frame.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), inner);
}

fn render_side_panel(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let block = Block::default()
        .title(" How to play ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = match game.mode {
        GardenMode::Count => vec![
            Line::from("Move with the"),
            Line::from("arrow keys and"),
            Line::from("plant seeds with"),
            Line::from("Space or Enter."),
            Line::from(""),
            Line::from("Tap a sprout to"),
            Line::from("dig it back up."),
        ],
        GardenMode::Add => vec![
            Line::from("←→ picks a pot,"),
            Line::from("↑↓ adds or takes"),
            Line::from("away a seed."),
            Line::from(""),
            Line::from("Match both pots"),
            Line::from("to the sum!"),
        ],
    };
    frame.render_widget(
        Paragraph::new(lines).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

fn render_status(frame: &mut Frame, area: Rect, game: &NumberGardenGame) {
    let (text, color) = if game.goal_met() {
        ("Wonderful! Press n for the next round", Color::Green)
    } else {
        match game.mode {
            GardenMode::Count => ("Count carefully...", Color::Gray),
            GardenMode::Add => ("Fill the pots to match the sum", Color::Gray),
        }
    };
    game_common::render_status_bar(
        frame,
        area,
        text,
        color,
        &[("n", "next"), ("r", "restart"), ("Esc", "hub")],
    );
}
