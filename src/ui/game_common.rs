//! Shared UI pieces for the game scenes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Areas produced by [`split_game_frame`].
pub struct GameLayout {
    /// Main play area, left side inside the outer border.
    pub content: Rect,
    /// Two status lines under the play area.
    pub status_bar: Rect,
    /// Side panel on the right, not yet bordered.
    pub side_panel: Rect,
}

/// Draw the outer bordered frame every game shares and split the inside
/// into play area, status bar and side panel.
pub fn split_game_frame(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    side_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(side_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        side_panel: h_chunks[1],
    }
}

/// Two-line status bar: a centered message plus a centered key legend.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }
        let legend = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            legend,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

/// A centered modal box over the play area, used for pause and game over.
pub fn render_overlay(frame: &mut Frame, area: Rect, title: &str, lines: &[&str], color: Color) {
    let height = (lines.len() as u16 + 4).min(area.height);
    let width = area.width.saturating_sub(8).clamp(20, 46);
    let overlay = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
    .intersection(area);

    frame.render_widget(Clear, overlay);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let mut text = vec![Line::from("")];
    for line in lines {
        text.push(Line::from(*line));
    }
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

/// One row of tumbling confetti across the top of a scene, shown while a
/// game's celebration timer runs.
pub fn render_confetti_row(frame: &mut Frame, area: Rect) {
    if area.height < 1 {
        return;
    }
    const COLORS: [Color; 3] = [Color::Yellow, Color::Green, Color::Blue];
    const GLYPHS: [char; 4] = ['▀', '▄', '▌', '▐'];

    let mut spans = Vec::with_capacity(area.width as usize);
    for i in 0..area.width as usize {
        spans.push(Span::styled(
            GLYPHS[i % GLYPHS.len()].to_string(),
            Style::default().fg(COLORS[i % COLORS.len()]),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect { height: 1, ..area },
    );
}

/// Header line of filled/empty stars, e.g. `★ ★ ☆`.
pub fn stars_line(stars: u32, cap: u32) -> Line<'static> {
    let mut spans = Vec::new();
    for i in 0..cap {
        let (glyph, color) = if i < stars {
            ("★ ", Color::Yellow)
        } else {
            ("☆ ", Color::DarkGray)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Header line of remaining lives, e.g. `♥ ♥ ♡`.
pub fn lives_line(lives: u32, max: u32) -> Line<'static> {
    let mut spans = Vec::new();
    for i in 0..max {
        let (glyph, color) = if i < lives {
            ("♥ ", Color::Red)
        } else {
            ("♡ ", Color::DarkGray)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
    }
    Line::from(spans)
}
