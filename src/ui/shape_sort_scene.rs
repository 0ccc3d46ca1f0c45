//! Shape Sort Dash scene.
//!
//! The game core thinks in arena-local pixels; this scene owns the mapping
//! to terminal cells. Every frame [`layout`] carves the screen, [`sync_arena`]
//! republishes the arena bounds and slot rectangles in pixels, and the same
//! layout maps mouse events back into pixel coordinates so the core never
//! sees a cell.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::games::shape_sort::logic::{self, ShapeSortEvent};
use crate::games::shape_sort::types::{
    Arena, Phase, Piece, PointerId, PxRect, ShapeKind, ShapeSortGame, Slot, STARS_PER_LEVEL,
    STARTING_LIVES,
};
use crate::ui::game_common;

/// Pixels represented by one terminal cell. Cells are roughly twice as tall
/// as they are wide, so a 72px piece comes out 6 cells by 3.
pub const CELL_PX_X: f64 = 12.0;
pub const CELL_PX_Y: f64 = 24.0;

/// Width of the outline tray on the right, in cells.
const TRAY_WIDTH: u16 = 14;

/// Each outline box in the tray, in cells.
const SLOT_WIDTH: u16 = 10;
const SLOT_HEIGHT: u16 = 4;

/// Screen regions for one frame. Pure function of the area and the slot
/// count, so the mouse path and the draw path always agree.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub header: Rect,
    pub arena_cells: Rect,
    pub status_bar: Rect,
    pub tray: Rect,
    /// One rect per entry of the game's slot plan, top to bottom. May be
    /// shorter than the plan on a cramped terminal.
    pub slot_cells: Vec<Rect>,
}

pub fn layout(area: Rect, slot_count: usize) -> SceneLayout {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(30), Constraint::Length(TRAY_WIDTH)])
        .split(inner);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(2),
        ])
        .split(columns[0]);

    let tray = columns[1];
    let mut slot_cells = Vec::new();
    let mut y = tray.y + 1;
    for _ in 0..slot_count {
        if y + SLOT_HEIGHT > tray.bottom() {
            break;
        }
        slot_cells.push(Rect {
            x: tray.x + 2,
            y,
            width: SLOT_WIDTH.min(tray.width.saturating_sub(3)),
            height: SLOT_HEIGHT,
        });
        y += SLOT_HEIGHT + 1;
    }

    SceneLayout {
        header: left[0],
        arena_cells: left[1],
        status_bar: left[2],
        tray,
        slot_cells,
    }
}

/// Rewrite the arena geometry from this frame's layout. Bounds and slot
/// rectangles are arena-local pixels; slots in the tray land to the right of
/// the arena width, which is fine because drags are unclamped.
pub fn sync_arena(arena: &mut Arena, scene: &SceneLayout, slot_plan: &[ShapeKind]) {
    let cells = scene.arena_cells;
    arena.bounds = Some((
        cells.width as f64 * CELL_PX_X,
        cells.height as f64 * CELL_PX_Y,
    ));
    arena.slots = slot_plan
        .iter()
        .zip(&scene.slot_cells)
        .map(|(&kind, rect)| Slot {
            kind,
            rect: cell_rect_to_px(cells, *rect),
        })
        .collect();
}

fn cell_rect_to_px(arena_cells: Rect, rect: Rect) -> PxRect {
    PxRect::new(
        (rect.x as f64 - arena_cells.x as f64) * CELL_PX_X,
        (rect.y as f64 - arena_cells.y as f64) * CELL_PX_Y,
        rect.width as f64 * CELL_PX_X,
        rect.height as f64 * CELL_PX_Y,
    )
}

/// Pixel position of a mouse event, arena-local, using cell centers.
fn mouse_to_px(arena_cells: Rect, column: u16, row: u16) -> (f64, f64) {
    (
        (column as f64 - arena_cells.x as f64 + 0.5) * CELL_PX_X,
        (row as f64 - arena_cells.y as f64 + 0.5) * CELL_PX_Y,
    )
}

fn button_source(button: MouseButton) -> PointerId {
    match button {
        MouseButton::Left => 0,
        MouseButton::Right => 1,
        MouseButton::Middle => 2,
    }
}

/// Topmost piece under a pixel position. Later spawns draw on top, so scan
/// from the back.
fn piece_at(game: &ShapeSortGame, px: f64, py: f64) -> Option<u32> {
    game.pieces
        .iter()
        .rev()
        .find(|p| p.rect().contains(px, py))
        .map(|p| p.id)
}

/// Translate a terminal mouse event into drag calls on the game core. Each
/// mouse button is its own input source, so two buttons can drag two pieces
/// at once.
pub fn handle_mouse(
    game: &mut ShapeSortGame,
    arena: &Arena,
    scene: &SceneLayout,
    event: MouseEvent,
) -> Vec<ShapeSortEvent> {
    let (px, py) = mouse_to_px(scene.arena_cells, event.column, event.row);
    match event.kind {
        MouseEventKind::Down(button) => {
            let source = button_source(button);
            if let Some(id) = piece_at(game, px, py) {
                logic::pointer_down(game, id, source, px, py);
            }
            Vec::new()
        }
        MouseEventKind::Drag(button) => {
            let source = button_source(button);
            if let Some(hold) = game.holds.get(&source).copied() {
                logic::pointer_move(game, hold.piece_id, source, px, py);
            }
            Vec::new()
        }
        MouseEventKind::Up(button) => {
            let source = button_source(button);
            let mut rng = rand::thread_rng();
            if let Some(hold) = game.holds.get(&source).copied() {
                logic::pointer_up(game, arena, hold.piece_id, source, &mut rng)
            } else {
                Vec::new()
            }
        }
        _ => Vec::new(),
    }
}

pub fn render(frame: &mut Frame, area: Rect, game: &ShapeSortGame) {
    let scene = layout(area, game.slot_plan.len());

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Shape Sort Dash ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    render_header(frame, scene.header, game);
    render_arena(frame, scene.arena_cells, game);
    render_tray(frame, &scene, game);
    render_status(frame, scene.status_bar, game);

    match game.phase {
        Phase::Paused => game_common::render_overlay(
            frame,
            scene.arena_cells,
            "Paused",
            &["Take a breather!", "", "p to keep playing"],
            Color::Yellow,
        ),
        Phase::GameOver => {
            let score_line = format!("You sorted {} shapes!", game.score);
            game_common::render_overlay(
                frame,
                scene.arena_cells,
                "Game Over",
                &[score_line.as_str(), "", "r to play again"],
                Color::Red,
            );
        }
        Phase::Playing => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, game: &ShapeSortGame) {
    let mut spans = vec![
        Span::styled(
            format!("Level {}", game.level),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Score {}", game.score),
            Style::default().fg(Color::White),
        ),
        Span::raw("  "),
    ];
    spans.extend(game_common::lives_line(game.lives, STARTING_LIVES).spans);
    spans.push(Span::raw(" "));
    spans.extend(game_common::stars_line(game.stars % STARS_PER_LEVEL, STARS_PER_LEVEL).spans);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_arena(frame: &mut Frame, cells: Rect, game: &ShapeSortGame) {
    if cells.height < 2 {
        return;
    }

    // Ground band along the bottom row.
    let ground = Rect {
        y: cells.bottom() - 1,
        height: 1,
        ..cells
    };
    let band: String = "▄".repeat(ground.width as usize);
    frame.render_widget(
        Paragraph::new(band).style(Style::default().fg(Color::Green)),
        ground,
    );

    if game.celebration_ms > 0.0 {
        game_common::render_confetti_row(frame, Rect { height: 1, ..cells });
    }

    for piece in &game.pieces {
        render_piece(frame, cells, piece);
    }
}

/// Sprite rows per kind, 6 cells wide by 3 tall to match the 72px piece box.
fn sprite(kind: ShapeKind) -> ([&'static str; 3], Color) {
    match kind {
        ShapeKind::Circle => ([" ████ ", "██████", " ████ "], Color::Yellow),
        ShapeKind::Square => (["██████", "██████", "██████"], Color::Cyan),
        ShapeKind::Triangle => (["  ██  ", " ████ ", "██████"], Color::Green),
        ShapeKind::Star => (["  ██  ", "██████", " ████ "], Color::Magenta),
    }
}

fn render_piece(frame: &mut Frame, cells: Rect, piece: &Piece) {
    let (rows, color) = sprite(piece.kind);
    let width = rows[0].chars().count() as u16;
    let height = rows.len() as u16;

    // Pieces can sit above the top edge or be dragged past any edge; clip to
    // the arena cell rect and slice the sprite to match.
    let cx = cells.x as i32 + (piece.x / CELL_PX_X).round() as i32;
    let cy = cells.y as i32 + (piece.y / CELL_PX_Y).round() as i32;
    let full = Rect {
        x: cx.clamp(0, u16::MAX as i32) as u16,
        y: cy.clamp(0, u16::MAX as i32) as u16,
        width,
        height,
    };
    if cx + width as i32 <= cells.x as i32 || cy + height as i32 <= cells.y as i32 {
        return;
    }
    let visible = full.intersection(cells);
    if visible.width == 0 || visible.height == 0 {
        return;
    }
    let skip_rows = (visible.y as i32 - cy).max(0) as usize;
    let skip_cols = (visible.x as i32 - cx).max(0) as usize;

    let style = if piece.held_by.is_some() {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let lines: Vec<Line> = rows
        .iter()
        .skip(skip_rows)
        .take(visible.height as usize)
        .map(|row| {
            let text: String = row
                .chars()
                .skip(skip_cols)
                .take(visible.width as usize)
                .collect();
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), visible);
}

fn render_tray(frame: &mut Frame, scene: &SceneLayout, game: &ShapeSortGame) {
    let block = Block::default()
        .title(" Sort! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(block, scene.tray);

    for (&kind, rect) in game.slot_plan.iter().zip(&scene.slot_cells) {
        let (_, color) = sprite(kind);
        let outline = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = outline.inner(*rect);
        frame.render_widget(outline, *rect);
        let label = Paragraph::new(kind.name())
            .style(Style::default().fg(color))
            .alignment(Alignment::Center);
        frame.render_widget(label, inner);
    }
}

fn render_status(frame: &mut Frame, area: Rect, game: &ShapeSortGame) {
    let (text, color) = match game.phase {
        Phase::GameOver => ("Out of lives!", Color::Red),
        Phase::Paused => ("Paused", Color::Yellow),
        Phase::Playing if game.celebration_ms > 0.0 => ("Level up! Faster now!", Color::Green),
        Phase::Playing => ("Drag each shape onto its outline", Color::Gray),
    };
    game_common::render_status_bar(
        frame,
        area,
        text,
        color,
        &[
            ("drag", "sort shapes"),
            ("p", "pause"),
            ("r", "restart"),
            ("Esc", "hub"),
        ],
    );
}
