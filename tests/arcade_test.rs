//! Arcade-level tests: hub filtering, the two counting games played end to
//! end, and the terminal scene's cell-to-pixel mapping for Shape Sort.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::layout::Rect;

use jelly_arcade::games::number_garden::{logic as garden, GardenMode, NumberGardenGame, PotSide};
use jelly_arcade::games::shape_sort::types::{Arena, Piece, ShapeKind, ShapeSortGame};
use jelly_arcade::games::snack_math::{logic as snack, SnackMathGame};
use jelly_arcade::hub::{Discipline, HubState, CATALOG};
use jelly_arcade::ui::shape_sort_scene::{self, CELL_PX_X, CELL_PX_Y};

#[test]
fn hub_filters_compose() {
    let mut hub = HubState::new();

    // Age 5, Math only.
    hub.adjust_age(-2);
    assert_eq!(hub.age, 5);
    hub.cycle_discipline();
    assert_eq!(hub.discipline, Some(Discipline::Math));
    let ids: Vec<&str> = hub.filtered().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["number-garden", "snack-math"]);

    // Narrow further by search.
    for c in "snack".chars() {
        hub.push_query(c);
    }
    let ids: Vec<&str> = hub.filtered().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec!["snack-math"]);
    assert_eq!(hub.selected_entry().map(|e| e.id), Some("snack-math"));

    // Clearing the query restores the subject view.
    hub.clear_query();
    assert_eq!(hub.filtered().len(), 2);
}

#[test]
fn hub_selection_survives_filter_churn() {
    let mut hub = HubState::new();
    for _ in 0..CATALOG.len() {
        hub.select_next();
    }
    let last = hub.selected;
    assert_eq!(last, hub.filtered().len() - 1);

    // Cycle through every subject; the cursor must always point at a real
    // entry (or the list is empty and selection reports none).
    for _ in 0..=Discipline::ALL.len() {
        hub.cycle_discipline();
        let list = hub.filtered();
        if list.is_empty() {
            assert!(hub.selected_entry().is_none());
        } else {
            assert!(hub.selected < list.len());
            assert!(hub.selected_entry().is_some());
        }
    }
}

#[test]
fn number_garden_plays_a_full_level() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut game = NumberGardenGame::new(&mut rng);

    // Counting half: plant exactly the target.
    for idx in 0..game.target as usize {
        garden::tap_hole(&mut game, idx);
    }
    assert!(game.counting_done());
    assert!(game.celebration_ms > 0.0);
    garden::next_round(&mut game, &mut rng);
    assert_eq!(game.mode, GardenMode::Add);

    // Addition half: fill both pots.
    for _ in 0..game.a {
        garden::adjust_pot(&mut game, PotSide::Left, 1);
    }
    for _ in 0..game.b {
        garden::adjust_pot(&mut game, PotSide::Right, 1);
    }
    assert!(game.addition_done());
    garden::next_round(&mut game, &mut rng);

    assert_eq!(game.level, 2);
    assert_eq!(game.stars, 1);
    assert_eq!(game.mode, GardenMode::Count);
    assert_eq!(game.planted(), 0);
}

#[test]
fn snack_math_plays_a_full_round() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut game = SnackMathGame::new();

    let eat = game.eat as usize;
    for idx in 0..eat {
        snack::eat_one(&mut game, idx);
    }
    assert!(game.solved());
    assert_eq!(game.remaining(), game.have - game.eat);

    snack::next_round(&mut game, &mut rng);
    assert_eq!(game.stars, 1);
    assert_eq!(game.eaten(), 0);
    assert!(game.eat < game.have);
}

#[test]
fn scene_publishes_arena_geometry_in_pixels() {
    let game = ShapeSortGame::new();
    let scene = shape_sort_scene::layout(Rect::new(0, 0, 80, 30), game.slot_plan.len());
    let mut arena = Arena::default();
    shape_sort_scene::sync_arena(&mut arena, &scene, &game.slot_plan);

    let (w, h) = arena.bounds.expect("bounds set after sync");
    assert_eq!(w, scene.arena_cells.width as f64 * CELL_PX_X);
    assert_eq!(h, scene.arena_cells.height as f64 * CELL_PX_Y);

    // One slot per plan entry, kinds in plan order.
    assert_eq!(arena.slots.len(), game.slot_plan.len());
    for (slot, &kind) in arena.slots.iter().zip(&game.slot_plan) {
        assert_eq!(slot.kind, kind);
    }
    // Tray slots sit to the right of the arena width.
    for slot in &arena.slots {
        assert!(slot.rect.x >= w);
    }
}

#[test]
fn mouse_drag_maps_through_the_scene_into_a_match() {
    let mut game = ShapeSortGame::new();
    let area = Rect::new(0, 0, 80, 30);
    let scene = shape_sort_scene::layout(area, game.slot_plan.len());
    let mut arena = Arena::default();
    shape_sort_scene::sync_arena(&mut arena, &scene, &game.slot_plan);

    // A circle parked at (120, 240) px covers cells 10..16 x 10..13 of the
    // arena; the circle slot is the first tray outline.
    game.pieces.push(Piece {
        id: 1,
        kind: ShapeKind::Circle,
        x: 120.0,
        y: 240.0,
        vy: 0.07,
        held_by: None,
    });
    game.next_piece_id = 2;

    let grab = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: scene.arena_cells.x + 12,
        row: scene.arena_cells.y + 11,
        modifiers: KeyModifiers::empty(),
    };
    shape_sort_scene::handle_mouse(&mut game, &arena, &scene, grab);
    assert_eq!(game.piece(1).and_then(|p| p.held_by), Some(0));

    let slot_cell = scene.slot_cells[0];
    let drop_col = slot_cell.x + slot_cell.width / 2;
    let drop_row = slot_cell.y + slot_cell.height / 2;
    let drag = MouseEvent {
        kind: MouseEventKind::Drag(MouseButton::Left),
        column: drop_col,
        row: drop_row,
        modifiers: KeyModifiers::empty(),
    };
    shape_sort_scene::handle_mouse(&mut game, &arena, &scene, drag);
    let piece = game.piece(1).expect("still held").clone();
    assert!(piece.x > 120.0, "piece followed the pointer right");

    let release = MouseEvent {
        kind: MouseEventKind::Up(MouseButton::Left),
        column: drop_col,
        row: drop_row,
        modifiers: KeyModifiers::empty(),
    };
    shape_sort_scene::handle_mouse(&mut game, &arena, &scene, release);

    assert_eq!(game.score, 1);
    assert!(game.pieces.is_empty());
    assert!(game.holds.is_empty());
}

#[test]
fn mouse_down_outside_any_piece_is_ignored() {
    let mut game = ShapeSortGame::new();
    let area = Rect::new(0, 0, 80, 30);
    let scene = shape_sort_scene::layout(area, game.slot_plan.len());
    let mut arena = Arena::default();
    shape_sort_scene::sync_arena(&mut arena, &scene, &game.slot_plan);

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: scene.arena_cells.x + 5,
        row: scene.arena_cells.y + 5,
        modifiers: KeyModifiers::empty(),
    };
    shape_sort_scene::handle_mouse(&mut game, &arena, &scene, click);
    assert!(game.holds.is_empty());
}
