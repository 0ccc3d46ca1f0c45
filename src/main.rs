//! Jelly Arcade binary: terminal setup and the cooperative main loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use jelly_arcade::constants::FRAME_INTERVAL_MS;
use jelly_arcade::games::number_garden::{self, GardenMode, NumberGardenGame, PotSide};
use jelly_arcade::games::shape_sort::{self, Arena, ShapeSortGame};
use jelly_arcade::games::snack_math::{self, SnackMathGame};
use jelly_arcade::games::ActiveGame;
use jelly_arcade::hub::HubState;
use jelly_arcade::ui::{hub_scene, number_garden_scene, shape_sort_scene, snack_math_scene};

struct App {
    hub: HubState,
    /// `None` while the hub screen is up.
    active: Option<ActiveGame>,
    /// One-line message on the hub screen, e.g. for unbuilt games.
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            hub: HubState::new(),
            active: None,
            notice: None,
            should_quit: false,
        }
    }
}

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    let mut app = App::new();
    let mut last_tick = Instant::now();

    loop {
        let dt_ms = last_tick.elapsed().as_secs_f64() * 1000.0;
        last_tick = Instant::now();
        tick(&mut app, terminal.size()?, dt_ms);

        terminal.draw(|frame| {
            let area = frame.size();
            match &app.active {
                None => hub_scene::render(frame, area, &app.hub, app.notice.as_deref()),
                Some(ActiveGame::ShapeSort { game, .. }) => {
                    shape_sort_scene::render(frame, area, game)
                }
                Some(ActiveGame::NumberGarden(game)) => {
                    number_garden_scene::render(frame, area, game)
                }
                Some(ActiveGame::SnackMath(game)) => snack_math_scene::render(frame, area, game),
            }
        })?;

        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key);
                }
                Event::Mouse(mouse) => handle_mouse(&mut app, terminal.size()?, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Advance whichever game is active. Shape Sort gets its arena geometry
/// refreshed first so a resize is picked up before physics runs.
fn tick(app: &mut App, area: Rect, dt_ms: f64) {
    match &mut app.active {
        Some(ActiveGame::ShapeSort { game, arena }) => {
            let scene = shape_sort_scene::layout(area, game.slot_plan.len());
            shape_sort_scene::sync_arena(arena, &scene, &game.slot_plan);
            let mut rng = rand::thread_rng();
            shape_sort::logic::process_tick(game, arena, dt_ms, &mut rng);
        }
        Some(ActiveGame::NumberGarden(game)) => number_garden::logic::tick(game, dt_ms),
        Some(ActiveGame::SnackMath(game)) => snack_math::logic::tick(game, dt_ms),
        None => {}
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }
    match &mut app.active {
        None => handle_hub_key(app, key),
        Some(ActiveGame::ShapeSort { game, .. }) => match key.code {
            KeyCode::Esc => app.active = None,
            KeyCode::Char('p') => shape_sort::logic::pause_toggle(game),
            KeyCode::Char('r') => shape_sort::logic::restart(game),
            _ => {}
        },
        Some(ActiveGame::NumberGarden(game)) => match key.code {
            KeyCode::Esc => app.active = None,
            KeyCode::Char('r') => {
                number_garden::logic::restart(game, &mut rand::thread_rng());
            }
            KeyCode::Char('n') => {
                number_garden::logic::next_round(game, &mut rand::thread_rng());
            }
            KeyCode::Left => match game.mode {
                GardenMode::Count => number_garden::logic::move_cursor(game, -1, 0),
                GardenMode::Add => game.selected_pot = PotSide::Left,
            },
            KeyCode::Right => match game.mode {
                GardenMode::Count => number_garden::logic::move_cursor(game, 1, 0),
                GardenMode::Add => game.selected_pot = PotSide::Right,
            },
            KeyCode::Up => match game.mode {
                GardenMode::Count => number_garden::logic::move_cursor(game, 0, -1),
                GardenMode::Add => number_garden::logic::adjust_pot(game, game.selected_pot, 1),
            },
            KeyCode::Down => match game.mode {
                GardenMode::Count => number_garden::logic::move_cursor(game, 0, 1),
                GardenMode::Add => number_garden::logic::adjust_pot(game, game.selected_pot, -1),
            },
            KeyCode::Char(' ') | KeyCode::Enter => {
                if game.mode == GardenMode::Count {
                    number_garden::logic::tap_hole(game, game.cursor);
                }
            }
            _ => {}
        },
        Some(ActiveGame::SnackMath(game)) => match key.code {
            KeyCode::Esc => app.active = None,
            KeyCode::Char('r') => snack_math::logic::restart(game),
            KeyCode::Char('n') => {
                snack_math::logic::next_round(game, &mut rand::thread_rng());
            }
            KeyCode::Char('t') => snack_math::logic::cycle_snack(game),
            KeyCode::Left => snack_math::logic::move_cursor(game, -1, 0),
            KeyCode::Right => snack_math::logic::move_cursor(game, 1, 0),
            KeyCode::Up => snack_math::logic::move_cursor(game, 0, -1),
            KeyCode::Down => snack_math::logic::move_cursor(game, 0, 1),
            KeyCode::Char(' ') | KeyCode::Enter => snack_math::logic::eat_one(game, game.cursor),
            _ => {}
        },
    }
}

fn handle_hub_key(app: &mut App, key: KeyEvent) {
    app.notice = None;
    match key.code {
        KeyCode::Up => app.hub.select_prev(),
        KeyCode::Down => app.hub.select_next(),
        KeyCode::Left => app.hub.adjust_age(-1),
        KeyCode::Right => app.hub.adjust_age(1),
        KeyCode::Tab => app.hub.cycle_discipline(),
        KeyCode::Backspace => app.hub.pop_query(),
        KeyCode::Enter => launch_selected(app),
        KeyCode::Esc => {
            if app.hub.query.is_empty() {
                app.should_quit = true;
            } else {
                app.hub.clear_query();
            }
        }
        KeyCode::Char(c) => app.hub.push_query(c),
        _ => {}
    }
}

fn launch_selected(app: &mut App) {
    let Some(entry) = app.hub.selected_entry() else {
        return;
    };
    if !entry.playable {
        app.notice = Some(format!("{} is coming soon!", entry.title));
        return;
    }
    app.active = match entry.id {
        "shape-sort-dash" => Some(ActiveGame::ShapeSort {
            game: ShapeSortGame::new(),
            arena: Arena::default(),
        }),
        "number-garden" => Some(ActiveGame::NumberGarden(NumberGardenGame::new(
            &mut rand::thread_rng(),
        ))),
        "snack-math" => Some(ActiveGame::SnackMath(SnackMathGame::new())),
        _ => None,
    };
}

/// Mouse input only matters to Shape Sort; the layout is recomputed so the
/// event maps through the same geometry the last frame drew with.
fn handle_mouse(app: &mut App, area: Rect, mouse: MouseEvent) {
    if let Some(ActiveGame::ShapeSort { game, arena }) = &mut app.active {
        let scene = shape_sort_scene::layout(area, game.slot_plan.len());
        shape_sort_scene::sync_arena(arena, &scene, &game.slot_plan);
        shape_sort_scene::handle_mouse(game, arena, &scene, mouse);
    }
}
