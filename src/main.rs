use bento_grid::display::print_layout;
use bento_grid::interaction::ForwardedInput;
use bento_grid::{
    BentoConfig, CardDragState, CardKind, Direction, LayoutStore, LayoutVariant, MoveController,
    PointerPosition, ResizeController, ResizeOutcome, Span,
};
use log::{info, warn};

const BANNER: &str = r#"
  ┌──────┬───┬──────┐
  │ bento│   │ grid │
  ├───┬──┴───┼──────┤
  │   │      │      │
  └───┴──────┴──────┘
"#;

fn load_config() -> Result<BentoConfig, Box<dyn std::error::Error>> {
    match std::env::var("BENTO_CONFIG") {
        Ok(path) => {
            info!("📄 Loading configuration from {}", path);
            BentoConfig::load_from_file(&path)
        }
        Err(_) => {
            let config = BentoConfig::from_env();
            config.validate()?;
            Ok(config)
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("{}", BANNER);

    let config = load_config()?;
    let display = config.display.clone();
    let mut store = LayoutStore::new(config);

    let hero = store.add_card(CardKind::Image)?;
    store.add_card(CardKind::Text)?;
    let form = store.add_card(CardKind::Form)?;
    store.add_card(CardKind::Music)?;

    let grid = store.active_grid().clone();
    let (width, height) = grid.pixel_size();
    info!(
        "🧱 Desktop grid: {} cells, {:.0}x{:.0} px",
        grid.cell_count(),
        width,
        height
    );
    print_layout("Desktop, initial", store.current_device_cards(), &grid, &display)?;

    // Drag the hero card's corner one cell right, then far enough down to hit the form card
    let mut resize = ResizeController::new(hero.clone())
        .with_rule(|_card: &bento_grid::CardId, cols: u32, rows: u32| {
            Span::new(cols, rows).cell_count() <= 8
        });
    if resize.handle_visible(&store, &grid, CardDragState::IDLE) {
        let start = PointerPosition::new(400.0, 400.0);
        resize.begin(&store, &ForwardedInput, start, CardDragState::IDLE);
        let pitch = grid.pitch();
        for (dx, dy) in [(0.4, 0.0), (1.0, 0.0), (1.0, 2.0), (0.0, 1.0)] {
            let pointer = PointerPosition::new(start.x + dx * pitch, start.y + dy * pitch);
            match resize.pointer_move(&mut store, &grid, pointer) {
                ResizeOutcome::Accepted { span, committed } => {
                    info!("preview {} (committed: {})", span, committed)
                }
                ResizeOutcome::Rejected { candidate } => info!("rejected {}", candidate),
                other => info!("{:?}", other),
            }
        }
        if let Some(span) = resize.pointer_up() {
            info!("✅ Resize finished at {}", span);
        }
    } else {
        warn!("⚠️ Resize handle hidden for {}", hero);
    }
    print_layout("Desktop, after resize", store.current_device_cards(), &grid, &display)?;

    // Tablet keeps its own positions; nudge the form card around there
    store.set_active_layout(LayoutVariant::Tablet);
    resize.layout_changed(LayoutVariant::Tablet);
    let tablet_grid = store.active_grid().clone();
    let nudge = MoveController::new(form);
    info!(
        "Available moves: {:?}",
        nudge.available_moves(&store, &tablet_grid)
    );
    for direction in [Direction::Down, Direction::Down, Direction::Left] {
        if !nudge.move_card(&mut store, &tablet_grid, direction)? {
            info!("Move {} not possible", direction);
        }
    }
    print_layout("Tablet, after nudges", store.current_device_cards(), &tablet_grid, &display)?;

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", store.export_json()?);
    }
    Ok(())
}
