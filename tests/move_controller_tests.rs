//! One-cell nudges on the touch layouts
use bento_grid::{
    BentoConfig, Card, CardId, CardKind, Direction, GridConfig, GridPosition, LayoutRepository,
    LayoutStore, LayoutVariant, MoveController, Span,
};

fn tablet_store(cards: &[(&str, u32, u32, u32, u32)]) -> LayoutStore {
    let mut config = BentoConfig::default();
    config.tablet = GridConfig::new(4, 4, 100.0, 0.0);
    let mut store = LayoutStore::new(config);
    for &(id, col, row, cols, rows) in cards {
        let card = Card::new(CardId::from(id), CardKind::Image)
            .with_size(Span::new(cols, rows))
            .at(GridPosition::new(col, row));
        store.insert_card(LayoutVariant::Tablet, card.clone()).unwrap();
        store.insert_card(LayoutVariant::Desktop, card).unwrap();
    }
    store.set_active_layout(LayoutVariant::Tablet);
    store
}

fn position_of(store: &LayoutStore, variant: LayoutVariant, id: &str) -> Option<GridPosition> {
    store.card(variant, &CardId::from(id)).unwrap().grid_position
}

#[test]
fn test_move_blocked_by_neighbour() {
    let mut store = tablet_store(&[("x", 0, 0, 2, 2), ("y", 2, 0, 2, 2)]);
    let grid = store.active_grid().clone();
    let x = MoveController::new(CardId::from("x"));

    assert!(!x.can_move(&store, &grid, Direction::Right));
    let before = store.revision();
    assert!(!x.move_card(&mut store, &grid, Direction::Right).unwrap());
    assert_eq!(store.revision(), before);
    assert_eq!(position_of(&store, LayoutVariant::Tablet, "x"), Some(GridPosition::new(0, 0)));
}

#[test]
fn test_available_moves_respect_edges() {
    let store = tablet_store(&[("x", 0, 0, 2, 2), ("y", 2, 0, 2, 2)]);
    let grid = store.active_grid().clone();
    let x = MoveController::new(CardId::from("x"));
    assert_eq!(x.available_moves(&store, &grid), vec![Direction::Down]);

    let y = MoveController::new(CardId::from("y"));
    assert_eq!(y.available_moves(&store, &grid), vec![Direction::Down]);
}

#[test]
fn test_move_commits_single_write() {
    let mut store = tablet_store(&[("x", 0, 0, 2, 2), ("y", 2, 0, 2, 2)]);
    let grid = store.active_grid().clone();
    let x = MoveController::new(CardId::from("x"));

    let before = store.revision();
    assert!(x.move_card(&mut store, &grid, Direction::Down).unwrap());
    assert_eq!(store.revision(), before + 1);
    assert_eq!(position_of(&store, LayoutVariant::Tablet, "x"), Some(GridPosition::new(0, 1)));
    assert_eq!(
        x.available_moves(&store, &grid),
        vec![Direction::Up, Direction::Down]
    );

    assert!(x.move_card(&mut store, &grid, Direction::Down).unwrap());
    assert!(!x.can_move(&store, &grid, Direction::Down));
    // Now clear of y, so it can slide right
    assert!(x.can_move(&store, &grid, Direction::Right));
    assert!(x.move_card(&mut store, &grid, Direction::Right).unwrap());
    assert_eq!(position_of(&store, LayoutVariant::Tablet, "x"), Some(GridPosition::new(1, 2)));
}

#[test]
fn test_moves_stay_in_active_layout() {
    let mut store = tablet_store(&[("x", 0, 0, 1, 1)]);
    let grid = store.active_grid().clone();
    let x = MoveController::new(CardId::from("x"));
    assert!(x.move_card(&mut store, &grid, Direction::Right).unwrap());
    assert_eq!(position_of(&store, LayoutVariant::Tablet, "x"), Some(GridPosition::new(1, 0)));
    assert_eq!(position_of(&store, LayoutVariant::Desktop, "x"), Some(GridPosition::new(0, 0)));
}

#[test]
fn test_unplaced_card_cannot_move() {
    let mut store = tablet_store(&[]);
    let floating = Card::new(CardId::from("f"), CardKind::Text);
    store.insert_card(LayoutVariant::Tablet, floating).unwrap();
    let grid = store.active_grid().clone();
    let f = MoveController::new(CardId::from("f"));

    assert!(f.available_moves(&store, &grid).is_empty());
    assert!(!f.move_card(&mut store, &grid, Direction::Down).unwrap());
    assert_eq!(store.list_placed(LayoutVariant::Tablet).len(), 0);
}

#[test]
fn test_unknown_card_cannot_move() {
    let mut store = tablet_store(&[("x", 0, 0, 1, 1)]);
    let grid = store.active_grid().clone();
    let ghost = MoveController::new(CardId::from("ghost"));
    assert!(!ghost.can_move(&store, &grid, Direction::Right));
    assert!(!ghost.move_card(&mut store, &grid, Direction::Right).unwrap());
}
