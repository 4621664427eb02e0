// Move interaction controller: one-cell nudges for layouts without pointer dragging

use crate::card::{Card, CardId, CardPatch};
use crate::config::GridConfig;
use crate::grid::collision::would_overlap;
use crate::grid::span::{CellRect, GridPosition};
use crate::grid::traits::GridResult;
use crate::interaction::pointer::CardDragState;
use crate::layout::{LayoutRepository, LayoutVariant};
use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (column, row) offset of a one-cell step
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone)]
pub struct MoveController {
    card_id: CardId,
}

impl MoveController {
    pub fn new(card_id: CardId) -> Self {
        Self { card_id }
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Whether a one-cell move in `direction` is allowed in the active layout
    pub fn can_move<R>(&self, repo: &R, grid: &GridConfig, direction: Direction) -> bool
    where
        R: LayoutRepository + ?Sized,
    {
        self.target(repo, grid, direction).is_some()
    }

    /// Directions whose nudge button should be offered
    pub fn available_moves<R>(&self, repo: &R, grid: &GridConfig) -> Vec<Direction>
    where
        R: LayoutRepository + ?Sized,
    {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.can_move(repo, grid, direction))
            .collect()
    }

    /// Move one cell in `direction`. Returns `Ok(false)` without writing when
    /// the move is not allowed.
    pub fn move_card<R>(&self, repo: &mut R, grid: &GridConfig, direction: Direction) -> GridResult<bool>
    where
        R: LayoutRepository + ?Sized,
    {
        let Some(position) = self.target(&*repo, grid, direction) else {
            return Ok(false);
        };
        repo.apply_update(&self.card_id, CardPatch::position(position))?;
        debug!("{}: moved {} to {}", self.card_id, direction, position);
        Ok(true)
    }

    /// Nudge buttons show on mobile and tablet while the card is otherwise idle
    pub fn nudge_controls_visible(layout: LayoutVariant, drag: CardDragState, resizing: bool) -> bool {
        layout.uses_nudge_controls() && drag.is_idle() && !resizing
    }

    fn target<R>(&self, repo: &R, grid: &GridConfig, direction: Direction) -> Option<GridPosition>
    where
        R: LayoutRepository + ?Sized,
    {
        let layout = repo.active_layout();
        let card = repo.card(layout, &self.card_id)?;
        let position = shifted_position(card, grid, direction)?;
        let candidate = CellRect::new(position, card.size);
        if would_overlap(&candidate, &card.id, repo.list_placed(layout)) {
            return None;
        }
        Some(position)
    }
}

/// Position one cell over in `direction`, if the card is placed and the
/// shifted rect stays inside the grid
fn shifted_position(card: &Card, grid: &GridConfig, direction: Direction) -> Option<GridPosition> {
    let (d_col, d_row) = direction.offset();
    let position = card.grid_position?.offset(d_col, d_row)?;
    CellRect::new(position, card.size)
        .fits_within(grid.max_cols, grid.max_rows)
        .then_some(position)
}
