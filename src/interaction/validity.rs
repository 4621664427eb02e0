// Validity rules consulted before a resize candidate is accepted

use crate::card::{Card, CardId};
use crate::config::GridConfig;
use crate::grid::collision::would_overlap;
use crate::grid::span::{CellRect, Span};
use crate::layout::{LayoutRepository, LayoutVariant};

/// Extra host-side rule for resizes (reserved zones and the like)
pub trait ResizeRule {
    fn allows(&self, card: &CardId, cols: u32, rows: u32) -> bool;
}

impl<F> ResizeRule for F
where
    F: Fn(&CardId, u32, u32) -> bool,
{
    fn allows(&self, card: &CardId, cols: u32, rows: u32) -> bool {
        self(card, cols, rows)
    }
}

/// Check that `card` could take `span` without moving: the span is within
/// the grid maxima, the rect at the card's current position stays inside
/// the grid, and no sibling in `layout` is overlapped. Unplaced cards only
/// get the span check.
pub fn span_fits<R>(repo: &R, layout: LayoutVariant, grid: &GridConfig, card: &Card, span: Span) -> bool
where
    R: LayoutRepository + ?Sized,
{
    if !span.is_within(grid.max_cols, grid.max_rows) {
        return false;
    }
    let Some(position) = card.grid_position else {
        return true;
    };
    let candidate = CellRect::new(position, span);
    candidate.fits_within(grid.max_cols, grid.max_rows)
        && !would_overlap(&candidate, &card.id, repo.list_placed(layout))
}
