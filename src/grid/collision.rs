// Occupancy / collision checks against the placed cards of one layout

use crate::card::CardId;
use crate::grid::span::{CellRect, GridPosition, Span};
use crate::grid::traits::Occupant;

/// Check whether `candidate` overlaps any placed occupant other than `exclude`.
///
/// Unplaced occupants never collide.
pub fn would_overlap<'a, O, I>(candidate: &CellRect, exclude: &CardId, occupants: I) -> bool
where
    O: Occupant + 'a,
    I: IntoIterator<Item = &'a O>,
{
    first_collision(candidate, exclude, occupants).is_some()
}

/// Like [`would_overlap`] but reports which occupant is in the way
pub fn first_collision<'a, O, I>(
    candidate: &CellRect,
    exclude: &CardId,
    occupants: I,
) -> Option<&'a CardId>
where
    O: Occupant + 'a,
    I: IntoIterator<Item = &'a O>,
{
    occupants
        .into_iter()
        .filter(|other| other.occupant_id() != exclude)
        .find(|other| {
            other
                .occupied_rect()
                .map_or(false, |rect| rect.overlaps(candidate))
        })
        .map(|other| other.occupant_id())
}

/// Find the first free slot for `span`, scanning rows top to bottom and
/// columns left to right
pub fn find_free_position<'a, O, I>(
    span: Span,
    max_cols: u32,
    max_rows: u32,
    occupants: I,
) -> Option<GridPosition>
where
    O: Occupant + 'a,
    I: IntoIterator<Item = &'a O>,
{
    if !span.is_within(max_cols, max_rows) {
        return None;
    }
    let taken: Vec<CellRect> = occupants
        .into_iter()
        .filter_map(|occupant| occupant.occupied_rect())
        .collect();

    for row in 0..=(max_rows - span.rows) {
        for col in 0..=(max_cols - span.cols) {
            let candidate = CellRect::new(GridPosition::new(col, row), span);
            if !taken.iter().any(|rect| rect.overlaps(&candidate)) {
                return Some(candidate.position());
            }
        }
    }
    None
}

/// Count occupied cells in a `max_cols` x `max_rows` grid
pub fn occupied_cells<'a, O, I>(max_cols: u32, max_rows: u32, occupants: I) -> usize
where
    O: Occupant + 'a,
    I: IntoIterator<Item = &'a O>,
{
    let rects: Vec<CellRect> = occupants
        .into_iter()
        .filter_map(|occupant| occupant.occupied_rect())
        .collect();
    (0..max_rows)
        .flat_map(|row| (0..max_cols).map(move |col| (col, row)))
        .filter(|&(col, row)| rects.iter().any(|rect| rect.contains_cell(col, row)))
        .count()
}
