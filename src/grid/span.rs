// Span, position and cell-rect value types
// Sizes used to travel as "2x2" strings; only the serde boundary still sees that form.

use crate::grid::traits::{GridError, GridResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A card's occupied size in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub cols: u32,
    pub rows: u32,
}

impl Span {
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    /// Check `1 <= cols <= max_cols` and `1 <= rows <= max_rows`
    pub fn is_within(&self, max_cols: u32, max_rows: u32) -> bool {
        (1..=max_cols).contains(&self.cols) && (1..=max_rows).contains(&self.rows)
    }

    /// Clamp both axes into `[1, max]`
    pub fn clamped(&self, max_cols: u32, max_rows: u32) -> Self {
        Self {
            cols: self.cols.clamp(1, max_cols.max(1)),
            rows: self.rows.clamp(1, max_rows.max(1)),
        }
    }

    pub fn cell_count(&self) -> u32 {
        self.cols * self.rows
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

impl FromStr for Span {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        let invalid = || GridError::InvalidSizeString(s.to_string());
        let (cols, rows) = s.trim().split_once('x').ok_or_else(invalid)?;
        let cols: u32 = cols.parse().map_err(|_| invalid())?;
        let rows: u32 = rows.parse().map_err(|_| invalid())?;
        if cols == 0 || rows == 0 {
            return Err(invalid());
        }
        Ok(Self { cols, rows })
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Top-left cell of a placed card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub col: u32,
    pub row: u32,
}

impl GridPosition {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Shift by a signed offset, `None` if either axis would go negative
    pub fn offset(&self, d_col: i32, d_row: i32) -> Option<Self> {
        Some(Self {
            col: self.col.checked_add_signed(d_col)?,
            row: self.row.checked_add_signed(d_row)?,
        })
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Half-open rectangle of cells: columns `left..right`, rows `top..bottom`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CellRect {
    /// Edges saturate at `u32::MAX`, which no grid can contain
    pub fn new(position: GridPosition, span: Span) -> Self {
        Self {
            left: position.col,
            top: position.row,
            right: position.col.saturating_add(span.cols),
            bottom: position.row.saturating_add(span.rows),
        }
    }

    /// Axis-aligned overlap; rects that only share an edge do not overlap
    pub fn overlaps(&self, other: &CellRect) -> bool {
        !(self.right <= other.left
            || self.left >= other.right
            || self.bottom <= other.top
            || self.top >= other.bottom)
    }

    pub fn fits_within(&self, max_cols: u32, max_rows: u32) -> bool {
        self.right <= max_cols && self.bottom <= max_rows
    }

    pub fn contains_cell(&self, col: u32, row: u32) -> bool {
        col >= self.left && col < self.right && row >= self.top && row < self.bottom
    }

    pub fn position(&self) -> GridPosition {
        GridPosition::new(self.left, self.top)
    }

    pub fn span(&self) -> Span {
        Span::new(self.right - self.left, self.bottom - self.top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_string_form() {
        let span: Span = "2x1".parse().unwrap();
        assert_eq!(span, Span::new(2, 1));
        assert_eq!(span.to_string(), "2x1");
        assert!("2".parse::<Span>().is_err());
        assert!("0x2".parse::<Span>().is_err());
        assert!("ax2".parse::<Span>().is_err());
    }

    #[test]
    fn test_span_serde_uses_string_form() {
        let json = serde_json::to_string(&Span::new(4, 2)).unwrap();
        assert_eq!(json, "\"4x2\"");
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Span::new(4, 2));
        assert!(serde_json::from_str::<Span>("\"4-2\"").is_err());
    }

    #[test]
    fn test_span_bounds() {
        assert!(Span::new(1, 1).is_within(4, 4));
        assert!(Span::new(4, 4).is_within(4, 4));
        assert!(!Span::new(0, 1).is_within(4, 4));
        assert!(!Span::new(5, 1).is_within(4, 4));
        assert_eq!(Span::new(9, 0).clamped(4, 4), Span::new(4, 1));
    }

    #[test]
    fn test_rect_at_u32_edge_saturates() {
        let rect = CellRect::new(GridPosition::new(u32::MAX, 0), Span::new(2, 2));
        assert_eq!(rect.right, u32::MAX);
        assert!(!rect.fits_within(4, 4));
        assert_eq!(Span::new(3, 2).cell_count(), 6);
    }

    #[test]
    fn test_position_offset_never_negative() {
        let origin = GridPosition::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 2), Some(GridPosition::new(1, 2)));
    }

    #[test]
    fn test_rect_overlap() {
        let a = CellRect::new(GridPosition::new(0, 0), Span::new(2, 2));
        let b = CellRect::new(GridPosition::new(2, 0), Span::new(2, 2));
        let c = CellRect::new(GridPosition::new(1, 1), Span::new(2, 2));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_rect_fits_within() {
        let rect = CellRect::new(GridPosition::new(3, 0), Span::new(1, 1));
        assert!(rect.fits_within(4, 4));
        let wide = CellRect::new(GridPosition::new(3, 0), Span::new(2, 1));
        assert!(!wide.fits_within(4, 4));
        assert_eq!(wide.span(), Span::new(2, 1));
        assert_eq!(wide.position(), GridPosition::new(3, 0));
    }
}
