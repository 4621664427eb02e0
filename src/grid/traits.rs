// Common traits and types for the grid engine

use crate::card::CardId;
use crate::grid::span::{CellRect, Span};
use crate::layout::LayoutVariant;

/// Result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Errors that can occur during grid operations
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    InvalidSpan {
        span: Span,
        max_cols: u32,
        max_rows: u32,
    },
    OutOfBounds {
        rect: CellRect,
        max_cols: u32,
        max_rows: u32,
    },
    Collision {
        card: CardId,
        other: CardId,
    },
    CardNotFound(CardId),
    NoFreeSlot {
        layout: LayoutVariant,
        span: Span,
    },
    InvalidSizeString(String),
    InvalidLayoutName(String),
    ConfigurationError(String),
    SerializationError(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::InvalidSpan {
                span,
                max_cols,
                max_rows,
            } => write!(
                f,
                "Invalid span {}, spans must lie within 1x1..{}x{}",
                span, max_cols, max_rows
            ),
            GridError::OutOfBounds {
                rect,
                max_cols,
                max_rows,
            } => write!(
                f,
                "Rect {:?} does not fit inside a {}x{} grid",
                rect, max_cols, max_rows
            ),
            GridError::Collision { card, other } => {
                write!(f, "Card {} would overlap card {}", card, other)
            }
            GridError::CardNotFound(id) => write!(f, "Card {} not found", id),
            GridError::NoFreeSlot { layout, span } => {
                write!(f, "No free {} slot left in the {} layout", span, layout)
            }
            GridError::InvalidSizeString(s) => {
                write!(f, "Invalid size string '{}', expected <cols>x<rows>", s)
            }
            GridError::InvalidLayoutName(s) => write!(
                f,
                "Unknown layout '{}', expected mobile, tablet or desktop",
                s
            ),
            GridError::ConfigurationError(msg) => write!(f, "Configuration error: {}", msg),
            GridError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::SerializationError(err.to_string())
    }
}

/// Anything that can occupy a rectangle of cells in a layout
pub trait Occupant {
    /// Stable identifier used to exclude the occupant from its own checks
    fn occupant_id(&self) -> &CardId;

    /// Occupied cells, or `None` when the occupant is not placed on the grid
    fn occupied_rect(&self) -> Option<CellRect>;
}
