// bento_grid - grid layout, collision and resize engine for bento-style card pages
//
// Cards live on a fixed-column grid per responsive layout (mobile, tablet,
// desktop). Pointer drags are snapped to whole cells, checked against the
// grid bounds and the sibling cards, and only valid changes reach the store.

pub mod card;
pub mod config;
pub mod display;
pub mod grid;
pub mod interaction;
pub mod layout;

// Re-export the types most hosts need
pub use card::{Card, CardContent, CardId, CardKind, CardPatch};
pub use config::{BentoConfig, DisplayConfig, GridConfig};
pub use grid::{CellRect, GridError, GridPosition, GridResult, Span};
pub use interaction::{
    CardDragState, Direction, EndReason, InputSurface, MoveController, PointerPosition,
    ResizeController, ResizeOutcome, Subscription,
};
pub use layout::{LayoutRepository, LayoutSnapshot, LayoutStore, LayoutVariant};
