// Grid module - geometry, value types and collision checks shared by every layout

pub mod collision;
pub mod geometry;
pub mod span;
pub mod traits;

// Re-export the main grid types for easy access
pub use collision::{find_free_position, first_collision, occupied_cells, would_overlap};
pub use geometry::{cells_to_pixels, clamp, pixel_delta_to_cell_delta, resize_axis};
pub use span::{CellRect, GridPosition, Span};
pub use traits::{GridError, GridResult, Occupant};

// Re-export common types used by all grids
pub use crate::config::GridConfig;
