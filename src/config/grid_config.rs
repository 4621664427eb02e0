// Grid configuration for a single layout variant
use crate::grid::geometry::cells_to_pixels;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridConfig {
    pub max_cols: u32,
    pub max_rows: u32,
    /// Cell edge length in pixels
    pub cell_size: f64,
    /// Spacing between neighbouring cells in pixels
    pub gap: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            max_cols: 4,
            max_rows: 8,
            cell_size: 180.0,
            gap: 16.0,
        }
    }
}

impl GridConfig {
    pub fn new(max_cols: u32, max_rows: u32, cell_size: f64, gap: f64) -> Self {
        Self {
            max_cols,
            max_rows,
            cell_size,
            gap,
        }
    }

    pub fn cell_count(&self) -> u32 {
        self.max_cols * self.max_rows
    }

    /// Distance in pixels between the origins of two neighbouring cells
    pub fn pitch(&self) -> f64 {
        self.cell_size + self.gap
    }

    /// Full grid size in pixels as (width, height)
    pub fn pixel_size(&self) -> (f64, f64) {
        (
            cells_to_pixels(self.max_cols, self.cell_size, self.gap),
            cells_to_pixels(self.max_rows, self.cell_size, self.gap),
        )
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_cols == 0 || self.max_rows == 0 {
            return Err("Grid dimensions must be positive".into());
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(format!("Cell size must be positive, got {}", self.cell_size));
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(format!("Gap must not be negative, got {}", self.gap));
        }
        Ok(())
    }
}
