// Pixel <-> cell conversions for pointer-driven grid editing

/// Convert a pointer delta in pixels into a whole number of cells.
///
/// One cell step is `cell_size + gap` pixels. Halves round up (toward
/// positive infinity) so the snap point sits in the same place whichever
/// way the pointer travels. A non-positive or non-finite pitch yields 0.
pub fn pixel_delta_to_cell_delta(delta_pixels: f64, cell_size: f64, gap: f64) -> i32 {
    let pitch = cell_size + gap;
    if !pitch.is_finite() || pitch <= 0.0 || !delta_pixels.is_finite() {
        return 0;
    }
    let cells = (delta_pixels / pitch + 0.5).floor();
    cells.clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

/// Standard clamp for spans and coordinates
pub fn clamp(value: i64, min: i64, max: i64) -> i64 {
    value.max(min).min(max)
}

/// Apply a signed cell delta to a starting span length and clamp it to `[1, max]`
pub fn resize_axis(start: u32, delta_cells: i32, max: u32) -> u32 {
    clamp(start as i64 + delta_cells as i64, 1, max.max(1) as i64) as u32
}

/// Pixel extent of `cells` cells including the gaps between them
pub fn cells_to_pixels(cells: u32, cell_size: f64, gap: f64) -> f64 {
    if cells == 0 {
        return 0.0;
    }
    cells as f64 * cell_size + (cells - 1) as f64 * gap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_delta_is_zero_cells() {
        assert_eq!(pixel_delta_to_cell_delta(0.0, 100.0, 0.0), 0);
        assert_eq!(pixel_delta_to_cell_delta(-0.0, 100.0, 16.0), 0);
    }

    #[test]
    fn test_rounds_to_nearest_cell() {
        assert_eq!(pixel_delta_to_cell_delta(250.0, 100.0, 0.0), 3);
        assert_eq!(pixel_delta_to_cell_delta(249.0, 100.0, 0.0), 2);
        assert_eq!(pixel_delta_to_cell_delta(50.0, 100.0, 0.0), 1);
        assert_eq!(pixel_delta_to_cell_delta(49.9, 100.0, 0.0), 0);
        assert_eq!(pixel_delta_to_cell_delta(-50.0, 100.0, 0.0), 0);
        assert_eq!(pixel_delta_to_cell_delta(-51.0, 100.0, 0.0), -1);
        assert_eq!(pixel_delta_to_cell_delta(-250.0, 100.0, 0.0), -2);
    }

    #[test]
    fn test_gap_widens_the_step() {
        assert_eq!(pixel_delta_to_cell_delta(116.0, 100.0, 16.0), 1);
        assert_eq!(pixel_delta_to_cell_delta(57.0, 100.0, 16.0), 0);
        assert_eq!(pixel_delta_to_cell_delta(58.0, 100.0, 16.0), 1);
    }

    #[test]
    fn test_degenerate_pitch() {
        assert_eq!(pixel_delta_to_cell_delta(500.0, 0.0, 0.0), 0);
        assert_eq!(pixel_delta_to_cell_delta(500.0, -10.0, 2.0), 0);
        assert_eq!(pixel_delta_to_cell_delta(f64::NAN, 100.0, 0.0), 0);
    }

    #[test]
    fn test_resize_axis_clamps() {
        assert_eq!(resize_axis(1, 3, 4), 4);
        assert_eq!(resize_axis(1, 10, 4), 4);
        assert_eq!(resize_axis(2, -5, 4), 1);
        assert_eq!(resize_axis(2, 0, 4), 2);
    }

    #[test]
    fn test_cells_to_pixels() {
        assert_eq!(cells_to_pixels(0, 100.0, 16.0), 0.0);
        assert_eq!(cells_to_pixels(1, 100.0, 16.0), 100.0);
        assert_eq!(cells_to_pixels(3, 100.0, 16.0), 332.0);
    }
}
