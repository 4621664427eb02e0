// Display module for grid formatting and visualization
pub mod formatters;

// Re-export main functions
pub use formatters::{
    cell_owners, format_card_label, format_column_headers, print_layout, render_layout,
};
