// Layout module - responsive variants and the card store behind them
pub mod repository;
pub mod store;
pub mod variant;

pub use repository::LayoutRepository;
pub use store::{LayoutSnapshot, LayoutStore};
pub use variant::LayoutVariant;
