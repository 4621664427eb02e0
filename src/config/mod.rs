// Configuration module
pub mod bento_config;
pub mod grid_config;

pub use bento_config::{BentoConfig, DisplayConfig};
pub use grid_config::GridConfig;
