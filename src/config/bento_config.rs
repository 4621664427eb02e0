use crate::config::GridConfig;
use crate::layout::LayoutVariant;
use serde::{Deserialize, Serialize};

/// Grid and display configuration for every layout variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BentoConfig {
    pub mobile: GridConfig,
    pub tablet: GridConfig,
    pub desktop: GridConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for BentoConfig {
    fn default() -> Self {
        Self {
            mobile: GridConfig::new(2, 16, 150.0, 12.0),
            tablet: GridConfig::new(4, 10, 150.0, 12.0),
            desktop: GridConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

/// Debug grid display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Print column/row headers around the grid
    pub show_headers: bool,
    /// Colour occupied cells when writing to a terminal
    pub use_colors: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_headers: true,
            use_colors: true,
        }
    }
}

impl BentoConfig {
    /// Load configuration from file
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: BentoConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `BENTO_<VARIANT>_{COLS,ROWS,CELL_SIZE,GAP}` style overrides.
    /// Values that fail to parse are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for variant in LayoutVariant::ALL {
            let prefix = format!("BENTO_{}", variant.as_str().to_uppercase());
            let grid = self.grid_mut(variant);
            if let Some(cols) = lookup(&format!("{}_COLS", prefix)).and_then(|v| v.parse().ok()) {
                grid.max_cols = cols;
            }
            if let Some(rows) = lookup(&format!("{}_ROWS", prefix)).and_then(|v| v.parse().ok()) {
                grid.max_rows = rows;
            }
            if let Some(size) =
                lookup(&format!("{}_CELL_SIZE", prefix)).and_then(|v| v.parse().ok())
            {
                grid.cell_size = size;
            }
            if let Some(gap) = lookup(&format!("{}_GAP", prefix)).and_then(|v| v.parse().ok()) {
                grid.gap = gap;
            }
        }
        if let Some(colors) = lookup("BENTO_COLORS") {
            self.display.use_colors = colors.to_lowercase() == "true";
        }
        self
    }

    pub fn grid(&self, variant: LayoutVariant) -> &GridConfig {
        match variant {
            LayoutVariant::Mobile => &self.mobile,
            LayoutVariant::Tablet => &self.tablet,
            LayoutVariant::Desktop => &self.desktop,
        }
    }

    pub fn grid_mut(&mut self, variant: LayoutVariant) -> &mut GridConfig {
        match variant {
            LayoutVariant::Mobile => &mut self.mobile,
            LayoutVariant::Tablet => &mut self.tablet,
            LayoutVariant::Desktop => &mut self.desktop,
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        for variant in LayoutVariant::ALL {
            self.grid(variant)
                .validate()
                .map_err(|msg| format!("{} layout: {}", variant, msg))?;
        }
        Ok(())
    }
}
