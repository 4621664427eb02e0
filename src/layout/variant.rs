// Responsive layout variants
use crate::grid::traits::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Each variant has its own grid bounds and its own copy of card positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    Mobile,
    Tablet,
    Desktop,
}

impl Default for LayoutVariant {
    fn default() -> Self {
        LayoutVariant::Desktop
    }
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 3] = [
        LayoutVariant::Mobile,
        LayoutVariant::Tablet,
        LayoutVariant::Desktop,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutVariant::Mobile => "mobile",
            LayoutVariant::Tablet => "tablet",
            LayoutVariant::Desktop => "desktop",
        }
    }

    /// Pointer-driven resize sessions may start on this variant
    pub fn allows_pointer_resize(&self) -> bool {
        !matches!(self, LayoutVariant::Mobile)
    }

    /// Directional nudge buttons replace pointer dragging on this variant
    pub fn uses_nudge_controls(&self) -> bool {
        matches!(self, LayoutVariant::Mobile | LayoutVariant::Tablet)
    }
}

impl fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutVariant {
    type Err = GridError;

    fn from_str(s: &str) -> GridResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "mobile" => Ok(LayoutVariant::Mobile),
            "tablet" => Ok(LayoutVariant::Tablet),
            "desktop" => Ok(LayoutVariant::Desktop),
            _ => Err(GridError::InvalidLayoutName(s.to_string())),
        }
    }
}
