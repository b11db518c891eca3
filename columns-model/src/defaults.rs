//! Seed values for new configurations, breakpoints and columns.

use serde::{Deserialize, Serialize};

use crate::{BreakpointOption, Column, ColumnSize, ColumnSizes, SizeOption};

pub const DEFAULT_PRESET_PREFIX: &str = "Preset";
pub const DEFAULT_BREAKPOINTS_PREFIX: &str = "Breakpoints";
pub const DEFAULT_BREAKPOINT_PREFIX: &str = "Breakpoint";

/// `(value, label)` pairs on a 12-column grid, widest first.
pub const DEFAULT_BREAKPOINT_SIZES: [(&str, &str); 6] = [
    ("12", "1/1 (Full)"),
    ("9", "3/4 (75%)"),
    ("8", "2/3 (66.67%)"),
    ("6", "1/2 (50%)"),
    ("4", "1/3 (33.33%)"),
    ("3", "1/4 (25%)"),
];

/// `(label, value)` of the breakpoints every new set starts with.
pub const DEFAULT_BREAKPOINTS: [(&str, &str); 3] =
    [("Desktop", "desktop"), ("Tablet", "tablet"), ("Mobile", "mobile")];

/// `(breakpoint value, size value)` of a freshly added column.
pub const DEFAULT_COLUMN_SIZES: [(&str, &str); 3] = [("desktop", "6"), ("tablet", "12"), ("mobile", "12")];

/// Name prefixes used when generating display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    pub preset_prefix: String,
    pub breakpoints_prefix: String,
    pub breakpoint_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            preset_prefix: DEFAULT_PRESET_PREFIX.to_string(),
            breakpoints_prefix: DEFAULT_BREAKPOINTS_PREFIX.to_string(),
            breakpoint_prefix: DEFAULT_BREAKPOINT_PREFIX.to_string(),
        }
    }
}

/// A fresh copy of the size catalog. Every call yields new uids.
pub fn default_sizes() -> Vec<SizeOption> {
    DEFAULT_BREAKPOINT_SIZES
        .iter()
        .map(|(value, label)| SizeOption::new(*label, *value))
        .collect()
}

pub fn default_breakpoints() -> Vec<BreakpointOption> {
    DEFAULT_BREAKPOINTS
        .iter()
        .map(|(label, value)| BreakpointOption::new(*label, *value, default_sizes()))
        .collect()
}

/// The single size a hand-added breakpoint starts with.
pub fn new_breakpoint_size() -> SizeOption {
    SizeOption::new("1/1 (Full)", "12")
}

pub fn default_column_sizes() -> ColumnSizes {
    DEFAULT_COLUMN_SIZES
        .iter()
        .map(|(breakpoint, size)| (breakpoint.to_string(), ColumnSize::preset(*size)))
        .collect()
}

/// Default Column Settings: half width on desktop, full below, no items.
pub fn default_column() -> Column {
    Column::new(default_column_sizes(), Vec::new())
}
