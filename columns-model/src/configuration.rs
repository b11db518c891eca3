use serde::{Deserialize, Serialize};

use crate::{BreakpointSet, Preset};

/// The installation parameters document: every preset and breakpoint set.
///
/// Persisted whole by the host; mutated only through the store functions in
/// `columns-config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub presets: Vec<Preset>,
    #[serde(default)]
    pub breakpoints: Vec<BreakpointSet>,
}

impl Configuration {
    pub fn new(presets: Vec<Preset>, breakpoints: Vec<BreakpointSet>) -> Self {
        Self { presets, breakpoints }
    }

    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn breakpoint_set(&self, id: &str) -> Option<&BreakpointSet> {
        self.breakpoints.iter().find(|b| b.id == id)
    }

    pub fn preset(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Resolves a preset the way field instances reference it: by id, or by
    /// display name for hand-typed instance parameters.
    pub fn find_preset(&self, key: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == key || p.name == key)
    }

    pub fn find_breakpoint_set(&self, key: &str) -> Option<&BreakpointSet> {
        self.breakpoints.iter().find(|b| b.id == key || b.name == key)
    }

    /// The set a preset points at, if the reference still resolves.
    pub fn breakpoints_for(&self, preset: &Preset) -> Option<&BreakpointSet> {
        self.breakpoint_set(&preset.breakpoints)
    }

    /// Presets whose `breakpoints` reference equals `set_id`.
    pub fn presets_referencing<'a>(&'a self, set_id: &'a str) -> impl Iterator<Item = &'a Preset> + 'a {
        self.presets.iter().filter(move |p| p.breakpoints == set_id)
    }
}
