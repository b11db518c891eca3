use columns_types::{slugify, Uid};
use serde::{Deserialize, Serialize};

use crate::breakpoint::set_non_empty;
use crate::ContentType;

/// Accepted content types bound to one breakpoint set.
///
/// `breakpoints` holds a [`crate::BreakpointSet`] id; it is a weak reference
/// and may dangle. An empty `accepted_content_types` accepts nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    pub id: String,
    pub uid: Uid,
    pub name: String,
    pub accepted_content_types: Vec<String>,
    pub breakpoints: String,
}

impl Preset {
    pub fn new(name: impl Into<String>, accepted_content_types: Vec<String>, breakpoints: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            uid: Uid::new(),
            name,
            accepted_content_types,
            breakpoints: breakpoints.into(),
        }
    }

    pub fn accepts(&self, content_type: &str) -> bool {
        self.accepted_content_types.iter().any(|c| c == content_type)
    }

    /// Renames the preset and re-derives its id. Empty input is ignored.
    pub fn rename(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.name = name.to_string();
        self.id = slugify(name);
        true
    }

    /// Points the preset at another breakpoint set id. Empty input is ignored.
    pub fn set_breakpoints(&mut self, id: &str) -> bool {
        set_non_empty(&mut self.breakpoints, id)
    }

    /// Adds `content_type` if absent, removes it if present.
    pub fn toggle_content_type(&mut self, content_type: &str) {
        match self.accepted_content_types.iter().position(|c| c == content_type) {
            Some(index) => {
                self.accepted_content_types.remove(index);
            }
            None => self.accepted_content_types.push(content_type.to_string()),
        }
    }

    /// Accepts every content type in the catalog.
    pub fn select_all(&mut self, catalog: &[ContentType]) {
        self.accepted_content_types = catalog.iter().map(|c| c.id.clone()).collect();
    }

    pub fn clear(&mut self) {
        self.accepted_content_types.clear();
    }

    /// Copy under a new name with a fresh uid.
    pub fn copy_as(&self, name: &str) -> Self {
        Self::new(name, self.accepted_content_types.clone(), self.breakpoints.clone())
    }
}
