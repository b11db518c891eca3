use columns_types::{probe_numbered_name, slugify, Uid};
use serde::{Deserialize, Serialize};

use crate::defaults::{self, NamingConfig};

/// A selectable column width for one breakpoint.
///
/// `label` is shown to editors, `value` is what the API returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub uid: Uid,
    pub label: String,
    pub value: String,
}

impl SizeOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            uid: Uid::new(),
            label: label.into(),
            value: value.into(),
        }
    }

    /// A blank option as appended by "add option"; invalid until filled in.
    pub fn blank() -> Self {
        Self::new("", "")
    }
}

/// One responsive tier ("Desktop") and the sizes an editor may pick for it.
///
/// Invariant: `options` is non-empty. `value` is a lookup key into
/// [`crate::ColumnSizes`] and must be unique within the parent set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointOption {
    pub uid: Uid,
    pub label: String,
    pub value: String,
    pub options: Vec<SizeOption>,
}

impl BreakpointOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>, options: Vec<SizeOption>) -> Self {
        Self {
            uid: Uid::new(),
            label: label.into(),
            value: value.into(),
            options,
        }
    }

    /// Looks up the option whose value matches `value`.
    pub fn option(&self, value: &str) -> Option<&SizeOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// Sets the editor-facing label. Empty input is ignored.
    pub fn set_label(&mut self, label: &str) -> bool {
        set_non_empty(&mut self.label, label)
    }

    /// Sets the lookup value. Empty input is ignored.
    pub fn set_value(&mut self, value: &str) -> bool {
        set_non_empty(&mut self.value, value)
    }

    /// Appends a blank size option and returns its uid.
    pub fn add_option(&mut self) -> Uid {
        let option = SizeOption::blank();
        let uid = option.uid.clone();
        self.options.push(option);
        uid
    }

    pub fn set_option_label(&mut self, uid: &Uid, label: &str) -> bool {
        self.options
            .iter_mut()
            .find(|o| &o.uid == uid)
            .is_some_and(|o| set_non_empty(&mut o.label, label))
    }

    pub fn set_option_value(&mut self, uid: &Uid, value: &str) -> bool {
        self.options
            .iter_mut()
            .find(|o| &o.uid == uid)
            .is_some_and(|o| set_non_empty(&mut o.value, value))
    }

    /// Removes a size option. Refused when it is the last one.
    pub fn delete_option(&mut self, uid: &Uid) -> bool {
        if self.options.len() <= 1 {
            return false;
        }
        let before = self.options.len();
        self.options.retain(|o| &o.uid != uid);
        self.options.len() != before
    }

    /// Copy with fresh uids for the breakpoint and all of its options.
    pub fn deep_copy(&self) -> Self {
        Self {
            uid: Uid::new(),
            label: self.label.clone(),
            value: self.value.clone(),
            options: self
                .options
                .iter()
                .map(|o| SizeOption::new(o.label.clone(), o.value.clone()))
                .collect(),
        }
    }
}

/// A named, ordered set of breakpoints, widest first.
///
/// `id` is `slugify(name)` and is recomputed on every rename. It is not
/// guaranteed unique across a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointSet {
    pub id: String,
    pub uid: Uid,
    pub name: String,
    pub breakpoints: Vec<BreakpointOption>,
}

impl BreakpointSet {
    /// Creates a set named `name` with the given breakpoints.
    pub fn new(name: impl Into<String>, breakpoints: Vec<BreakpointOption>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            uid: Uid::new(),
            name,
            breakpoints,
        }
    }

    /// Creates a set seeded with Desktop/Tablet/Mobile and the default sizes.
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, defaults::default_breakpoints())
    }

    pub fn breakpoint(&self, value: &str) -> Option<&BreakpointOption> {
        self.breakpoints.iter().find(|b| b.value == value)
    }

    /// Renames the set and re-derives its id. Empty input is ignored.
    ///
    /// Presets referencing the previous id are left pointing at it.
    pub fn rename(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.name = name.to_string();
        self.id = slugify(name);
        true
    }

    /// The breakpoint offered by the "+ Breakpoint" tab.
    pub fn new_breakpoint_template(&self) -> BreakpointOption {
        self.new_breakpoint_template_with(&NamingConfig::default())
    }

    pub fn new_breakpoint_template_with(&self, naming: &NamingConfig) -> BreakpointOption {
        let label = probe_numbered_name(&naming.breakpoint_prefix, self.breakpoints.len() + 1, |n| {
            self.breakpoints.iter().any(|b| b.label == n)
        });
        let value = slugify(&label);
        BreakpointOption::new(label, value, vec![defaults::new_breakpoint_size()])
    }

    pub fn add_breakpoint(&mut self, breakpoint: BreakpointOption) {
        self.breakpoints.push(breakpoint);
    }

    /// Replaces the breakpoint with the same uid.
    pub fn replace_breakpoint(&mut self, breakpoint: BreakpointOption) -> bool {
        match self.breakpoints.iter_mut().find(|b| b.uid == breakpoint.uid) {
            Some(slot) => {
                *slot = breakpoint;
                true
            }
            None => false,
        }
    }

    /// Appends a copy of the breakpoint under the next template label/value.
    /// Returns the uid of the copy.
    pub fn duplicate_breakpoint(&mut self, uid: &Uid) -> Option<Uid> {
        let source = self.breakpoints.iter().find(|b| &b.uid == uid)?;
        let template = self.new_breakpoint_template();
        let mut copy = source.deep_copy();
        copy.label = template.label;
        copy.value = template.value;
        let copy_uid = copy.uid.clone();
        self.breakpoints.push(copy);
        Some(copy_uid)
    }

    /// Removes a breakpoint. Refused when it is the last one.
    pub fn delete_breakpoint(&mut self, uid: &Uid) -> bool {
        if self.breakpoints.len() <= 1 {
            return false;
        }
        let before = self.breakpoints.len();
        self.breakpoints.retain(|b| &b.uid != uid);
        self.breakpoints.len() != before
    }

    /// Copy with fresh uids throughout, keeping name and id.
    pub fn deep_copy(&self) -> Self {
        Self {
            id: self.id.clone(),
            uid: Uid::new(),
            name: self.name.clone(),
            breakpoints: self.breakpoints.iter().map(BreakpointOption::deep_copy).collect(),
        }
    }
}

pub(crate) fn set_non_empty(slot: &mut String, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    *slot = value.to_string();
    true
}
