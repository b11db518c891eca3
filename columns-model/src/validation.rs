//! Validation-deferred conditions.
//!
//! Nothing here rejects a write. Issues are markers for the editor UI, which
//! flags the offending input and keeps the session usable until the operator
//! fixes it before saving.

use columns_types::Uid;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::{BreakpointOption, BreakpointSet, Configuration};

/// What is wrong with an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IssueKind {
    EmptyName,
    EmptyLabel,
    EmptyValue,
    /// A breakpoint set with no breakpoints.
    NoBreakpoints,
    /// A breakpoint with no size options.
    NoSizeOptions,
    /// Two breakpoints in one set share a lookup value.
    DuplicateBreakpointValue { value: String },
    /// A preset references a breakpoint set id that no set carries.
    DanglingBreakpoints { id: String },
    /// Two presets, or two breakpoint sets, slugify to the same id.
    DuplicateId { id: String },
}

/// An issue attached to the uid of the entity the UI should mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub uid: Uid,
    #[serde(flatten)]
    pub kind: IssueKind,
}

impl ValidationIssue {
    fn new(uid: &Uid, kind: IssueKind) -> Self {
        Self { uid: uid.clone(), kind }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::EmptyName => write!(f, "{}: name is required", self.uid),
            IssueKind::EmptyLabel => write!(f, "{}: label is required", self.uid),
            IssueKind::EmptyValue => write!(f, "{}: value is required", self.uid),
            IssueKind::NoBreakpoints => write!(f, "{}: at least one breakpoint is required", self.uid),
            IssueKind::NoSizeOptions => write!(f, "{}: at least one size option is required", self.uid),
            IssueKind::DuplicateBreakpointValue { value } => {
                write!(f, "{}: breakpoint value {value:?} is used more than once", self.uid)
            }
            IssueKind::DanglingBreakpoints { id } => {
                write!(f, "{}: breakpoints {id:?} do not exist", self.uid)
            }
            IssueKind::DuplicateId { id } => write!(f, "{}: id {id:?} is not unique", self.uid),
        }
    }
}

/// Collects every validation-deferred condition in a configuration.
pub fn validate(config: &Configuration) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for set in &config.breakpoints {
        validate_set(set, &mut issues);
    }
    duplicate_ids(config.breakpoints.iter().map(|s| (&s.uid, s.id.as_str())), &mut issues);

    for preset in &config.presets {
        if preset.name.is_empty() {
            issues.push(ValidationIssue::new(&preset.uid, IssueKind::EmptyName));
        }
        if config.breakpoint_set(&preset.breakpoints).is_none() {
            issues.push(ValidationIssue::new(
                &preset.uid,
                IssueKind::DanglingBreakpoints {
                    id: preset.breakpoints.clone(),
                },
            ));
        }
    }
    duplicate_ids(config.presets.iter().map(|p| (&p.uid, p.id.as_str())), &mut issues);

    debug!("Validated configuration: {} issue(s)", issues.len());
    issues
}

fn validate_set(set: &BreakpointSet, issues: &mut Vec<ValidationIssue>) {
    if set.name.is_empty() {
        issues.push(ValidationIssue::new(&set.uid, IssueKind::EmptyName));
    }
    if set.breakpoints.is_empty() {
        issues.push(ValidationIssue::new(&set.uid, IssueKind::NoBreakpoints));
    }

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for breakpoint in &set.breakpoints {
        validate_breakpoint(breakpoint, issues);
        let count = seen.entry(breakpoint.value.as_str()).or_default();
        *count += 1;
        // Report once per breakpoint after the first holder of the value.
        if *count > 1 && !breakpoint.value.is_empty() {
            issues.push(ValidationIssue::new(
                &breakpoint.uid,
                IssueKind::DuplicateBreakpointValue {
                    value: breakpoint.value.clone(),
                },
            ));
        }
    }
}

fn validate_breakpoint(breakpoint: &BreakpointOption, issues: &mut Vec<ValidationIssue>) {
    if breakpoint.label.is_empty() {
        issues.push(ValidationIssue::new(&breakpoint.uid, IssueKind::EmptyLabel));
    }
    if breakpoint.value.is_empty() {
        issues.push(ValidationIssue::new(&breakpoint.uid, IssueKind::EmptyValue));
    }
    if breakpoint.options.is_empty() {
        issues.push(ValidationIssue::new(&breakpoint.uid, IssueKind::NoSizeOptions));
    }
    for option in &breakpoint.options {
        if option.label.is_empty() {
            issues.push(ValidationIssue::new(&option.uid, IssueKind::EmptyLabel));
        }
        if option.value.is_empty() {
            issues.push(ValidationIssue::new(&option.uid, IssueKind::EmptyValue));
        }
    }
}

fn duplicate_ids<'a>(entries: impl Iterator<Item = (&'a Uid, &'a str)>, issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (uid, id) in entries {
        let count = seen.entry(id).or_default();
        *count += 1;
        if *count > 1 {
            issues.push(ValidationIssue::new(uid, IssueKind::DuplicateId { id: id.to_string() }));
        }
    }
}
