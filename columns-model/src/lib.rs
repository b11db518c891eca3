//! Data model for Columns.
//!
//! Defines the document shapes that the config screen authors and the entry
//! field consumes:
//! - [`BreakpointSet`] → [`BreakpointOption`] → [`SizeOption`] (deep ownership)
//! - [`Preset`]: accepted content types bound to a breakpoint set by id
//! - [`Configuration`]: the aggregate root persisted as installation parameters
//! - [`Column`] / [`ColumnSizes`] / [`Item`]: the value of a columns field
//!
//! Serialized field names match the host's JSON documents (camelCase, `sys`
//! wrapped links), so these types round-trip stored parameters unchanged.

mod breakpoint;
mod column;
mod configuration;
mod content_type;
pub mod defaults;
mod preset;
mod validation;

pub use breakpoint::{BreakpointOption, BreakpointSet, SizeOption};
pub use column::{Column, ColumnSize, ColumnSizes, EntryRef, Item, LINK_TYPE};
pub use configuration::Configuration;
pub use content_type::{sort_by_name, ContentType};
pub use defaults::NamingConfig;
pub use preset::Preset;
pub use validation::{validate, IssueKind, ValidationIssue};
