//! Core type definitions for Columns.
//!
//! This crate defines the identity primitives shared by every entity in the
//! configuration model and the field adapter:
//! - Opaque, stable uids (UUID v7 text)
//! - Slug derivation from human labels
//! - Uniqueness-probing numbered names ("Preset 3")
//!
//! Domain types (breakpoints, presets, columns) live in `columns-model`.

mod naming;
mod slug;
mod uid;

pub use naming::{numbered_name, probe_numbered_name};
pub use slug::{slugify, SLUG_SEPARATOR};
pub use uid::Uid;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid uid: {0:?}")]
    InvalidUid(String),
}
