//! Field multiplexing for Columns.
//!
//! The host stores a whole row of columns in one array-valued field. Each
//! column's item editor expects a field of its own. This crate bridges the two:
//!
//! ```text
//!             ┌──────────────────────────────┐
//!  host ────▶ │ ColumnsField  Option<[Column]>│ ──▶ FieldChannel
//!             └──────────────────────────────┘        │
//!                ▲ update_column / remove_column      │ Whole / Slice(i)
//!             ┌──────────────────────────────┐        ▼
//!             │ EntryField (owner of columns) │   VirtualFieldView(i)
//!             └──────────────────────────────┘        │  read / write / subscribe
//!                                                     ▼
//!                                              ColumnController(i)
//! ```
//!
//! A [`VirtualFieldView`] implements the same [`Field`] trait as the backing
//! field, so item editors cannot tell them apart. Views never write the array
//! themselves; they hand a replacement column to the [`ColumnOwner`].

mod backing;
mod channel;
mod controller;
mod entry;
pub mod error;
mod field;
mod picker;
mod view;

pub use backing::ColumnsField;
pub use channel::{FieldChannel, Subscription, SubscriptionScope};
pub use controller::{ColumnController, ColumnSizeChange, LinkOutcome, ResolvedSize};
pub use entry::{BreakpointSizeState, ColumnState, EntryField, InstanceParameters};
pub use error::{FieldError, FieldResult};
pub use field::{Field, FieldInfo, Listener};
pub use picker::EntryPicker;
pub use view::{place_column, ColumnOwner, VirtualFieldView};
