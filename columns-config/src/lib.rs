//! Configuration store for Columns.
//!
//! - [`store`]: pure `(state, args) -> state` operations over a
//!   [`Configuration`](columns_model::Configuration)
//! - [`ConfigScreen`]: the editing session that loads parameters from the
//!   host, applies store operations and hands back the document to persist
//! - [`InstallationHost`]: the host contract the session consumes

pub mod error;
pub mod host;
pub mod screen;
pub mod store;

pub use error::{ConfigError, ConfigResult};
pub use host::InstallationHost;
pub use screen::ConfigScreen;
