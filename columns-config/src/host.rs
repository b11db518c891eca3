//! Host abstraction for the config screen.

use crate::error::ConfigResult;
use async_trait::async_trait;
use columns_model::{Configuration, ContentType};

/// What the config screen needs from the hosting application.
#[async_trait]
pub trait InstallationHost: Send + Sync {
    /// Returns the stored installation parameters, or `None` on first install.
    async fn get_parameters(&self) -> ConfigResult<Option<Configuration>>;

    /// Lists every content type in the space. Order is not significant.
    async fn list_content_types(&self) -> ConfigResult<Vec<ContentType>>;
}
