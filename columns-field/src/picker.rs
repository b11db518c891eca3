use async_trait::async_trait;
use columns_model::EntryRef;

use crate::error::FieldResult;

/// The host's modal entry selection dialog.
#[async_trait]
pub trait EntryPicker: Send + Sync {
    /// Lets the editor pick entries of the allowed content types.
    /// Resolves to `None` when the dialog is dismissed.
    async fn pick_entries(&self, allowed_content_types: &[String]) -> FieldResult<Option<Vec<EntryRef>>>;
}
