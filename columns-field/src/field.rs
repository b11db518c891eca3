use serde::{Deserialize, Serialize};

use crate::channel::Subscription;
use crate::error::FieldResult;

/// Callback invoked with a field's new value.
pub type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Static description of a field, passed through unchanged by virtual views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub id: String,
    pub name: String,
    pub locale: String,
    pub field_type: String,
    pub required: bool,
}

impl FieldInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            locale: "en-US".to_string(),
            field_type: "Object".to_string(),
            required: false,
        }
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// The capability surface a field editor works against.
pub trait Field: Send + Sync {
    type Value: Clone + PartialEq + Send + Sync + 'static;

    fn info(&self) -> &FieldInfo;

    /// The current value, or `None` when the field has never been written.
    fn get_value(&self) -> Option<Self::Value>;

    /// Writes a value and resolves with the value now held.
    fn set_value(&self, value: Self::Value) -> FieldResult<Self::Value>;

    /// Registers for change notifications until the returned guard is dropped.
    fn on_value_changed(&self, listener: Listener<Self::Value>) -> Subscription;
}
