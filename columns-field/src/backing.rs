use columns_model::Column;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use crate::channel::{FieldChannel, Subscription};
use crate::error::FieldResult;
use crate::field::{Field, FieldInfo, Listener};

/// The single array-valued field holding every column of an entry.
///
/// Local writes and host-delivered updates both store the new value before
/// broadcasting, so subscribers always read the value they are told about.
pub struct ColumnsField {
    info: FieldInfo,
    value: RwLock<Option<Vec<Column>>>,
    channel: FieldChannel,
}

impl ColumnsField {
    pub fn new(info: FieldInfo, value: Option<Vec<Column>>) -> Self {
        Self {
            info,
            value: RwLock::new(value),
            channel: FieldChannel::new(),
        }
    }

    /// A field with no stored value, as on first load.
    pub fn empty(info: FieldInfo) -> Self {
        Self::new(info, None)
    }

    pub fn channel(&self) -> &FieldChannel {
        &self.channel
    }

    /// The column at `index`, if the slot exists.
    pub fn column(&self, index: usize) -> Option<Column> {
        self.read_value().as_ref().and_then(|columns| columns.get(index).cloned())
    }

    /// Number of stored columns; zero when the field has no value.
    pub fn len(&self) -> usize {
        self.read_value().as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Applies a value changed elsewhere (another author, another tab).
    pub fn apply_external(&self, value: Option<Vec<Column>>) {
        debug!("External update for field {}", self.info.id);
        self.store(value);
    }

    fn store(&self, value: Option<Vec<Column>>) {
        let version = {
            let mut slot = self.value.write().unwrap_or_else(PoisonError::into_inner);
            if *slot == value {
                return;
            }
            slot.clone_from(&value);
            self.channel.next_version()
        };
        self.channel.dispatch(version, &value.unwrap_or_default());
    }

    fn read_value(&self) -> std::sync::RwLockReadGuard<'_, Option<Vec<Column>>> {
        self.value.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Field for ColumnsField {
    type Value = Vec<Column>;

    fn info(&self) -> &FieldInfo {
        &self.info
    }

    fn get_value(&self) -> Option<Vec<Column>> {
        self.read_value().clone()
    }

    fn set_value(&self, value: Vec<Column>) -> FieldResult<Vec<Column>> {
        self.store(Some(value.clone()));
        Ok(value)
    }

    fn on_value_changed(&self, listener: Listener<Vec<Column>>) -> Subscription {
        self.channel.attach_whole(listener)
    }
}
