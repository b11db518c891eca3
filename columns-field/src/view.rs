use columns_model::defaults::{default_column, default_column_sizes};
use columns_model::{Column, Item};
use std::sync::Arc;
use tracing::debug;

use crate::backing::ColumnsField;
use crate::channel::{project, Subscription};
use crate::error::FieldResult;
use crate::field::{Field, FieldInfo, Listener};

/// The owner of all columns: the only party that writes the backing array.
pub trait ColumnOwner: Send + Sync {
    /// Replaces (or materializes) the column at `index`.
    fn update_column(&self, index: usize, column: Column) -> FieldResult<()>;

    /// Removes the column at `index`, shifting later columns down.
    fn remove_column(&self, index: usize) -> FieldResult<()>;

    /// How many columns the editor currently shows.
    fn column_count(&self) -> usize;
}

/// Returns `columns` with `column` placed at `index`. Missing slots before
/// `index` are filled with the default column.
pub fn place_column(columns: &[Column], index: usize, column: Column) -> Vec<Column> {
    let mut next = columns.to_vec();
    while next.len() < index {
        next.push(default_column());
    }
    if index < next.len() {
        next[index] = column;
    } else {
        next.push(column);
    }
    next
}

/// One column's items, presented as a field of their own.
///
/// Holds a reference to the backing field rather than a copy. Only the value
/// capabilities are scoped to `index`; [`Field::info`] is the backing field's.
#[derive(Clone)]
pub struct VirtualFieldView {
    backing: Arc<ColumnsField>,
    index: usize,
    owner: Arc<dyn ColumnOwner>,
}

impl VirtualFieldView {
    pub fn new(backing: Arc<ColumnsField>, index: usize, owner: Arc<dyn ColumnOwner>) -> Self {
        Self { backing, index, owner }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn backing(&self) -> &Arc<ColumnsField> {
        &self.backing
    }

    /// Items at this view's index; empty when the slot or value is missing.
    pub fn read(&self) -> Vec<Item> {
        project(&self.backing.get_value().unwrap_or_default(), self.index)
    }

    /// Forwards changed items to the owner as a whole column. Writing the
    /// items already stored is a no-op.
    pub fn write(&self, items: Vec<Item>) -> FieldResult<Vec<Item>> {
        let current = self.backing.column(self.index);
        let current_items = current.as_ref().map(|c| c.items.as_slice()).unwrap_or_default();
        if current_items == items.as_slice() {
            debug!("Column {} unchanged, skipping write", self.index);
            return Ok(items);
        }

        let column = match current {
            Some(column) => column.with_items(items.clone()),
            None => Column::new(default_column_sizes(), items.clone()),
        };
        self.owner.update_column(self.index, column)?;
        Ok(items)
    }

    /// Calls `callback` whenever the items at this index change.
    pub fn subscribe(&self, callback: impl Fn(&Vec<Item>) + Send + Sync + 'static) -> Subscription {
        self.backing.channel().attach_slice(self.index, self.read(), callback)
    }
}

impl Field for VirtualFieldView {
    type Value = Vec<Item>;

    fn info(&self) -> &FieldInfo {
        self.backing.info()
    }

    fn get_value(&self) -> Option<Vec<Item>> {
        Some(self.read())
    }

    fn set_value(&self, value: Vec<Item>) -> FieldResult<Vec<Item>> {
        self.write(value)
    }

    fn on_value_changed(&self, listener: Listener<Vec<Item>>) -> Subscription {
        self.subscribe(listener)
    }
}
