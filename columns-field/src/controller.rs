use columns_model::defaults::default_column;
use columns_model::{BreakpointOption, Column, ColumnSize, ColumnSizes, Item, SizeOption};
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::FieldResult;
use crate::picker::EntryPicker;
use crate::view::{ColumnOwner, VirtualFieldView};

/// Placeholder shown when a breakpoint has no size at all.
const NO_SIZE_LABEL: &str = "Column size";

/// A size picked in the size dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSizeChange {
    /// [`BreakpointOption::value`] the size applies to.
    pub breakpoint: String,
    pub value: String,
    pub is_custom: bool,
}

impl ColumnSizeChange {
    pub fn preset(breakpoint: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            value: value.into(),
            is_custom: false,
        }
    }

    pub fn custom(breakpoint: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            breakpoint: breakpoint.into(),
            value: value.into(),
            is_custom: true,
        }
    }
}

/// The size that applies at a breakpoint after cascading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSize {
    pub value: String,
    pub is_custom: bool,
    /// The wider breakpoint the size was inherited from; `None` when set here.
    pub inherited_from: Option<String>,
}

/// Result of linking existing entries into a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkOutcome {
    /// This many entries were appended.
    Linked(usize),
    /// The dialog was dismissed.
    Cancelled,
    /// The column was removed while the dialog was open.
    Discarded,
    /// The preset accepts no content types, so nothing can be linked.
    Unavailable,
}

/// Editing logic for the column at one index.
pub struct ColumnController {
    view: VirtualFieldView,
    owner: Arc<dyn ColumnOwner>,
    breakpoints: Arc<Vec<BreakpointOption>>,
    accepted_content_types: Arc<Vec<String>>,
}

impl ColumnController {
    pub fn new(
        view: VirtualFieldView,
        owner: Arc<dyn ColumnOwner>,
        breakpoints: Arc<Vec<BreakpointOption>>,
        accepted_content_types: Arc<Vec<String>>,
    ) -> Self {
        Self {
            view,
            owner,
            breakpoints,
            accepted_content_types,
        }
    }

    pub fn index(&self) -> usize {
        self.view.index()
    }

    /// The virtual field handed to the item editor.
    pub fn view(&self) -> &VirtualFieldView {
        &self.view
    }

    pub fn breakpoints(&self) -> &[BreakpointOption] {
        &self.breakpoints
    }

    pub fn accepted_content_types(&self) -> &[String] {
        &self.accepted_content_types
    }

    /// The column as the editor shows it; the default column when the slot
    /// has not been written yet.
    pub fn column(&self) -> Column {
        self.view.backing().column(self.index()).unwrap_or_else(default_column)
    }

    pub fn sizes(&self) -> ColumnSizes {
        self.column().column_sizes
    }

    /// Resolves the size at `breakpoint`. An unset breakpoint inherits from
    /// the nearest wider breakpoint that has one.
    pub fn resolve_size(&self, breakpoint: &str) -> Option<ResolvedSize> {
        let sizes = self.sizes();
        let mut wider: Option<(&str, &ColumnSize)> = None;

        for option in self.breakpoints.iter() {
            let own = sizes.get(&option.value);
            if option.value == breakpoint {
                return match (own, wider) {
                    (Some(size), _) => Some(ResolvedSize {
                        value: size.value.clone(),
                        is_custom: size.is_custom,
                        inherited_from: None,
                    }),
                    (None, Some((from, size))) => Some(ResolvedSize {
                        value: size.value.clone(),
                        is_custom: size.is_custom,
                        inherited_from: Some(from.to_string()),
                    }),
                    (None, None) => None,
                };
            }
            if let Some(size) = own {
                wider = Some((option.value.as_str(), size));
            }
        }
        None
    }

    /// Size options offered at `breakpoint`.
    pub fn size_options(&self, breakpoint: &str) -> &[SizeOption] {
        self.breakpoints
            .iter()
            .find(|b| b.value == breakpoint)
            .map(|b| b.options.as_slice())
            .unwrap_or_default()
    }

    /// Dropdown caption: the option label for the stored size, else the raw
    /// (custom) value, else a placeholder.
    pub fn size_label(&self, breakpoint: &str) -> String {
        let sizes = self.sizes();
        let Some(size) = sizes.get(breakpoint).filter(|s| !s.value.is_empty()) else {
            return NO_SIZE_LABEL.to_string();
        };
        self.size_options(breakpoint)
            .iter()
            .find(|o| o.value == size.value)
            .map_or_else(|| size.value.clone(), |o| o.label.clone())
    }

    /// Stores a size override. Returns `false` when nothing changed, or when
    /// the value is empty (left for the dropdown to mark invalid).
    pub fn set_size(&self, change: ColumnSizeChange) -> FieldResult<bool> {
        if change.value.is_empty() {
            return Ok(false);
        }
        let column = self.column();
        let size = ColumnSize {
            value: change.value,
            is_custom: change.is_custom,
        };
        if column.column_sizes.get(&change.breakpoint) == Some(&size) {
            return Ok(false);
        }

        let mut sizes = column.column_sizes.clone();
        sizes.insert(change.breakpoint, size);
        self.owner.update_column(self.index(), column.with_sizes(sizes))?;
        Ok(true)
    }

    /// Drops the override at `breakpoint` so it inherits again.
    pub fn clear_size(&self, breakpoint: &str) -> FieldResult<bool> {
        let column = self.column();
        if !column.column_sizes.contains_key(breakpoint) {
            return Ok(false);
        }
        let mut sizes = column.column_sizes.clone();
        sizes.remove(breakpoint);
        self.owner.update_column(self.index(), column.with_sizes(sizes))?;
        Ok(true)
    }

    pub fn items(&self) -> Vec<Item> {
        self.view.read()
    }

    pub fn set_items(&self, items: Vec<Item>) -> FieldResult<Vec<Item>> {
        self.view.write(items)
    }

    /// Opens the entry dialog and appends the picked entries as links.
    pub async fn link_existing(&self, picker: &dyn EntryPicker) -> FieldResult<LinkOutcome> {
        if self.accepted_content_types.is_empty() {
            return Ok(LinkOutcome::Unavailable);
        }

        let Some(entries) = picker.pick_entries(&self.accepted_content_types).await? else {
            return Ok(LinkOutcome::Cancelled);
        };

        if self.index() >= self.owner.column_count() {
            warn!("Column {} was removed before entries were picked, discarding", self.index());
            return Ok(LinkOutcome::Discarded);
        }

        let mut items = self.items();
        items.extend(entries.iter().map(Item::link));
        self.set_items(items)?;
        debug!("Linked {} entries into column {}", entries.len(), self.index());
        Ok(LinkOutcome::Linked(entries.len()))
    }

    /// Asks the owner to remove this column.
    pub fn remove(&self) -> FieldResult<()> {
        self.owner.remove_column(self.index())
    }
}
