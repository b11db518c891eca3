use columns_model::defaults::default_column;
use columns_model::{BreakpointOption, Column, Configuration};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::backing::ColumnsField;
use crate::controller::{ColumnController, ResolvedSize};
use crate::error::FieldResult;
use crate::field::Field;
use crate::view::{place_column, ColumnOwner, VirtualFieldView};

/// Per-field settings chosen when the field is set up in the content model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceParameters {
    /// Preset id or name.
    pub preset: String,
    /// Breakpoint set id or name; the first set is used when absent.
    #[serde(default)]
    pub breakpoints: Option<String>,
}

impl InstanceParameters {
    /// Reads the parameters the host stores on the field instance.
    pub fn from_json(value: serde_json::Value) -> FieldResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Resolved size state of one breakpoint of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointSizeState {
    pub breakpoint: String,
    pub label: String,
    pub size: Option<ResolvedSize>,
}

/// Flattened read model of a column for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnState {
    pub index: usize,
    pub sizes: Vec<BreakpointSizeState>,
    pub item_count: usize,
}

/// The entry editor for one columns field: owns the column array and hands
/// out per-column controllers.
#[derive(Clone)]
pub struct EntryField {
    field: Arc<ColumnsField>,
    breakpoints: Arc<Vec<BreakpointOption>>,
    accepted_content_types: Arc<Vec<String>>,
}

impl EntryField {
    /// Resolves the field's preset and breakpoint set from the installation
    /// configuration. Unknown references fall back to the first set's
    /// breakpoints and to accepting nothing.
    pub fn new(config: &Configuration, instance: &InstanceParameters, field: Arc<ColumnsField>) -> Self {
        let accepted = config
            .find_preset(&instance.preset)
            .map(|p| p.accepted_content_types.clone())
            .unwrap_or_default();

        let breakpoints = instance
            .breakpoints
            .as_deref()
            .and_then(|key| config.find_breakpoint_set(key))
            .or_else(|| config.breakpoints.first())
            .map(|set| set.breakpoints.clone())
            .unwrap_or_default();

        Self {
            field,
            breakpoints: Arc::new(breakpoints),
            accepted_content_types: Arc::new(accepted),
        }
    }

    pub fn field(&self) -> &Arc<ColumnsField> {
        &self.field
    }

    pub fn breakpoints(&self) -> &[BreakpointOption] {
        &self.breakpoints
    }

    pub fn accepted_content_types(&self) -> &[String] {
        &self.accepted_content_types
    }

    /// Columns to render: the stored value, or a single default column when
    /// the field has never been written.
    pub fn columns(&self) -> Vec<Column> {
        self.field.get_value().unwrap_or_else(|| vec![default_column()])
    }

    pub fn add_column(&self) -> FieldResult<()> {
        let mut columns = self.field.get_value().unwrap_or_default();
        columns.push(default_column());
        debug!("Adding column {}", columns.len() - 1);
        self.field.set_value(columns)?;
        Ok(())
    }

    pub fn view(&self, index: usize) -> VirtualFieldView {
        VirtualFieldView::new(Arc::clone(&self.field), index, Arc::new(self.clone()))
    }

    pub fn controller(&self, index: usize) -> ColumnController {
        ColumnController::new(
            self.view(index),
            Arc::new(self.clone()),
            Arc::clone(&self.breakpoints),
            Arc::clone(&self.accepted_content_types),
        )
    }

    pub fn controllers(&self) -> Vec<ColumnController> {
        (0..self.column_count()).map(|i| self.controller(i)).collect()
    }

    /// Every column with its resolved per-breakpoint sizes.
    pub fn column_states(&self) -> Vec<ColumnState> {
        self.controllers()
            .iter()
            .map(|controller| ColumnState {
                index: controller.index(),
                sizes: self
                    .breakpoints
                    .iter()
                    .map(|b| BreakpointSizeState {
                        breakpoint: b.value.clone(),
                        label: b.label.clone(),
                        size: controller.resolve_size(&b.value),
                    })
                    .collect(),
                item_count: controller.items().len(),
            })
            .collect()
    }
}

impl ColumnOwner for EntryField {
    fn update_column(&self, index: usize, column: Column) -> FieldResult<()> {
        let columns = self.field.get_value().unwrap_or_default();
        self.field.set_value(place_column(&columns, index, column))?;
        Ok(())
    }

    fn remove_column(&self, index: usize) -> FieldResult<()> {
        let Some(mut columns) = self.field.get_value() else {
            return Ok(());
        };
        if index >= columns.len() {
            debug!("Ignoring removal of column {} (out of range)", index);
            return Ok(());
        }
        columns.remove(index);
        self.field.set_value(columns)?;
        Ok(())
    }

    fn column_count(&self) -> usize {
        self.field.get_value().map_or(1, |columns| columns.len())
    }
}
