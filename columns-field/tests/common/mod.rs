//! Shared fixtures for field tests.

#![allow(dead_code)]

use columns_field::{ColumnsField, EntryField, FieldInfo, InstanceParameters};
use columns_model::{BreakpointSet, Column, Configuration, Item, Preset};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn item(id: &str) -> Item {
    Item::new(id, "Entry", "Entry")
}

pub fn empty_column() -> Column {
    Column::default()
}

pub fn field_with(columns: Option<Vec<Column>>) -> Arc<ColumnsField> {
    Arc::new(ColumnsField::new(FieldInfo::new("columns").with_locale("en-US"), columns))
}

pub fn config(accepted: &[&str]) -> Configuration {
    let set = BreakpointSet::with_defaults("Breakpoints 1");
    let preset = Preset::new(
        "Preset 1",
        accepted.iter().map(|s| s.to_string()).collect(),
        set.id.clone(),
    );
    Configuration::new(vec![preset], vec![set])
}

pub fn entry(columns: Option<Vec<Column>>, accepted: &[&str]) -> EntryField {
    let instance = InstanceParameters {
        preset: "preset-1".into(),
        breakpoints: Some("breakpoints-1".into()),
    };
    EntryField::new(&config(accepted), &instance, field_with(columns))
}

/// Counts calls and keeps every value received.
#[derive(Clone)]
pub struct Recorder<T> {
    calls: Arc<AtomicUsize>,
    values: Arc<Mutex<Vec<T>>>,
}

impl<T: Clone + Send + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn callback(&self) -> impl Fn(&T) + Send + Sync + 'static {
        let calls = Arc::clone(&self.calls);
        let values = Arc::clone(&self.values);
        move |value: &T| {
            calls.fetch_add(1, Ordering::SeqCst);
            values.lock().unwrap().push(value.clone());
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<T> {
        self.values.lock().unwrap().last().cloned()
    }
}
