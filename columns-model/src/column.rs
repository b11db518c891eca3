use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `type` written on every item linked through the entry picker.
pub const LINK_TYPE: &str = "Link";

/// The chosen size of a column at one breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSize {
    pub value: String,
    pub is_custom: bool,
}

impl ColumnSize {
    pub fn preset(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_custom: false,
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_custom: true,
        }
    }
}

/// Per-breakpoint sizes keyed by [`crate::BreakpointOption::value`].
/// A missing key means "no override".
pub type ColumnSizes = BTreeMap<String, ColumnSize>;

/// An opaque reference to another piece of content.
///
/// Stored as `{"sys": {"id", "type", "linkType"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRepr", into = "ItemRepr")]
pub struct Item {
    pub id: String,
    pub kind: String,
    pub link_type: String,
}

impl Item {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, link_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            link_type: link_type.into(),
        }
    }

    /// A link to a picked entry.
    pub fn link(entry: &EntryRef) -> Self {
        Self::new(entry.id.clone(), LINK_TYPE, entry.kind.clone())
    }
}

#[derive(Serialize, Deserialize)]
struct ItemRepr {
    sys: ItemSys,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ItemSys {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    link_type: String,
}

impl From<ItemRepr> for Item {
    fn from(repr: ItemRepr) -> Self {
        Self {
            id: repr.sys.id,
            kind: repr.sys.kind,
            link_type: repr.sys.link_type,
        }
    }
}

impl From<Item> for ItemRepr {
    fn from(item: Item) -> Self {
        Self {
            sys: ItemSys {
                id: item.id,
                kind: item.kind,
                link_type: item.link_type,
            },
        }
    }
}

/// An entry returned by the host's selection dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
    pub id: String,
    /// The entry's `sys.type`, e.g. `"Entry"`.
    #[serde(rename = "type")]
    pub kind: String,
}

impl EntryRef {
    pub fn entry(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: "Entry".to_string(),
        }
    }
}

/// One column of a columns field. A column has no identity of its own; it is
/// addressed by its index in the field's array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(default)]
    pub column_sizes: ColumnSizes,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(column_sizes: ColumnSizes, items: Vec<Item>) -> Self {
        Self { column_sizes, items }
    }

    /// Same sizes, different items.
    pub fn with_items(&self, items: Vec<Item>) -> Self {
        Self {
            column_sizes: self.column_sizes.clone(),
            items,
        }
    }

    /// Same items, different sizes.
    pub fn with_sizes(&self, column_sizes: ColumnSizes) -> Self {
        Self {
            column_sizes,
            items: self.items.clone(),
        }
    }
}
