use serde::{Deserialize, Serialize};

/// A content type known to the host, as listed by the catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentType {
    pub id: String,
    pub name: String,
}

impl ContentType {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Sorts a catalog by display name ascending, the order editors see it in.
pub fn sort_by_name(catalog: &mut [ContentType]) {
    catalog.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
}
