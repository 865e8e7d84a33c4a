use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// An item with a storage-assigned identifier and a mutable name.
///
/// `id` is `None` until the item has been saved. Request bodies may omit it
/// or send `null`; create and update ignore any client-supplied value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct Item {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Sample Item", min_length = 1, max_length = 255)]
    pub name: String,
}

impl Item {
    /// An unsaved item
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: i64, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }
}
