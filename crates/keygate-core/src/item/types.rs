//! Item type definitions

use serde::{Deserialize, Serialize};

/// A stored item
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    /// Item identifier, used as the store key
    pub id: String,
    /// Opaque value
    pub value: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let item: Item = serde_json::from_str(r#"{"id":"x"}"#).unwrap();

        assert_eq!(item, Item::new("x", ""));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(Item::new("x", "v")).unwrap();

        assert_eq!(json, serde_json::json!({"id": "x", "value": "v"}));
    }
}
