use serde::{Deserialize, Serialize};

/// A named, identifiable record displayed in the drawer list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Opaque identifier
    pub id: String,
    /// Display name, drives both search and the letter index
    #[serde(default)]
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_missing_name_deserializes_empty() {
        let item: Item = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(item, Item::new("7", ""));
    }
}
