//! Loading item lists from disk or from the bundled sample data.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::assets::SAMPLE_CLIENTS;
use crate::types::Item;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to read data file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse data file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON array of items from `path`
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<Item>, DataError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let items: Vec<Item> = serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = items.len(), "Loaded items");
    Ok(items)
}

/// Placeholder clients bundled with the binary
pub fn sample_items() -> Vec<Item> {
    serde_json::from_str(SAMPLE_CLIENTS).unwrap_or_else(|e| {
        tracing::error!(?e, "Bundled sample data is malformed");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_items() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clients.json");
        fs::write(
            &path,
            r#"[{"id":"1","name":"Alice"},{"id":"2","name":"Bob"},{"id":"3"}]"#,
        )
        .unwrap();

        let items = load_items(&path).unwrap();
        assert_eq!(
            items,
            vec![
                Item::new("1", "Alice"),
                Item::new("2", "Bob"),
                Item::new("3", ""),
            ]
        );
    }

    #[test]
    fn test_load_items_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");

        let err = load_items(&path).unwrap_err();
        assert!(matches!(err, DataError::Read { .. }));
    }

    #[test]
    fn test_load_items_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ not a list").unwrap();

        let err = load_items(&path).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn test_sample_items_not_empty() {
        let items = sample_items();
        assert!(!items.is_empty());
        assert!(items.iter().all(|item| !item.id.is_empty()));
    }
}
