use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the drawer items come from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataConfig {
    /// JSON file holding an array of `{ "id", "name" }` objects.
    /// The bundled sample clients are used when unset.
    pub path: Option<PathBuf>,
}
