use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Minimum window dimension in logical pixels
pub const MIN_WINDOW_DIMENSION: u32 = 320;

/// Main window size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

impl WindowConfig {
    /// Size with each dimension raised to at least `MIN_WINDOW_DIMENSION`
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(MIN_WINDOW_DIMENSION),
            height: self.height.max(MIN_WINDOW_DIMENSION),
        }
    }
}
