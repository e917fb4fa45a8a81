use serde::{Deserialize, Serialize};

/// What a freshly started app restores
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartupBehavior {
    /// Use the configured defaults
    #[default]
    Default,
    /// Use the state of the last closed window
    LastClosed,
}

impl StartupBehavior {
    /// Pick `default` or `last` depending on the behavior
    pub fn choose<T>(self, default: impl FnOnce() -> T, last: impl FnOnce() -> T) -> T {
        match self {
            StartupBehavior::Default => default(),
            StartupBehavior::LastClosed => last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_behavior_serde() {
        assert_eq!(
            serde_json::to_string(&StartupBehavior::LastClosed).unwrap(),
            r#""last_closed""#
        );
        let parsed: StartupBehavior = serde_json::from_str(r#""default""#).unwrap();
        assert_eq!(parsed, StartupBehavior::Default);
    }

    #[test]
    fn test_startup_behavior_choose() {
        assert_eq!(StartupBehavior::Default.choose(|| 1, || 2), 1);
        assert_eq!(StartupBehavior::LastClosed.choose(|| 1, || 2), 2);
    }
}
