//! Actor configuration.

use serde::{Deserialize, Serialize};

/// Default number of history entries an actor keeps.
pub const DEFAULT_HISTORY_LIMIT: usize = 256;

/// Tunables for an [`Actor`](crate::actor::Actor).
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use quizset::actor::ActorConfig;
///
/// let config: ActorConfig = serde_json::from_str(r#"{ "historyLimit": 8 }"#).unwrap();
/// assert_eq!(config.history_limit, 8);
/// assert!(!config.notify_unchanged);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActorConfig {
    /// Maximum number of transitions kept in the actor's history.
    pub history_limit: usize,

    /// Also notify subscribers after events that leave the snapshot unchanged.
    pub notify_unchanged: bool,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            notify_unchanged: false,
        }
    }
}

impl ActorConfig {
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    pub fn with_notify_unchanged(mut self, notify: bool) -> Self {
        self.notify_unchanged = notify;
        self
    }
}
