use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task on the board
///
/// `id` is positional: it always equals the task's index within its column
/// and is rewritten after every create or move. `key` is the stable identity
/// that follows the task from column to column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: usize,
    pub description: String,
    #[serde(default = "Uuid::new_v4")]
    pub key: Uuid,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a task with the given positional id
    pub fn new(id: usize, description: String) -> Self {
        Self {
            id,
            description,
            key: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    /// Creates a task whose position is not known yet
    ///
    /// The id is a placeholder until the owning column is reindexed.
    pub fn unplaced(description: String) -> Self {
        Self::new(usize::MAX, description)
    }
}
