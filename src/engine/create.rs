use crate::domain::{Board, Task};
use crate::engine::{resolve_column_id, IgnoreReason, Outcome};
use serde::{Deserialize, Serialize};

/// Request to append a task to a column
///
/// The description is expected to be non-empty; that check belongs to the
/// caller collecting the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub column_id: i64,
    pub description: String,
}

impl CreateTask {
    pub fn new(column_id: u32, description: impl Into<String>) -> Self {
        Self {
            column_id: i64::from(column_id),
            description: description.into(),
        }
    }
}

/// Appends a task to the end of a column and reindexes it
pub fn create_task(board: &mut Board, request: &CreateTask) -> Outcome {
    let Some(column) = resolve_column_id(request.column_id).and_then(|id| board.column_mut(id))
    else {
        tracing::debug!(column_id = request.column_id, "create ignored: unknown column");
        return Outcome::Ignored(IgnoreReason::ColumnNotFound(request.column_id));
    };

    column.tasks.push(Task::unplaced(request.description.clone()));
    column.reindex();

    tracing::trace!(
        column_id = column.id,
        position = column.len() - 1,
        "task created"
    );
    Outcome::Applied
}
