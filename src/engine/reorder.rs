use crate::domain::{Board, Task};
use crate::engine::{resolve_column_id, resolve_position, IgnoreReason, Outcome};
use serde::{Deserialize, Serialize};

/// Request to relocate one task
///
/// Takes the task at `prev_position_id` in `prev_column_id` and places it at
/// `new_position_id` in `new_column_id`. A `new_position_id` of `None` means
/// the pointer was over empty space rather than over a task; on the wire this
/// is `-1`. The other ids stay signed as sent, so a view that reports `-1` for
/// an unset drag origin produces an ignored move rather than a parse error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveIntent {
    pub prev_column_id: i64,
    pub new_column_id: i64,
    pub prev_position_id: i64,
    #[serde(with = "drop_position")]
    pub new_position_id: Option<usize>,
}

impl MoveIntent {
    pub fn new(
        prev_column_id: u32,
        new_column_id: u32,
        prev_position_id: usize,
        new_position_id: Option<usize>,
    ) -> Self {
        Self {
            prev_column_id: i64::from(prev_column_id),
            new_column_id: i64::from(new_column_id),
            prev_position_id: i64::try_from(prev_position_id).unwrap_or(i64::MAX),
            new_position_id,
        }
    }

    pub fn is_cross_column(&self) -> bool {
        self.prev_column_id != self.new_column_id
    }
}

/// Wire form of a drop position: a non-negative index, or -1 for empty space
mod drop_position {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const EMPTY_SPACE: i64 = -1;

    pub fn serialize<S>(value: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(position) => serializer.serialize_u64(*position as u64),
            None => serializer.serialize_i64(EMPTY_SPACE),
        }
    }

    // Any negative value is treated as empty space.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Ok(usize::try_from(raw).ok())
    }
}

/// Commits one reordering step
///
/// Within a column the task is spliced from its old index to the new one,
/// and a move onto empty space changes nothing. Across columns the task is
/// appended to the destination, then spliced to `new_position_id` when one
/// is given. Every touched column is reindexed afterwards.
pub fn move_task(board: &mut Board, intent: &MoveIntent) -> Outcome {
    let outcome = if intent.is_cross_column() {
        move_across_columns(board, intent)
    } else {
        move_within_column(board, intent)
    };

    match outcome {
        Outcome::Applied => tracing::trace!(?intent, "task moved"),
        Outcome::Ignored(reason) => tracing::debug!(?intent, %reason, "move ignored"),
    }
    outcome
}

fn move_within_column(board: &mut Board, intent: &MoveIntent) -> Outcome {
    let column_id = intent.prev_column_id;
    let Some(column) = resolve_column_id(column_id).and_then(|id| board.column_mut(id)) else {
        return Outcome::Ignored(IgnoreReason::ColumnNotFound(column_id));
    };
    let Some(to) = intent.new_position_id else {
        return Outcome::Ignored(IgnoreReason::NoTarget);
    };

    let len = column.len();
    let Some(from) = resolve_position(intent.prev_position_id).filter(|&from| from < len) else {
        return Outcome::Ignored(IgnoreReason::TaskNotFound {
            column_id,
            position: intent.prev_position_id,
        });
    };

    splice_move(&mut column.tasks, from, to);
    column.reindex();
    Outcome::Applied
}

fn move_across_columns(board: &mut Board, intent: &MoveIntent) -> Outcome {
    let Some(source) = column_index(board, intent.prev_column_id) else {
        return Outcome::Ignored(IgnoreReason::ColumnNotFound(intent.prev_column_id));
    };
    let Some(destination) = column_index(board, intent.new_column_id) else {
        return Outcome::Ignored(IgnoreReason::ColumnNotFound(intent.new_column_id));
    };

    let source_tasks = &mut board.columns[source].tasks;
    let Some(index) = resolve_position(intent.prev_position_id)
        .and_then(|position| source_tasks.iter().position(|task| task.id == position))
    else {
        return Outcome::Ignored(IgnoreReason::TaskNotFound {
            column_id: intent.prev_column_id,
            position: intent.prev_position_id,
        });
    };
    let task = source_tasks.remove(index);

    let destination_column = &mut board.columns[destination];
    destination_column.tasks.push(task);
    if let Some(to) = intent.new_position_id {
        // The moved task is the one just appended.
        let from = destination_column.len() - 1;
        splice_move(&mut destination_column.tasks, from, to);
    }

    board.columns[source].reindex();
    board.columns[destination].reindex();
    Outcome::Applied
}

fn column_index(board: &Board, column_id: i64) -> Option<usize> {
    let column_id = resolve_column_id(column_id)?;
    board.columns.iter().position(|column| column.id == column_id)
}

/// Takes the task at `from` and reinserts it at `to`, shifting the tasks in
/// between. A `to` past the end lands the task last.
fn splice_move(tasks: &mut Vec<Task>, from: usize, to: usize) {
    let task = tasks.remove(from);
    let to = to.min(tasks.len());
    tasks.insert(to, task);
}
