//! Board transitions: task creation, reordering, and the drag session that
//! turns hover events into move intents.
//!
//! Operations never fail. A reference to a column or task that does not exist
//! leaves the board untouched and reports why through [`Outcome`].

use crate::domain::Board;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod create;
pub mod drag;
pub mod reorder;

pub use create::{create_task, CreateTask};
pub use drag::{handle_drag_event, DragEvent, DragSession};
pub use reorder::{move_task, MoveIntent};

/// Column id as sent by the view; negative or oversized ids name no column
pub(crate) fn resolve_column_id(id: i64) -> Option<u32> {
    u32::try_from(id).ok()
}

/// Positional id as sent by the view; negative ids name no task
pub(crate) fn resolve_position(id: i64) -> Option<usize> {
    usize::try_from(id).ok()
}

/// Why an operation left the board unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    ColumnNotFound(i64),
    TaskNotFound { column_id: i64, position: i64 },
    /// Same-column move without a task under the pointer
    NoTarget,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnNotFound(id) => write!(f, "column {} not found", id),
            Self::TaskNotFound { column_id, position } => {
                write!(f, "no task at position {} in column {}", position, column_id)
            }
            Self::NoTarget => write!(f, "no target task"),
        }
    }
}

/// Result of applying one operation to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// An operation dispatched by the view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum BoardAction {
    CreateTask(CreateTask),
    MoveTask(MoveIntent),
}

/// Tally of a replayed action list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub ignored: Vec<IgnoreReason>,
}

impl Board {
    /// Applies a dispatched action in place
    pub fn apply(&mut self, action: &BoardAction) -> Outcome {
        match action {
            BoardAction::CreateTask(request) => create_task(self, request),
            BoardAction::MoveTask(intent) => move_task(self, intent),
        }
    }

    /// Applies actions in order, collecting the reasons for any that were ignored
    pub fn replay(&mut self, actions: &[BoardAction]) -> ReplaySummary {
        let mut summary = ReplaySummary::default();
        for action in actions {
            match self.apply(action) {
                Outcome::Applied => summary.applied += 1,
                Outcome::Ignored(reason) => summary.ignored.push(reason),
            }
        }
        summary
    }
}
