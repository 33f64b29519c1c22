//! # Taskboard Core
//!
//! State and transitions for a column task board: a fixed set of columns,
//! each an ordered list of tasks that can be created and reordered by drag.
//!
//! Task ids are positional. After every create or move, each task's id equals
//! its index in its column.

pub mod domain;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use domain::{Board, BoardConfig, Column, ColumnConfig, Task};
pub use engine::{
    create_task, handle_drag_event, move_task, BoardAction, CreateTask, DragEvent, DragSession,
    IgnoreReason, MoveIntent, Outcome, ReplaySummary,
};
pub use error::{Result, TaskboardError};
