pub mod board;
pub mod task;

pub use board::{Board, BoardConfig, Column, ColumnConfig};
pub use task::Task;
