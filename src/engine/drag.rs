//! Drag session tracking.
//!
//! Hover events arrive far more often than the board needs to change, so the
//! session keeps its own small state outside the board. Every hover that lands
//! somewhere new is committed immediately as a single move, and the session's
//! origin then jumps to where the task now sits. Nothing is buffered until the
//! drop, so ending a drag needs no compensating step.

use crate::domain::{Board, Column};
use crate::engine::{move_task, MoveIntent, Outcome};

/// Origin and current hover target of an in-progress drag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragSession {
    start_column: Option<u32>,
    start_task: Option<usize>,
    hover_column: Option<u32>,
    hover_task: Option<usize>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the task the drag started from
    pub fn start(&mut self, column_id: u32, position: usize) {
        self.start_column = Some(column_id);
        self.start_task = Some(position);
        self.clear_hover();
    }

    pub fn is_active(&self) -> bool {
        self.origin().is_some()
    }

    /// Column id and positional id of the dragged task as of the last commit
    pub fn origin(&self) -> Option<(u32, usize)> {
        Some((self.start_column?, self.start_task?))
    }

    /// Pointer entered a task
    ///
    /// Returns the move that places the dragged task at the hovered position.
    /// Hovering the dragged task itself yields nothing.
    pub fn enter_task(&mut self, column_id: u32, position: usize) -> Option<MoveIntent> {
        self.hover_column = Some(column_id);
        self.hover_task = Some(position);
        self.commit_hover()
    }

    /// Pointer entered the empty part of a column holding `task_count` tasks
    ///
    /// Only a column other than the origin's produces a move, which appends
    /// the dragged task to the end.
    pub fn enter_column(&mut self, column_id: u32, task_count: usize) -> Option<MoveIntent> {
        if self.start_column == Some(column_id) {
            return None;
        }
        self.hover_column = Some(column_id);
        self.hover_task = Some(task_count);
        self.commit_hover()
    }

    /// Drops the session; earlier hover steps stay committed
    pub fn end(&mut self) {
        *self = Self::default();
    }

    fn commit_hover(&mut self) -> Option<MoveIntent> {
        let hover = self.hover_column.zip(self.hover_task);
        self.clear_hover();

        let (start_column, start_task) = self.origin()?;
        let (hover_column, hover_task) = hover?;
        if (start_column, start_task) == (hover_column, hover_task) {
            return None;
        }

        self.start_column = Some(hover_column);
        self.start_task = Some(hover_task);
        Some(MoveIntent::new(
            start_column,
            hover_column,
            start_task,
            Some(hover_task),
        ))
    }

    fn clear_hover(&mut self) {
        self.hover_column = None;
        self.hover_task = None;
    }
}

/// Pointer events reported by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start { column_id: u32, position: usize },
    EnterTask { column_id: u32, position: usize },
    EnterColumn { column_id: u32 },
    End,
}

/// Feeds one pointer event through the session and commits the resulting
/// move, if any. Returns `None` when the event did not produce a move.
pub fn handle_drag_event(
    board: &mut Board,
    session: &mut DragSession,
    event: DragEvent,
) -> Option<Outcome> {
    let intent = match event {
        DragEvent::Start {
            column_id,
            position,
        } => {
            session.start(column_id, position);
            None
        }
        DragEvent::EnterTask {
            column_id,
            position,
        } => session.enter_task(column_id, position),
        DragEvent::EnterColumn { column_id } => {
            let task_count = board.column(column_id).map_or(0, Column::len);
            session.enter_column(column_id, task_count)
        }
        DragEvent::End => {
            session.end();
            None
        }
    }?;

    Some(move_task(board, &intent))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TODO: u32 = 0;
    const IN_PROGRESS: u32 = 1;
    const QA: u32 = 2;
    const DONE: u32 = 3;

    fn descriptions(board: &Board, column_id: u32) -> Vec<&str> {
        board
            .column(column_id)
            .unwrap()
            .tasks
            .iter()
            .map(|task| task.description.as_str())
            .collect()
    }

    #[test]
    fn test_hover_emits_intent_and_advances_origin() {
        let mut session = DragSession::new();
        session.start(QA, 0);

        let intent = session.enter_task(QA, 1);

        assert_eq!(intent, Some(MoveIntent::new(QA, QA, 0, Some(1))));
        assert_eq!(session.origin(), Some((QA, 1)));
    }

    #[test]
    fn test_hover_over_origin_emits_nothing() {
        let mut session = DragSession::new();
        session.start(QA, 1);

        assert_eq!(session.enter_task(QA, 1), None);
        assert_eq!(session.origin(), Some((QA, 1)));
    }

    #[test]
    fn test_hover_without_drag_emits_nothing() {
        let mut session = DragSession::new();

        assert_eq!(session.enter_task(QA, 1), None);
        assert_eq!(session.enter_column(DONE, 0), None);
        assert!(!session.is_active());
    }

    #[test]
    fn test_enter_own_column_emits_nothing() {
        let mut session = DragSession::new();
        session.start(QA, 2);

        assert_eq!(session.enter_column(QA, 3), None);
        assert_eq!(session.origin(), Some((QA, 2)));
    }

    #[test]
    fn test_enter_other_column_appends() {
        let mut session = DragSession::new();
        session.start(TODO, 0);

        let intent = session.enter_column(IN_PROGRESS, 1);

        assert_eq!(intent, Some(MoveIntent::new(TODO, IN_PROGRESS, 0, Some(1))));
        assert_eq!(session.origin(), Some((IN_PROGRESS, 1)));
    }

    #[test]
    fn test_end_clears_session() {
        let mut session = DragSession::new();
        session.start(QA, 0);

        session.end();

        assert_eq!(session, DragSession::default());
    }

    #[test]
    fn test_live_reorder_within_column() {
        let mut board = Board::default();
        let mut session = DragSession::new();

        let events = [
            DragEvent::Start {
                column_id: QA,
                position: 0,
            },
            DragEvent::EnterTask {
                column_id: QA,
                position: 1,
            },
            DragEvent::EnterTask {
                column_id: QA,
                position: 2,
            },
            DragEvent::End,
        ];
        for event in events {
            handle_drag_event(&mut board, &mut session, event);
        }

        assert_eq!(
            descriptions(&board, QA),
            vec!["Design prototype", "Write automation tests", "Resourcing"]
        );
        assert!(board.is_densely_indexed());
    }

    #[test]
    fn test_live_drag_across_columns() {
        let mut board = Board::default();
        let mut session = DragSession::new();

        handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::Start {
                column_id: TODO,
                position: 0,
            },
        );
        let entered = handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::EnterColumn {
                column_id: IN_PROGRESS,
            },
        );
        assert_eq!(entered, Some(Outcome::Applied));
        assert_eq!(
            descriptions(&board, IN_PROGRESS),
            vec!["Write requirements", "Gather stakeholder feedback"]
        );

        handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::EnterTask {
                column_id: IN_PROGRESS,
                position: 0,
            },
        );
        assert_eq!(
            descriptions(&board, IN_PROGRESS),
            vec!["Gather stakeholder feedback", "Write requirements"]
        );

        let same_column = handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::EnterColumn {
                column_id: IN_PROGRESS,
            },
        );
        assert_eq!(same_column, None);

        handle_drag_event(&mut board, &mut session, DragEvent::EnterColumn { column_id: DONE });
        handle_drag_event(&mut board, &mut session, DragEvent::End);

        assert!(descriptions(&board, TODO).is_empty());
        assert_eq!(descriptions(&board, IN_PROGRESS), vec!["Write requirements"]);
        assert_eq!(descriptions(&board, DONE), vec!["Gather stakeholder feedback"]);
        assert_eq!(board.total_tasks(), 5);
        assert!(board.is_densely_indexed());
    }

    #[test]
    fn test_drag_without_hover_commits_nothing() {
        let mut board = Board::default();
        let before = board.clone();
        let mut session = DragSession::new();

        let started = handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::Start {
                column_id: QA,
                position: 1,
            },
        );
        let ended = handle_drag_event(&mut board, &mut session, DragEvent::End);

        assert_eq!(started, None);
        assert_eq!(ended, None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_enter_unknown_column_is_ignored_by_board() {
        let mut board = Board::default();
        let before = board.clone();
        let mut session = DragSession::new();
        session.start(QA, 0);

        let outcome = handle_drag_event(&mut board, &mut session, DragEvent::EnterColumn { column_id: 42 });

        assert!(matches!(outcome, Some(Outcome::Ignored(_))));
        assert_eq!(board, before);
    }

    #[test]
    fn test_origin_follows_emitted_move_even_when_ignored() {
        let mut board = Board::default();
        let mut session = DragSession::new();
        session.start(QA, 0);

        handle_drag_event(&mut board, &mut session, DragEvent::EnterColumn { column_id: 42 });
        assert_eq!(session.origin(), Some((42, 0)));

        // The origin now names a column that does not exist, so every later
        // hover is ignored until a new drag starts.
        let before = board.clone();
        let outcome = handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::EnterTask {
                column_id: QA,
                position: 2,
            },
        );
        assert!(matches!(outcome, Some(Outcome::Ignored(_))));
        assert_eq!(board, before);

        handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::Start {
                column_id: QA,
                position: 0,
            },
        );
        let outcome = handle_drag_event(
            &mut board,
            &mut session,
            DragEvent::EnterTask {
                column_id: QA,
                position: 2,
            },
        );
        assert_eq!(outcome, Some(Outcome::Applied));
    }
}
