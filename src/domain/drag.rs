use crate::domain::board::{Board, Column};
use crate::domain::id::EntityId;
use crate::domain::task::Task;
use crate::error::{Result, TavlaError};
use serde::{Deserialize, Serialize};

/// The entity picked up at the start of a drag gesture, as reported by the
/// presentation layer. Carries the full entity so the board never has to be
/// consulted to render a drag overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DragEntity {
    Column(Column),
    Task(Task),
}

/// Kind of the entity currently under the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverKind {
    Column,
    Task,
}

/// Current phase of the drag gesture.
///
/// The dragging variants hold an immutable snapshot of the entity as it was
/// when picked up; the snapshot exists for overlay rendering and is never
/// written back to the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn(Column),
    DraggingTask(Task),
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Owns the board and interprets the pointer-drag event stream against it.
///
/// Events arrive strictly ordered from a single presentation layer:
/// `on_drag_start`, zero or more `on_drag_over`, then exactly one of
/// `on_drag_end` / `on_drag_cancel`. The controller is the board's only
/// writer, so every mutation completes before the next event is seen.
///
/// Commit timing is deliberately asymmetric. Task moves are applied on every
/// over-event so that the order on screen during the gesture is the true
/// order (a task can cross column boundaries mid-drag, and the preview must
/// track its live target column). Column moves are applied once, at
/// drag-end, against stable indices. A cancelled gesture therefore discards
/// a pending column move but does not roll back task moves already applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardController {
    board: Board,
    drag: DragState,
}

impl BoardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            drag: DragState::Idle,
        }
    }

    // ---- drag events ----

    /// Begins a gesture, snapshotting the picked-up entity. A start that
    /// arrives while another drag is live implicitly cancels the old gesture
    /// first; the event source is single-pointer, so an un-terminated drag
    /// means its end event was lost, not that two drags overlap.
    pub fn on_drag_start(&mut self, entity: DragEntity) {
        self.drag = match entity {
            DragEntity::Column(column) => DragState::DraggingColumn(column),
            DragEntity::Task(task) => DragState::DraggingTask(task),
        };
    }

    /// Handles the pointer passing over another entity mid-gesture.
    ///
    /// Only task drags mutate here; a dragged column waits for drag-end.
    /// Returns `InvalidTransition` for a stray event while idle so the
    /// caller can log it; the board is untouched either way.
    pub fn on_drag_over(
        &mut self,
        active: EntityId,
        over: EntityId,
        over_kind: OverKind,
    ) -> Result<()> {
        match self.drag {
            DragState::Idle => {
                return Err(TavlaError::InvalidTransition("drag-over while idle"))
            }
            DragState::DraggingColumn(_) => return Ok(()),
            DragState::DraggingTask(_) => {}
        }
        if active == over {
            return Ok(());
        }
        match over_kind {
            OverKind::Task => self.board.move_task_over_task(active, over),
            OverKind::Column => self.board.move_task_over_column(active, over),
        }
        Ok(())
    }

    /// Ends the gesture. A column drag commits its reorder here; a task drag
    /// has already committed incrementally and only clears the snapshot.
    /// `over` is `None` when the pointer was released outside any target.
    pub fn on_drag_end(&mut self, active: EntityId, over: Option<EntityId>) -> Result<()> {
        let state = std::mem::take(&mut self.drag);
        match state {
            DragState::Idle => Err(TavlaError::InvalidTransition("drag-end while idle")),
            DragState::DraggingColumn(_) => {
                if let Some(over) = over {
                    if over != active {
                        self.board.move_column(active, over);
                    }
                }
                Ok(())
            }
            DragState::DraggingTask(_) => Ok(()),
        }
    }

    /// Aborts the gesture, clearing the snapshot. Idempotent.
    pub fn on_drag_cancel(&mut self) {
        self.drag = DragState::Idle;
    }

    // ---- user intents, forwarded to the board ----

    pub fn add_column(&mut self) -> EntityId {
        self.board.add_column()
    }

    pub fn remove_column(&mut self, id: EntityId) {
        self.board.remove_column(id);
    }

    pub fn rename_column(&mut self, id: EntityId, title: impl Into<String>) {
        self.board.rename_column(id, title);
    }

    pub fn add_task(&mut self, column_id: EntityId) -> Option<EntityId> {
        self.board.add_task(column_id)
    }

    pub fn remove_task(&mut self, id: EntityId) {
        self.board.remove_task(id);
    }

    pub fn update_task_content(&mut self, id: EntityId, content: impl Into<String>) {
        self.board.update_task_content(id, content);
    }

    // ---- snapshots for the presentation layer ----

    /// Current board snapshot.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current drag phase.
    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Snapshot of the dragged column, when a column drag is live.
    pub fn active_column(&self) -> Option<&Column> {
        match &self.drag {
            DragState::DraggingColumn(column) => Some(column),
            _ => None,
        }
    }

    /// Snapshot of the dragged task, when a task drag is live.
    pub fn active_task(&self) -> Option<&Task> {
        match &self.drag {
            DragState::DraggingTask(task) => Some(task),
            _ => None,
        }
    }
}
