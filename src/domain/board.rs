use crate::domain::id::EntityId;
use crate::domain::task::Task;
use crate::error::{Result, TavlaError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named, ordered grouping of tasks on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: EntityId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Column {
    pub fn new(title: String) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::generate(),
            title,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the column title.
    pub fn set_title(&mut self, title: String) {
        self.title = title;
        self.updated_at = Utc::now();
    }
}

/// Kanban board state.
///
/// Two ordered collections: `columns` is the sole source of truth for column
/// display order, and `tasks` is a single global sequence whose order,
/// filtered by `column_id`, yields each column's visible task order.
///
/// Every operation is a silent no-op when given an id the board does not
/// hold. Drag gestures routinely race UI teardown (a column deleted
/// mid-drag, a stale over-event after a removal), so missing ids are an
/// expected condition, not an error: the board keeps its last valid state
/// and never partially applies a mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub columns: Vec<Column>,
    pub tasks: Vec<Task>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- column operations ----

    /// Appends a new column titled `Column N`, N = current count + 1.
    /// Returns the new column's id.
    pub fn add_column(&mut self) -> EntityId {
        let column = Column::new(format!("Column {}", self.columns.len() + 1));
        let id = column.id;
        self.columns.push(column);
        id
    }

    /// Removes a column and cascades to every task it holds.
    pub fn remove_column(&mut self, id: EntityId) {
        self.columns.retain(|column| column.id != id);
        self.tasks.retain(|task| task.column_id != id);
    }

    /// Replaces a column's title.
    pub fn rename_column(&mut self, id: EntityId, title: impl Into<String>) {
        if let Some(column) = self.columns.iter_mut().find(|c| c.id == id) {
            column.set_title(title.into());
        }
    }

    /// Relocates the column `from` to the position currently occupied by the
    /// column `to`; intervening columns shift one slot toward the vacated
    /// position.
    pub fn move_column(&mut self, from: EntityId, to: EntityId) {
        if from == to {
            return;
        }
        let Some(from_idx) = self.columns.iter().position(|c| c.id == from) else {
            return;
        };
        let Some(to_idx) = self.columns.iter().position(|c| c.id == to) else {
            return;
        };
        let column = self.columns.remove(from_idx);
        self.columns.insert(to_idx, column);
    }

    // ---- task operations ----

    /// Appends a new task with content `Task N`, N = current total task
    /// count + 1, to the given column. Returns `None` without touching the
    /// board if the column does not exist.
    pub fn add_task(&mut self, column_id: EntityId) -> Option<EntityId> {
        if !self.contains_column(column_id) {
            return None;
        }
        let task = Task::new(column_id, format!("Task {}", self.tasks.len() + 1));
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// Removes a task.
    pub fn remove_task(&mut self, id: EntityId) {
        self.tasks.retain(|task| task.id != id);
    }

    /// Replaces a task's content.
    pub fn update_task_content(&mut self, id: EntityId, content: impl Into<String>) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.set_content(content.into());
        }
    }

    /// Moves the `active` task into the `over` task's column and into the
    /// slot `over` occupies, pushing `over` and everything after it one slot
    /// toward the tail of the sequence.
    pub fn move_task_over_task(&mut self, active: EntityId, over: EntityId) {
        if active == over {
            return;
        }
        let Some(active_idx) = self.tasks.iter().position(|t| t.id == active) else {
            return;
        };
        let Some(over_idx) = self.tasks.iter().position(|t| t.id == over) else {
            return;
        };

        let column_id = self.tasks[over_idx].column_id;
        let mut task = self.tasks.remove(active_idx);
        if task.column_id != column_id {
            task.assign_to(column_id);
        }
        // over's slot after the removal above
        let dest = if active_idx < over_idx {
            over_idx - 1
        } else {
            over_idx
        };
        self.tasks.insert(dest, task);
    }

    /// Reassigns the `active` task to `column_id`, leaving its position in
    /// the global sequence untouched. Models dropping a task onto a column
    /// body (empty area) rather than onto a specific task.
    pub fn move_task_over_column(&mut self, active: EntityId, column_id: EntityId) {
        if !self.contains_column(column_id) {
            return;
        }
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == active) {
            if task.column_id != column_id {
                task.assign_to(column_id);
            }
        }
    }

    // ---- read API ----

    /// Looks up a column by id.
    pub fn column(&self, id: EntityId) -> Result<&Column> {
        self.columns
            .iter()
            .find(|c| c.id == id)
            .ok_or(TavlaError::NotFound(id))
    }

    /// Looks up a task by id.
    pub fn task(&self, id: EntityId) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(TavlaError::NotFound(id))
    }

    pub fn contains_column(&self, id: EntityId) -> bool {
        self.columns.iter().any(|c| c.id == id)
    }

    /// Tasks of one column, in visible order.
    pub fn tasks_in(&self, column_id: EntityId) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    /// Column ids in display order.
    pub fn column_ids(&self) -> Vec<EntityId> {
        self.columns.iter().map(|c| c.id).collect()
    }
}
