use crate::domain::id::EntityId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A work item belonging to exactly one column.
///
/// Tasks carry no order of their own: a task's position inside its column is
/// its relative position in the board's global task sequence, filtered down
/// to tasks sharing the same `column_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub column_id: EntityId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the given column.
    pub fn new(column_id: EntityId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: EntityId::generate(),
            column_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the task content.
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Reassigns the task to another column. Position within the global
    /// sequence is the caller's concern.
    pub fn assign_to(&mut self, column_id: EntityId) {
        self.column_id = column_id;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let column_id = EntityId::generate();
        let task = Task::new(column_id, "Task 1".to_string());

        assert_eq!(task.column_id, column_id);
        assert_eq!(task.content, "Task 1");
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_set_content_updates_updated_at() {
        let mut task = Task::new(EntityId::generate(), "Test".to_string());
        let initial_updated_at = task.updated_at;

        std::thread::sleep(std::time::Duration::from_millis(10));
        task.set_content("Edited".to_string());

        assert_eq!(task.content, "Edited");
        assert!(task.updated_at > initial_updated_at);
    }

    #[test]
    fn test_assign_to_changes_column_only() {
        let mut task = Task::new(EntityId::generate(), "Test".to_string());
        let id = task.id;
        let target = EntityId::generate();

        task.assign_to(target);

        assert_eq!(task.column_id, target);
        assert_eq!(task.id, id);
    }

    #[test]
    fn test_task_serialization_round_trip() {
        let task = Task::new(EntityId::generate(), "Task 1".to_string());
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(task, back);
    }
}
