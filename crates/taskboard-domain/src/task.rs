use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Store-assigned row identifier.
pub type TaskId = i64;

/// A unit of work on the board.
///
/// Tasks are only constructed once the store has assigned an id; the create
/// form holds raw field values until the insert returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub status: Status,
    pub title: String,
    pub description: String,
}

impl Task {
    pub fn new(id: TaskId, status: Status, title: String, description: String) -> Self {
        Self {
            id,
            status,
            title,
            description,
        }
    }

    /// Move the task one status forward, wrapping from Done to Todo.
    pub fn advance(&mut self) {
        self.status = self.status.next();
    }

    /// Move the task one status back, wrapping from Todo to Done.
    pub fn retreat(&mut self) {
        self.status = self.status.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_done_to_todo() {
        let mut task = Task::new(1, Status::Done, "ship".into(), "".into());
        task.advance();
        assert_eq!(task.status, Status::Todo);
    }

    #[test]
    fn test_retreat_wraps_todo_to_done() {
        let mut task = Task::new(1, Status::Todo, "ship".into(), "".into());
        task.retreat();
        assert_eq!(task.status, Status::Done);
    }

    #[test]
    fn test_advance_then_retreat_is_identity() {
        let mut task = Task::new(7, Status::InProgress, "draft".into(), "v1".into());
        task.advance();
        task.retreat();
        assert_eq!(task.status, Status::InProgress);
    }
}
