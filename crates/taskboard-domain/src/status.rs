use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow state of a task, doubling as the board column index.
///
/// The order is fixed and cyclic: advancing past `Done` wraps to `Todo`,
/// retreating past `Todo` wraps to `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in board order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub const COUNT: usize = Self::ALL.len();

    pub fn next(self) -> Self {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Status::Todo => Status::Done,
            Status::InProgress => Status::Todo,
            Status::Done => Status::InProgress,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Status::Todo => 0,
            Status::InProgress => 1,
            Status::Done => 2,
        }
    }

    /// Integer code stored in the `status` column.
    pub fn as_i64(self) -> i64 {
        self.index() as i64
    }

    pub fn from_i64(value: i64) -> Option<Self> {
        match value {
            0 => Some(Status::Todo),
            1 => Some(Status::InProgress),
            2 => Some(Status::Done),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_cycles_through_all_statuses() {
        let mut status = Status::Todo;
        let mut seen = Vec::new();
        for _ in 0..Status::COUNT {
            seen.push(status);
            status = status.next();
        }
        assert_eq!(seen, Status::ALL);
        assert_eq!(status, Status::Todo);
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for status in Status::ALL {
            assert_eq!(status.next().prev(), status);
            assert_eq!(status.prev().next(), status);
        }
    }

    #[test]
    fn test_wrap_around() {
        assert_eq!(Status::Done.next(), Status::Todo);
        assert_eq!(Status::Todo.prev(), Status::Done);
    }

    #[test]
    fn test_integer_codec() {
        for status in Status::ALL {
            assert_eq!(Status::from_i64(status.as_i64()), Some(status));
        }
        assert_eq!(Status::from_i64(3), None);
        assert_eq!(Status::from_i64(-1), None);
    }

    #[test]
    fn test_index_matches_board_order() {
        for (i, status) in Status::ALL.iter().enumerate() {
            assert_eq!(status.index(), i);
        }
    }
}
