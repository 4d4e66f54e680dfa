use crate::selection::SelectionState;
use taskboard_domain::Task;

/// One ordered column of tasks plus its selection cursor.
///
/// The board only relies on this list/insert/remove/select contract; the
/// scrolling presentation on top of it lives in the rendering layer.
#[derive(Default)]
pub struct TaskColumn {
    tasks: Vec<Task>,
    selection: SelectionState,
}

impl TaskColumn {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the column contents wholesale, selecting the first task.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.selection.clear();
        self.selection.auto_select_first_if_empty(!self.tasks.is_empty());
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn selected(&self) -> Option<&Task> {
        self.selection.get().and_then(|idx| self.tasks.get(idx))
    }

    pub fn select_next(&mut self) {
        self.selection.next(self.tasks.len());
    }

    pub fn select_prev(&mut self) {
        self.selection.prev(self.tasks.len());
    }

    pub fn select_last(&mut self) {
        self.selection.jump_to_last(self.tasks.len());
    }

    /// Append a task at the end, selecting it only if nothing was selected.
    pub fn push(&mut self, task: Task) {
        self.tasks.push(task);
        self.selection.auto_select_first_if_empty(true);
    }

    /// Remove and return the selected task, keeping the selection on a
    /// valid neighbour.
    pub fn remove_selected(&mut self) -> Option<Task> {
        let idx = self.selection.get()?;
        if idx >= self.tasks.len() {
            return None;
        }
        let task = self.tasks.remove(idx);
        if self.tasks.is_empty() {
            self.selection.clear();
        } else {
            self.selection.set(Some(idx.min(self.tasks.len() - 1)));
        }
        Some(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::Status;

    fn task(id: i64, title: &str) -> Task {
        Task::new(id, Status::Todo, title.to_string(), String::new())
    }

    #[test]
    fn test_set_tasks_selects_first() {
        let mut column = TaskColumn::new();
        column.set_tasks(vec![task(1, "a"), task(2, "b")]);
        assert_eq!(column.selected().map(|t| t.id), Some(1));
    }

    #[test]
    fn test_set_tasks_empty_clears_selection() {
        let mut column = TaskColumn::new();
        column.set_tasks(vec![task(1, "a")]);
        column.set_tasks(Vec::new());
        assert!(column.selected().is_none());
    }

    #[test]
    fn test_remove_selected_moves_selection_to_neighbour() {
        let mut column = TaskColumn::new();
        column.set_tasks(vec![task(1, "a"), task(2, "b"), task(3, "c")]);
        column.select_next();
        column.select_next();

        let removed = column.remove_selected().unwrap();
        assert_eq!(removed.id, 3);
        assert_eq!(column.selected().map(|t| t.id), Some(2));
    }

    #[test]
    fn test_remove_last_clears_selection() {
        let mut column = TaskColumn::new();
        column.set_tasks(vec![task(1, "a")]);
        assert!(column.remove_selected().is_some());
        assert!(column.selected().is_none());
        assert!(column.remove_selected().is_none());
    }

    #[test]
    fn test_push_keeps_existing_selection() {
        let mut column = TaskColumn::new();
        column.set_tasks(vec![task(1, "a")]);
        column.push(task(2, "b"));
        assert_eq!(column.selected().map(|t| t.id), Some(1));
        assert_eq!(column.len(), 2);
    }

    #[test]
    fn test_select_prev_on_empty_column_stays_unselected() {
        let mut column = TaskColumn::new();
        column.select_prev();
        assert!(column.selected().is_none());
    }

    #[test]
    fn test_push_selects_when_empty() {
        let mut column = TaskColumn::new();
        column.push(task(1, "a"));
        assert_eq!(column.selected().map(|t| t.id), Some(1));
    }
}
