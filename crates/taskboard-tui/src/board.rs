use crate::column::TaskColumn;
use taskboard_core::TaskboardResult;
use taskboard_domain::{Status, Task, TaskId};
use taskboard_persistence::TaskStore;

/// The board: one column per status plus the focus marker.
///
/// Mutating operations apply the in-memory change first and then persist it.
/// When the store call fails the view is deliberately left as mutated; the
/// caller reports the error and a later `load` reconciles from the store.
pub struct BoardState {
    pub focus: Status,
    columns: [TaskColumn; Status::COUNT],
    pub loaded: bool,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            focus: Status::Todo,
            columns: [TaskColumn::new(), TaskColumn::new(), TaskColumn::new()],
            loaded: false,
        }
    }

    pub fn column(&self, status: Status) -> &TaskColumn {
        &self.columns[status.index()]
    }

    fn column_mut(&mut self, status: Status) -> &mut TaskColumn {
        &mut self.columns[status.index()]
    }

    /// Rebuild every column from the store, one list call per status in
    /// status order. Also the re-seed entry point after divergence.
    pub async fn load(&mut self, store: &dyn TaskStore) -> TaskboardResult<()> {
        for status in Status::ALL {
            let tasks = store.list_by_status(status).await?;
            self.column_mut(status).set_tasks(tasks);
        }
        self.loaded = true;
        tracing::debug!("board loaded from store");
        Ok(())
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn select_next(&mut self) {
        let focus = self.focus;
        self.column_mut(focus).select_next();
    }

    pub fn select_prev(&mut self) {
        let focus = self.focus;
        self.column_mut(focus).select_prev();
    }

    /// Move the selected task one column forward (Done wraps to Todo) and
    /// persist the new status. No-op when nothing is selected.
    pub async fn move_selected(&mut self, store: &dyn TaskStore) -> TaskboardResult<Option<TaskId>> {
        let focus = self.focus;
        let Some(mut task) = self.column_mut(focus).remove_selected() else {
            return Ok(None);
        };
        task.advance();
        let id = task.id;
        let status = task.status;
        self.column_mut(status).push(task);
        tracing::debug!(id, %status, "moving task");

        store.update_status(id, status).await?;
        Ok(Some(id))
    }

    /// Remove the selected task from the board and the store. No-op when
    /// nothing is selected.
    pub async fn delete_selected(
        &mut self,
        store: &dyn TaskStore,
    ) -> TaskboardResult<Option<TaskId>> {
        let focus = self.focus;
        let Some(task) = self.column_mut(focus).remove_selected() else {
            return Ok(None);
        };
        tracing::debug!(id = task.id, "deleting task");

        store.delete(task.id).await?;
        Ok(Some(task.id))
    }

    /// Take ownership of a freshly persisted task, appending it to the
    /// column matching its status.
    pub fn accept_created(&mut self, task: Task) {
        let column = self.column_mut(task.status);
        column.push(task);
        column.select_last();
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}
