use taskboard_core::{InputState, TaskboardResult};
use taskboard_domain::{Status, Task};
use taskboard_persistence::TaskStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

/// Two-field create form for a new task.
///
/// The target status is fixed at construction to the column that was focused
/// when the form was opened. The form never holds a task id: the Task is only
/// built once the store insert has assigned one.
pub struct FormState {
    pub target: Status,
    pub title: InputState,
    pub description: InputState,
    pub active: FormField,
}

impl FormState {
    pub fn new(target: Status) -> Self {
        Self {
            target,
            title: InputState::new(),
            description: InputState::new(),
            active: FormField::Title,
        }
    }

    /// Hand input focus from the title to the description. Does not create
    /// anything yet.
    pub fn advance_field(&mut self) {
        self.active = FormField::Description;
    }

    pub fn active_input(&self) -> &InputState {
        match self.active {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
        }
    }

    pub fn active_input_mut(&mut self) -> &mut InputState {
        match self.active {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    /// Persist the form contents and return the completed task. On failure
    /// the fields are untouched so the user can retry or cancel.
    pub async fn submit(&self, store: &dyn TaskStore) -> TaskboardResult<Task> {
        let id = store
            .insert(self.target, self.title.as_str(), self.description.as_str())
            .await?;
        tracing::info!(id, title = self.title.as_str(), "created task");
        Ok(Task::new(
            id,
            self.target,
            self.title.as_str().to_string(),
            self.description.as_str().to_string(),
        ))
    }
}
