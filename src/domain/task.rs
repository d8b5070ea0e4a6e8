use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item. The persisted blob is a JSON array of these,
/// with exactly the field names below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique ID, assigned at creation, immutable
    pub id: Uuid,
    /// Task title, may be empty
    pub title: String,
    /// Optional longer description
    pub description: String,
    /// Optional free-text category
    pub category: String,
    /// Whether the task has been completed
    pub completed: bool,
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            category: draft.category,
            completed: false,
        }
    }

    /// Replace the user-editable fields; id and completed are untouched.
    pub fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.category = draft.category;
    }

    /// Flip the completed flag
    pub fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }
}

/// Transient form state for the editor modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl TaskDraft {
    /// Pre-fill a draft from an existing task (for edit mode)
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            category: task.category.clone(),
        }
    }
}

/// Checkbox glyph for list rows
pub fn checkbox_glyph(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new(TaskDraft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
            category: "errand".to_string(),
        });
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "2%");
        assert_eq!(task.category, "errand");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_new_accepts_empty_fields() {
        let task = Task::new(TaskDraft::default());
        assert_eq!(task.title, "");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new(TaskDraft::default());
        let b = Task::new(TaskDraft::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_task_apply_keeps_id_and_completed() {
        let mut task = Task::new(TaskDraft {
            title: "Buy milk".to_string(),
            description: String::new(),
            category: String::new(),
        });
        let id = task.id;
        task.toggle_complete();

        task.apply(TaskDraft {
            title: "Buy oat milk".to_string(),
            description: "oat".to_string(),
            category: "errand".to_string(),
        });

        assert_eq!(task.id, id);
        assert_eq!(task.title, "Buy oat milk");
        assert_eq!(task.description, "oat");
        assert!(task.completed);
    }

    #[test]
    fn test_toggle_complete_twice_restores() {
        let mut task = Task::new(TaskDraft::default());
        task.toggle_complete();
        assert!(task.completed);
        task.toggle_complete();
        assert!(!task.completed);
    }

    #[test]
    fn test_draft_from_task() {
        let task = Task::new(TaskDraft {
            title: "Write report".to_string(),
            description: "quarterly".to_string(),
            category: "work".to_string(),
        });
        let draft = TaskDraft::from_task(&task);
        assert_eq!(draft.title, "Write report");
        assert_eq!(draft.description, "quarterly");
        assert_eq!(draft.category, "work");
    }

    #[test]
    fn test_checkbox_glyph() {
        assert_eq!(checkbox_glyph(false), "[ ]");
        assert_eq!(checkbox_glyph(true), "[x]");
    }
}
