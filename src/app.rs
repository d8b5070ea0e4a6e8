use crate::domain::{EditorField, Task, TaskDraft, UiMode};
use crate::persistence::save_tasks;
use anyhow::Result;
use std::path::PathBuf;
use uuid::Uuid;

/// Editor modal state: a draft plus an optional id of the task being edited.
/// `editing_task_id` unset means create mode; set means edit mode.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub draft: TaskDraft,
    pub editing_task_id: Option<Uuid>,
    pub field: EditorField,
}

/// Main application state. Owns the task list; the persisted blob is a pure
/// mirror written after every mutation.
pub struct AppState {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub editor: Option<EditorState>,
    /// Set by every mutation, cleared only by a successful save. A failed
    /// write leaves this set so the next loop pass retries.
    pub dirty: bool,
    pub tasks_path: PathBuf,
}

impl AppState {
    pub fn new(tasks: Vec<Task>, tasks_path: PathBuf) -> Self {
        Self {
            tasks,
            selected_index: 0,
            ui_mode: UiMode::Normal,
            editor: None,
            dirty: false,
            tasks_path,
        }
    }

    // --- Task Store operations ---

    /// Append a new task built from the draft; always succeeds
    pub fn add_task(&mut self, draft: TaskDraft) {
        self.tasks.push(Task::new(draft));
        self.dirty = true;
    }

    /// Replace the mutable fields of the matching task; silent no-op if absent
    pub fn update_task(&mut self, id: Uuid, draft: TaskDraft) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.apply(draft);
            self.dirty = true;
        }
    }

    /// Remove all tasks with the matching id; no-op if absent
    pub fn delete_task(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.clamp_selection();
            self.dirty = true;
        }
    }

    /// Flip `completed` on the matching task; no-op if absent
    pub fn toggle_complete(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.toggle_complete();
            self.dirty = true;
        }
    }

    // --- Selection ---

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len() - 1;
        }
    }

    /// Toggle completion of the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.toggle_complete(id);
        }
    }

    /// Delete the selected task
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.delete_task(id);
        }
    }

    // --- Editor modal ---

    /// Open the editor in create mode (blank draft, no editing id)
    pub fn open_editor_create(&mut self) {
        self.editor = Some(EditorState {
            draft: TaskDraft::default(),
            editing_task_id: None,
            field: EditorField::Title,
        });
        self.ui_mode = UiMode::Editing;
    }

    /// Open the editor in edit mode, pre-filled from the selected task.
    /// No-op when the list is empty.
    pub fn open_editor_edit(&mut self) {
        if let Some(task) = self.selected_task() {
            self.editor = Some(EditorState {
                draft: TaskDraft::from_task(task),
                editing_task_id: Some(task.id),
                field: EditorField::Title,
            });
            self.ui_mode = UiMode::Editing;
        }
    }

    /// Submit the editor: update when an editing id is set, create otherwise.
    /// Either path closes the modal and clears the draft. Empty submissions
    /// are accepted.
    pub fn submit_editor(&mut self) {
        if let Some(editor) = self.editor.take() {
            match editor.editing_task_id {
                Some(id) => self.update_task(id, editor.draft),
                None => self.add_task(editor.draft),
            }
            self.ui_mode = UiMode::Normal;
        }
    }

    /// Cancel the editor, discarding the draft without mutating the store
    pub fn cancel_editor(&mut self) {
        self.editor = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Cycle focus to the next editor field
    pub fn editor_next_field(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.field = editor.field.next();
        }
    }

    /// Append a character to the focused editor field
    pub fn editor_add_char(&mut self, c: char) {
        if let Some(editor) = &mut self.editor {
            match editor.field {
                EditorField::Title => editor.draft.title.push(c),
                EditorField::Description => editor.draft.description.push(c),
                EditorField::Category => editor.draft.category.push(c),
            }
        }
    }

    /// Backspace in the focused editor field
    pub fn editor_backspace(&mut self) {
        if let Some(editor) = &mut self.editor {
            match editor.field {
                EditorField::Title => {
                    editor.draft.title.pop();
                }
                EditorField::Description => {
                    editor.draft.description.pop();
                }
                EditorField::Category => {
                    editor.draft.category.pop();
                }
            }
        }
    }

    // --- Persistence ---

    /// Write the full task list to the blob. `dirty` is cleared only when the
    /// write succeeds.
    pub fn save(&mut self) -> Result<()> {
        save_tasks(&self.tasks_path, &self.tasks)?;
        self.dirty = false;
        Ok(())
    }
}
