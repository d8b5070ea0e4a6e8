pub mod enums;
pub mod task;

pub use enums::{EditorField, UiMode};
pub use task::{checkbox_glyph, Task, TaskDraft};
