pub mod files;
pub mod store;

pub use files::{atomic_write, ensure_jot_dir, get_jot_dir, init_local_jot, tasks_file};
pub use store::{load_or_default, load_tasks, save_tasks, StoreError};
