use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Get the jot directory - checks for a local .jot first, then falls back to global ~/.jot
pub fn get_jot_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_jot(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".jot"))
}

/// Find a local .jot directory by walking up the directory tree
fn find_local_jot(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let jot_dir = current.join(".jot");
        if jot_dir.exists() && jot_dir.is_dir() {
            return Some(jot_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the jot directory exists
pub fn ensure_jot_dir() -> Result<PathBuf> {
    let dir = get_jot_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .jot directory in the current directory
pub fn init_local_jot() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let jot_dir = current_dir.join(".jot");

    if jot_dir.exists() {
        anyhow::bail!("Jot directory already exists: {}", jot_dir.display());
    }

    fs::create_dir_all(&jot_dir)
        .with_context(|| format!("Failed to create directory: {}", jot_dir.display()))?;

    Ok(jot_dir)
}

/// Get path to the task blob (tasks.json)
pub fn tasks_file() -> Result<PathBuf> {
    Ok(ensure_jot_dir()?.join("tasks.json"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let dir = path
        .parent()
        .context("File path has no parent directory")?;

    // Create temp file in the same directory
    let mut temp_file = NamedTempFile::new_in(dir)
        .context("Failed to create temporary file")?;

    temp_file
        .write_all(content.as_bytes())
        .context("Failed to write to temporary file")?;

    temp_file
        .as_file()
        .sync_all()
        .context("Failed to sync temporary file")?;

    // Atomically rename temp file to target
    temp_file
        .persist(path)
        .with_context(|| format!("Failed to persist file: {}", path.display()))?;

    Ok(())
}
