//! Atomic I/O operations with file locking

use std::fs::{self, OpenOptions};
use std::io::Write;

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Write content atomically to a file.
///
/// Writes to a temp file in the same directory (same filesystem), syncs, and
/// renames over the target. An exclusive advisory lock is held on the temp
/// file for the duration of the write.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native = path.to_native();

    if let Some(parent) = native.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .lock_exclusive()
        .map_err(|_| Error::LockFailed {
            path: native.clone(),
        })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .sync_all()
        .map_err(|e| Error::io(&temp_path, e))?;

    fs2::FileExt::unlock(&temp_file).map_err(|_| Error::LockFailed {
        path: native.clone(),
    })?;

    fs::rename(&temp_path, &native).map_err(|e| Error::io(&native, e))?;

    Ok(())
}

/// Read the whole file as text.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native = path.to_native();
    fs::read_to_string(&native).map_err(|e| Error::io(&native, e))
}

/// Write text atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Enumerate regular files with the given extension (no dot) in a directory.
///
/// Non-recursive. The order is whatever the filesystem yields; callers must
/// not rely on it.
pub fn list_files_with_extension(
    dir: &NormalizedPath,
    extension: &str,
) -> Result<Vec<NormalizedPath>> {
    let native = dir.to_native();
    let entries = fs::read_dir(&native).map_err(|e| Error::io(&native, e))?;

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == extension)
        {
            files.push(NormalizedPath::new(&path));
        }
    }
    Ok(files)
}
