//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};

const TEMP_PREFIX: &str = ".sasswatch-";
const TEMP_SUFFIX: &str = ".tmp";

/// Local file system implementation
///
/// Writes go through a temp file in the target directory followed by a
/// rename, so readers never observe a half-written manifest or stylesheet.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Permissions for the replacement file: keep the old file's, otherwise
/// the usual world-readable default rather than the temp file's 0600.
fn target_permissions(path: &Path) -> Option<fs::Permissions> {
    if let Ok(meta) = fs::metadata(path) {
        return Some(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}

impl FileSystem for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let parent = parent_dir(path);
        fs::create_dir_all(parent).map_err(|e| FsError::at(parent, e))?;

        let mut temp = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .suffix(TEMP_SUFFIX)
            .tempfile_in(parent)
            .map_err(|e| FsError::at(parent, e))?;
        temp.write_all(content).map_err(|e| FsError::at(path, e))?;
        temp.as_file().sync_all().map_err(|e| FsError::at(path, e))?;
        if let Some(permissions) = target_permissions(path) {
            temp.as_file()
                .set_permissions(permissions)
                .map_err(|e| FsError::at(path, e))?;
        }

        temp.persist(path).map_err(|e| FsError::at(path, e.error))?;
        Ok(())
    }

    fn touch(&self, path: &Path) -> FsResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| FsError::at(path, e))?;
        file.set_modified(SystemTime::now())
            .map_err(|e| FsError::at(path, e))
    }

    fn normalize(&self, path: &Path) -> PathBuf {
        if let Ok(canonical) = path.canonicalize() {
            return canonical;
        }

        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            match std::env::current_dir() {
                Ok(cwd) => cwd.join(path),
                Err(_) => return path.to_path_buf(),
            }
        };

        // Deleted files: resolve the deepest ancestor that still exists and
        // re-attach the missing tail.
        let mut tail = Vec::new();
        let mut cursor = absolute.as_path();
        loop {
            if let Ok(mut resolved) = cursor.canonicalize() {
                resolved.extend(tail.iter().rev());
                return resolved;
            }
            match (cursor.parent(), cursor.file_name()) {
                (Some(parent), Some(name)) => {
                    tail.push(name.to_os_string());
                    cursor = parent;
                }
                _ => return absolute,
            }
        }
    }
}
