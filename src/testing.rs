//! In-memory fakes for unit tests.

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::entities::Manifest;
use crate::domain::ports::{FileSystem, FsError, FsResult, StyleCompiler};
use crate::error::{SassWatchError, SassWatchResult};

#[derive(Debug, Default)]
struct MemoryState {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    touches: HashMap<PathBuf, usize>,
    writes: Vec<PathBuf>,
    read_only: HashSet<PathBuf>,
}

/// File system backed by a map. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct MemoryFs {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, path: impl AsRef<Path>, content: &str) {
        let path = lexical(path.as_ref());
        let mut state = self.state.lock().unwrap();
        let mut parent = path.parent();
        while let Some(dir) = parent {
            state.dirs.insert(dir.to_path_buf());
            parent = dir.parent();
        }
        state.files.insert(path, content.as_bytes().to_vec());
    }

    pub fn mkdir(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().dirs.insert(lexical(path.as_ref()));
    }

    pub fn delete(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().files.remove(&lexical(path.as_ref()));
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(&lexical(path.as_ref()))
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn touch_count(&self, path: impl AsRef<Path>) -> usize {
        self.state
            .lock()
            .unwrap()
            .touches
            .get(&lexical(path.as_ref()))
            .copied()
            .unwrap_or(0)
    }

    /// Paths written, in order.
    pub fn writes(&self) -> Vec<PathBuf> {
        self.state.lock().unwrap().writes.clone()
    }

    /// Make writes to `path` fail with permission denied.
    pub fn deny_writes(&self, path: impl AsRef<Path>) {
        self.state.lock().unwrap().read_only.insert(lexical(path.as_ref()));
    }
}

fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

impl FileSystem for MemoryFs {
    fn is_file(&self, path: &Path) -> bool {
        self.state.lock().unwrap().files.contains_key(&lexical(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state.lock().unwrap().dirs.contains(&lexical(path))
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        self.get(path).ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &[u8]) -> FsResult<()> {
        let path = lexical(path);
        let mut state = self.state.lock().unwrap();
        if state.read_only.contains(&path) {
            return Err(FsError::PermissionDenied(path));
        }
        state.writes.push(path.clone());
        state.files.insert(path, content.to_vec());
        Ok(())
    }

    fn touch(&self, path: &Path) -> FsResult<()> {
        let path = lexical(path);
        let mut state = self.state.lock().unwrap();
        if state.read_only.contains(&path) {
            return Err(FsError::PermissionDenied(path));
        }
        state.files.entry(path.clone()).or_default();
        *state.touches.entry(path).or_default() += 1;
        Ok(())
    }

    fn normalize(&self, path: &Path) -> PathBuf {
        lexical(path)
    }
}

/// Compiler that concatenates the manifest's imports as read from the fake
/// file system at call time.
///
/// A source containing `!fail` makes the compile fail. Concurrent calls are
/// counted so tests can assert the pipeline never overlaps compiles.
#[derive(Debug)]
pub struct FakeCompiler {
    fs: MemoryFs,
    delay: Duration,
    calls: AtomicUsize,
    active: AtomicUsize,
    max_active: AtomicUsize,
}

impl FakeCompiler {
    pub fn new(fs: MemoryFs) -> Self {
        Self {
            fs,
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            active: AtomicUsize::new(0),
            max_active: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }
}

impl StyleCompiler for FakeCompiler {
    fn compile(&self, entry: &Path, include_paths: &[PathBuf]) -> SassWatchResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(now, Ordering::SeqCst);
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        let result = (|| -> SassWatchResult<String> {
            let manifest = self.fs.read(entry)?;
            let mut css = String::new();
            for import in Manifest::parse_imports(&manifest) {
                let source = include_paths
                    .iter()
                    .find_map(|dir| self.fs.get(import.to_path(dir)))
                    .ok_or_else(|| SassWatchError::Compile {
                        message: format!("can't find stylesheet to import: {}", import),
                    })?;
                if source.contains("!fail") {
                    return Err(SassWatchError::Compile {
                        message: format!("error in {}", import),
                    });
                }
                css.push_str(&format!("/* {} */\n{}\n", import, source));
            }
            Ok(css)
        })();

        self.active.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
