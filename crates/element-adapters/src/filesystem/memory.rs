//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use element_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ElementResult,
};

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Read a file as UTF-8 (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read_file(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.executables.contains(path))
            .unwrap_or(false)
    }

    /// All file paths, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ElementResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ElementResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> ElementResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn remove_dir_all(&self, path: &Path) -> ElementResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.directories.retain(|p| !p.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.executables.retain(|p| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), b"x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), b"x").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn remove_dir_all_drops_nested_entries() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a/b")).unwrap();
        fs.write_file(Path::new("/a/b/c.txt"), b"x").unwrap();
        fs.set_permissions(Path::new("/a/b/c.txt"), true).unwrap();

        fs.remove_dir_all(Path::new("/a")).unwrap();
        assert!(!fs.exists(Path::new("/a")));
        assert!(!fs.exists(Path::new("/a/b")));
        assert!(fs.list_files().is_empty());
        assert!(!fs.is_executable(Path::new("/a/b/c.txt")));
    }
}
