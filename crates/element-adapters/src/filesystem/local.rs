//! Local filesystem adapter using std::fs.

use std::path::Path;

use element_core::{application::ports::Filesystem, error::ElementResult};

use super::map_io_error;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ElementResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> ElementResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> ElementResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if executable {
                let metadata =
                    std::fs::metadata(path).map_err(|e| map_io_error(path, e, "get metadata"))?;
                let mut perms = metadata.permissions();
                perms.set_mode(perms.mode() | 0o111);
                std::fs::set_permissions(path, perms)
                    .map_err(|e| map_io_error(path, e, "set permissions"))?;
            }
        }
        #[cfg(not(unix))]
        {
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> ElementResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}
