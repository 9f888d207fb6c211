//! Scaffold Service - creates a new block directory from the boilerplate.
//!
//! Workflow:
//! 1. Validate the block name
//! 2. Refuse to touch an existing directory
//! 3. Render the boilerplate for the name
//! 4. Write everything, rolling back on failure

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{BoilerplateSource, Filesystem},
    },
    domain::{DomainValidator as validator, FsEntry, ProjectStructure},
    error::ElementResult,
};

/// Materializes block boilerplate below a parent directory.
pub struct ScaffoldService {
    source: Box<dyn BoilerplateSource>,
    filesystem: Box<dyn Filesystem>,
    parent_dir: PathBuf,
}

impl ScaffoldService {
    /// `parent_dir` is where `<name>/` gets created, normally the working directory.
    pub fn new(
        source: Box<dyn BoilerplateSource>,
        filesystem: Box<dyn Filesystem>,
        parent_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source,
            filesystem,
            parent_dir: parent_dir.into(),
        }
    }

    /// Create `<parent_dir>/<name>` and return its path.
    #[instrument(skip_all, fields(name = %name.as_ref()))]
    pub fn create(&self, name: impl AsRef<str>) -> ElementResult<PathBuf> {
        let name = validator::validate_block_name(name.as_ref())?;
        let root = self.parent_dir.join(name.as_str());

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::BlockExists { path: root }.into());
        }

        let structure = self.source.render(&name, &root)?;
        validator::validate_project_structure(&structure)?;
        info!(entries = structure.entry_count(), "Boilerplate rendered");

        self.write_structure(&structure)?;

        info!(path = %root.display(), "Block created");
        Ok(root)
    }

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> ElementResult<()> {
        match self.write_all(structure) {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&structure.root);
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> ElementResult<()> {
        self.filesystem.create_dir_all(&structure.root)?;

        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem
                        .create_dir_all(&structure.root.join(&dir.path))?;
                }
                FsEntry::File(file) => {
                    let path = structure.root.join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    self.filesystem.write_file(&path, &file.content)?;

                    if file.permissions.executable_flag() {
                        self.filesystem.set_permissions(&path, true)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}
