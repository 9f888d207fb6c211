use std::collections::HashSet;
use std::path::PathBuf;

use crate::domain::{error::DomainError, value_objects::BlockName};

/// Final boilerplate structure ready for materialization.
///
/// This is the output of a boilerplate source. It contains no business
/// logic, only data: a root and entries relative to it.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    pub root: PathBuf,
    pub(crate) entries: Vec<FsEntry>,
}

impl ProjectStructure {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: Vec<u8>, perms: Permissions) {
        self.entries.push(FsEntry::File(FileToWrite {
            path: path.into(),
            content,
            permissions: perms,
        }));
    }

    pub fn add_directory(&mut self, path: impl Into<PathBuf>) {
        self.entries.push(FsEntry::Directory(DirectoryToCreate { path: path.into() }));
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.add_file(path, content.into(), Permissions::default());
        self
    }

    pub fn with_directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.add_directory(path);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entries.is_empty() {
            return Err(DomainError::InvalidStructure(
                "boilerplate produced no files".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let path = entry.path();

            let path_str = path.display().to_string();
            if !seen.insert(path_str.clone()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }

            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
        }

        Ok(())
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &FileToWrite> {
        self.entries.iter().filter_map(|e| match e {
            FsEntry::File(f) => Some(f),
            _ => None,
        })
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone)]
pub enum FsEntry {
    File(FileToWrite),
    Directory(DirectoryToCreate),
}

impl FsEntry {
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::File(f) => &f.path,
            Self::Directory(d) => &d.path,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FileToWrite {
    pub path: PathBuf,
    pub content: Vec<u8>,
    pub permissions: Permissions,
}

#[derive(Debug, Clone)]
pub struct DirectoryToCreate {
    pub path: PathBuf,
}

/// File permissions that survive materialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

/// Placeholder substitution for boilerplate content.
///
/// | Variable | Example |
/// |----------|---------|
/// | `BLOCK_NAME` | `Hero_Banner` |
/// | `BLOCK_NAME_KEBAB` | `hero-banner` |
/// | `BLOCK_NAME_SNAKE` | `hero_banner` |
/// | `BLOCK_NAME_PASCAL` | `HeroBanner` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    variables: Vec<(&'static str, String)>,
}

impl RenderContext {
    pub fn new(name: &BlockName) -> Self {
        Self {
            variables: vec![
                ("BLOCK_NAME_PASCAL", name.pascal()),
                ("BLOCK_NAME_KEBAB", name.kebab()),
                ("BLOCK_NAME_SNAKE", name.snake()),
                ("BLOCK_NAME", name.as_str().to_owned()),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every `{{KEY}}` (with optional inner spaces) by its value.
    pub fn render(&self, input: &str) -> String {
        let mut out = input.to_owned();
        for (key, value) in &self.variables {
            out = out
                .replace(&format!("{{{{{key}}}}}"), value)
                .replace(&format!("{{{{ {key} }}}}"), value);
        }
        out
    }
}
