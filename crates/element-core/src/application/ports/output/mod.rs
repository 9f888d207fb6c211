//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `element-adapters` crate provides implementations; the CLI provides
//! the terminal [`Prompter`].

use std::path::{Path, PathBuf};

use crate::domain::{
    BlockBundle, BlockName, Category, Credentials, Prompt, PublishedBlock, ProjectStructure,
    Session, TogglePublic,
};
use crate::error::ElementResult;

/// Port for interactive input.
///
/// Returns the answer text; for `PromptKind::Choice` the selected choice.
/// A user abort maps to `ApplicationError::Cancelled`.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    fn ask(&self, prompt: &Prompt) -> ElementResult<String>;
}

/// Port for the remote block registry.
///
/// Implemented by:
/// - `element_adapters::registry::HttpRegistryClient` (production)
#[cfg_attr(test, mockall::automock)]
pub trait RegistryClient: Send + Sync {
    /// Exchange credentials for a session token.
    fn login(&self, credentials: &Credentials) -> ElementResult<Session>;

    /// List the categories a block can be filed under.
    fn categories(&self) -> ElementResult<Vec<Category>>;

    /// Create a new registry entry.
    fn publish(
        &self,
        session: &Session,
        name: &str,
        category: &Category,
        bundle: &BlockBundle,
    ) -> ElementResult<PublishedBlock>;

    /// Replace the content of an existing entry.
    fn update(
        &self,
        session: &Session,
        block: &PublishedBlock,
        bundle: &BlockBundle,
        toggle_public: TogglePublic,
    ) -> ElementResult<PublishedBlock>;
}

/// Port for the persisted login session.
///
/// Implemented by:
/// - `element_adapters::credentials::FileCredentialStore` (production)
/// - `element_adapters::credentials::MemoryCredentialStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait CredentialStore: Send + Sync {
    /// `Ok(None)` when nobody has logged in yet.
    fn load(&self) -> ElementResult<Option<Session>>;

    fn save(&self, session: &Session) -> ElementResult<()>;
}

/// Port for starter project content.
///
/// Implemented by:
/// - `element_adapters::boilerplate::BuiltinBoilerplate` (embedded)
/// - `element_adapters::boilerplate::GitBoilerplate` (cloned repository)
#[cfg_attr(test, mockall::automock)]
pub trait BoilerplateSource: Send + Sync {
    /// Produce the files of a new block rooted at `root`.
    fn render(&self, name: &BlockName, root: &Path) -> ElementResult<ProjectStructure>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `element_adapters::filesystem::LocalFilesystem` (production)
/// - `element_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ElementResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &[u8]) -> ElementResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> ElementResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ElementResult<()>;
}

/// Port for the on-disk block being published.
///
/// Implemented by:
/// - `element_adapters::workspace::LocalBlockWorkspace`
#[cfg_attr(test, mockall::automock)]
pub trait BlockWorkspace: Send + Sync {
    /// Directory that holds the block.
    fn root(&self) -> PathBuf;

    /// Package the block's build output and thumbnail.
    fn bundle(&self) -> ElementResult<BlockBundle>;

    /// The record written by the last publish, if any.
    fn read_record(&self) -> ElementResult<Option<PublishedBlock>>;

    fn write_record(&self, block: &PublishedBlock) -> ElementResult<()>;
}
