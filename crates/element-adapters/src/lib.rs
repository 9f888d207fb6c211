//! Infrastructure adapters for Element.
//!
//! This crate implements the driven ports defined in
//! `element_core::application::ports`. All network, filesystem and process
//! I/O lives here.

pub mod boilerplate;
pub mod credentials;
pub mod filesystem;
pub mod registry;
pub mod workspace;

// Re-export commonly used adapters
pub use boilerplate::{BuiltinBoilerplate, GitBoilerplate};
pub use credentials::{FileCredentialStore, MemoryCredentialStore};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use registry::HttpRegistryClient;
pub use workspace::LocalBlockWorkspace;
