//! Application ports (traits) for external dependencies.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Prompter`: interactive questions
//!   - `RegistryClient`: the remote block registry
//!   - `CredentialStore`: the persisted session
//!   - `BoilerplateSource`: starter project content
//!   - `Filesystem`: file operations
//!   - `BlockWorkspace`: bundling and the publish record of a block directory
//!
//! - **Driving (Input) Ports**: Called by the dispatcher, implemented by services
//!   - `BlockActions`

pub mod input;
pub mod output;

pub use input::BlockActions;
pub use output::{
    BlockWorkspace, BoilerplateSource, CredentialStore, Filesystem, Prompter, RegistryClient,
};

#[cfg(test)]
pub use input::MockBlockActions;
#[cfg(test)]
pub use output::{
    MockBlockWorkspace, MockBoilerplateSource, MockCredentialStore, MockFilesystem, MockPrompter,
    MockRegistryClient,
};
