//! Application layer for Element.
//!
//! This layer contains:
//! - **Services**: the dispatcher and the use cases behind each command
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules live in `crate::domain`; this layer only coordinates.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    AuthService, DispatchSettings, Dispatcher, ElementApp, Outcome, PublishService,
    ScaffoldService,
};

pub use ports::{
    BlockActions, BlockWorkspace, BoilerplateSource, CredentialStore, Filesystem, Prompter,
    RegistryClient,
};

pub use error::ApplicationError;
