//! Element Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Element
//! block CLI, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           element-cli (CLI)             │
//! │   argv → Invocation, prompts, output    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │              Dispatcher                 │
//! │  collects missing input, invokes one    │
//! │        BlockActions method              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (AuthService, PublishService,           │
//! │  ScaffoldService, ElementApp)           │
//! └──────────────────┬──────────────────────┘
//!                    │ driven ports
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    element-adapters (Infrastructure)    │
//! │ (HttpRegistryClient, FileCredentialStore│
//! │  BuiltinBoilerplate, LocalFilesystem)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use element_core::application::{DispatchSettings, Dispatcher};
//! use element_core::domain::Invocation;
//!
//! // `actions` implements `BlockActions`, `prompter` implements `Prompter`.
//! let dispatcher = Dispatcher::new(&actions, &prompter, DispatchSettings::default());
//! let outcome = dispatcher.dispatch(Invocation::New { name: "hero-banner".into() })?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DispatchSettings, Dispatcher, ElementApp, Outcome,
        ports::{
            BlockActions, BlockWorkspace, BoilerplateSource, CredentialStore, Filesystem,
            Prompter, RegistryClient,
        },
    };
    pub use crate::domain::{
        BlockBundle, BlockName, Category, Credentials, Invocation, LoginRequest, NewBlockRequest,
        Prompt, PromptKind, PublishRequest, PublishedBlock, Session, TogglePublic, UpdateRequest,
    };
    pub use crate::error::{ElementError, ElementResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
