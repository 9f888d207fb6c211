//! Parsed runtime requests and the fully-resolved requests handed to
//! collaborators.
//!
//! An [`Invocation`] may still lack values that the dispatcher has to
//! collect interactively. The `*Request` types cannot be built with missing
//! fields, so nothing partially filled ever reaches the network layer.

use std::fmt;

use crate::domain::value_objects::{Category, Credentials, TogglePublic};

/// The fixed set of commands the CLI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Login,
    New,
    Publish,
    Update,
}

impl CommandKind {
    pub const ALL: [CommandKind; 4] = [Self::Login, Self::New, Self::Publish, Self::Update];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::New => "new",
            Self::Publish => "publish",
            Self::Update => "update",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Login => "Log in using your Element credentials",
            Self::New => "Create the block boilerplate",
            Self::Publish => "Publish a block to the Block Theme Registry",
            Self::Update => "Update your existing block in the Block Theme Registry",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One process invocation, as parsed from argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No command was given.
    Empty,
    Login,
    New {
        name: String,
    },
    Publish {
        /// Already normalised: `None` means "let the publish action decide".
        name: Option<String>,
        /// `None` means "ask the user to pick one".
        category: Option<String>,
    },
    Update {
        toggle_public: TogglePublic,
    },
    /// The first token did not name a command.
    Unrecognized {
        args: Vec<String>,
    },
}

impl Invocation {
    pub fn command(&self) -> Option<CommandKind> {
        match self {
            Self::Login => Some(CommandKind::Login),
            Self::New { .. } => Some(CommandKind::New),
            Self::Publish { .. } => Some(CommandKind::Publish),
            Self::Update { .. } => Some(CommandKind::Update),
            Self::Empty | Self::Unrecognized { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub credentials: Credentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBlockRequest {
    /// Raw name; validation is the scaffolder's job.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub name: Option<String>,
    pub category: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateRequest {
    pub toggle_public: TogglePublic,
}
