//! Requests for a single piece of missing input.

/// What kind of answer a prompt expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    /// Free text, echoed.
    Text,
    /// Masked input.
    Secret,
    /// Exactly one of the listed choices.
    Choice(Vec<String>),
}

/// A question the dispatcher needs answered before it can act.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Stable identifier of the requested field (`username`, `category`, ...).
    pub name: &'static str,
    pub message: &'static str,
    pub kind: PromptKind,
}

impl Prompt {
    pub const fn text(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            message,
            kind: PromptKind::Text,
        }
    }

    pub const fn secret(name: &'static str, message: &'static str) -> Self {
        Self {
            name,
            message,
            kind: PromptKind::Secret,
        }
    }

    pub fn choice(name: &'static str, message: &'static str, choices: Vec<String>) -> Self {
        Self {
            name,
            message,
            kind: PromptKind::Choice(choices),
        }
    }

    pub fn choices(&self) -> &[String] {
        match &self.kind {
            PromptKind::Choice(choices) => choices,
            _ => &[],
        }
    }
}
