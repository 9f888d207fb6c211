//! Terminal implementation of the core `Prompter` port.

use element_core::{
    application::{ApplicationError, Prompter},
    domain::Prompt,
    error::ElementResult,
};

/// Asks on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &Prompt) -> ElementResult<String> {
        use dialoguer::{Input, Password, Select};
        use element_core::domain::PromptKind;

        tracing::debug!(field = prompt.name, "Prompting");
        let answer = match &prompt.kind {
            PromptKind::Text => Input::<String>::new()
                .with_prompt(prompt.message)
                .interact_text()
                .map_err(prompt_error)?,
            PromptKind::Secret => Password::new()
                .with_prompt(prompt.message)
                .interact()
                .map_err(prompt_error)?,
            PromptKind::Choice(choices) => {
                let selected = Select::new()
                    .with_prompt(prompt.message)
                    .items(choices)
                    .default(0)
                    .interact_opt()
                    .map_err(prompt_error)?
                    .ok_or(ApplicationError::Cancelled)?;
                choices
                    .get(selected)
                    .cloned()
                    .ok_or(ApplicationError::Cancelled)?
            }
        };
        Ok(answer)
    }
}

#[cfg(not(feature = "interactive"))]
impl Prompter for TerminalPrompter {
    fn ask(&self, _prompt: &Prompt) -> ElementResult<String> {
        Err(ApplicationError::PromptFailed {
            reason: "interactive prompts are not available in this build".into(),
        }
        .into())
    }
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> ApplicationError {
    let dialoguer::Error::IO(io) = err;
    if io.kind() == std::io::ErrorKind::Interrupted {
        ApplicationError::Cancelled
    } else {
        ApplicationError::PromptFailed {
            reason: io.to_string(),
        }
    }
}
