//! Command dispatcher - turns one [`Invocation`] into exactly one action.
//!
//! Missing input is collected through the [`Prompter`] first; only a fully
//! resolved request is handed to [`BlockActions`]. A rejected prompt aborts
//! before anything mutating happens, so there is nothing to roll back.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{BlockActions, Prompter},
    },
    domain::{
        Category, Credentials, Invocation, LoginRequest, NewBlockRequest, Prompt, PublishRequest,
        PublishedBlock, Session, TogglePublic, UpdateRequest,
    },
    error::ElementResult,
};

const USERNAME_PROMPT: Prompt = Prompt::text("username", "Enter your username");
const PASSWORD_PROMPT: Prompt = Prompt::secret("password", "Enter your password");
const CATEGORY_MESSAGE: &str = "Select the Category that best fits this block:";

/// Startup-time switches the dispatcher needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchSettings {
    /// Test mode: an empty invocation does nothing instead of showing help.
    pub suppress_auto_help: bool,
}

/// What happened, for the CLI to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the full help text.
    ShowHelp,
    /// Nothing to do.
    Idle,
    LoggedIn(Session),
    Created(PathBuf),
    Published(PublishedBlock),
    Updated(PublishedBlock),
}

/// Maps an [`Invocation`] onto the [`BlockActions`] port.
///
/// Holds no state between calls: dispatching the same invocation twice
/// produces two identical, independent action calls.
pub struct Dispatcher<'a> {
    actions: &'a dyn BlockActions,
    prompter: &'a dyn Prompter,
    settings: DispatchSettings,
}

impl<'a> Dispatcher<'a> {
    pub fn new(
        actions: &'a dyn BlockActions,
        prompter: &'a dyn Prompter,
        settings: DispatchSettings,
    ) -> Self {
        Self {
            actions,
            prompter,
            settings,
        }
    }

    /// Run one invocation to completion.
    #[instrument(skip_all, fields(command = invocation.command().map_or("-", |c| c.as_str())))]
    pub fn dispatch(&self, invocation: Invocation) -> ElementResult<Outcome> {
        match invocation {
            Invocation::Empty if self.settings.suppress_auto_help => {
                debug!("No command given in test mode");
                Ok(Outcome::Idle)
            }
            Invocation::Empty => Ok(Outcome::ShowHelp),
            Invocation::Unrecognized { args } => Err(ApplicationError::InvalidCommand {
                command: args.join(" "),
            }
            .into()),
            Invocation::Login => self.login(),
            Invocation::New { name } => {
                let path = self.actions.create_block(NewBlockRequest { name })?;
                Ok(Outcome::Created(path))
            }
            Invocation::Publish { name, category } => self.publish(name, category),
            Invocation::Update { toggle_public } => self.update(toggle_public),
        }
    }

    /// Credentials are always asked for, never read from argv.
    fn login(&self) -> ElementResult<Outcome> {
        let username = self.prompter.ask(&USERNAME_PROMPT)?;
        let password = self.prompter.ask(&PASSWORD_PROMPT)?;

        let session = self.actions.login(LoginRequest {
            credentials: Credentials::new(username, password),
        })?;
        info!(username = %session.username, "Logged in");
        Ok(Outcome::LoggedIn(session))
    }

    fn publish(&self, name: Option<String>, category: Option<String>) -> ElementResult<Outcome> {
        let category = match category {
            Some(label) => Category::new(label)?,
            None => self.choose_category()?,
        };
        debug!(name = name.as_deref().unwrap_or("<directory>"), %category, "Publishing");

        let block = self.actions.publish(PublishRequest { name, category })?;
        Ok(Outcome::Published(block))
    }

    fn update(&self, toggle_public: TogglePublic) -> ElementResult<Outcome> {
        let block = self
            .actions
            .publish_update(UpdateRequest { toggle_public })?;
        Ok(Outcome::Updated(block))
    }

    /// Fetch the category list and let the user pick one.
    fn choose_category(&self) -> ElementResult<Category> {
        let categories = self.actions.category_names()?;
        if categories.is_empty() {
            return Err(ApplicationError::NoCategories.into());
        }

        let choices = categories.iter().map(ToString::to_string).collect();
        let answer = self
            .prompter
            .ask(&Prompt::choice("category", CATEGORY_MESSAGE, choices))?;
        Ok(Category::new(answer)?)
    }
}
