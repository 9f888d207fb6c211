//! Command handlers.
//!
//! Each submodule turns its clap arguments into an [`Invocation`] and knows
//! how to report the matching [`Outcome`]. Dispatch itself happens in
//! `element-core`.

use std::{cell::OnceCell, path::PathBuf, sync::Arc, time::Duration};

use clap::CommandFactory;
use tracing::{debug, instrument};

use element_adapters::{
    BuiltinBoilerplate, FileCredentialStore, GitBoilerplate, HttpRegistryClient,
    LocalBlockWorkspace, LocalFilesystem,
};
use element_core::{
    application::{
        ApplicationError, AuthService, BlockActions, BoilerplateSource, CredentialStore,
        ElementApp, Outcome, PublishService, RegistryClient, ScaffoldService,
    },
    domain::{
        Category, Invocation, LoginRequest, NewBlockRequest, PublishRequest, PublishedBlock,
        Session, UpdateRequest,
    },
    error::ElementResult,
};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub mod login;
pub mod new;
pub mod progress;
pub mod publish;
pub mod update;

/// Translate the parsed subcommand into a core invocation.
pub fn invocation(command: Option<Commands>) -> CliResult<Invocation> {
    Ok(match command {
        None => Invocation::Empty,
        Some(Commands::Login) => login::invocation(),
        Some(Commands::New(args)) => new::invocation(args),
        Some(Commands::Publish(args)) => publish::invocation(args),
        Some(Commands::Update(args)) => update::invocation(args)?,
        Some(Commands::External(args)) => Invocation::Unrecognized { args },
    })
}

/// Print the result of a dispatched invocation.
pub fn report(outcome: &Outcome, output: &OutputManager) -> CliResult<()> {
    match outcome {
        Outcome::ShowHelp => Cli::command()
            .print_help()
            .with_cli_context(|| "failed to print help")?,
        Outcome::Idle => {}
        Outcome::LoggedIn(session) => login::report(session, output)?,
        Outcome::Created(path) => new::report(path, output)?,
        Outcome::Published(block) => publish::report(block, output)?,
        Outcome::Updated(block) => update::report(block, output)?,
    }
    Ok(())
}

/// Wire the production adapters into an [`ElementApp`].
///
/// Nothing here touches the network; the registry client only connects
/// when an action needs it.
#[instrument(skip_all)]
pub fn build_app(config: &AppConfig) -> ElementResult<ElementApp> {
    let cwd: PathBuf =
        std::env::current_dir().map_err(|e| ApplicationError::FilesystemError {
            path: PathBuf::from("."),
            reason: format!("could not read the working directory: {e}"),
        })?;

    let registry: Arc<dyn RegistryClient> = Arc::new(HttpRegistryClient::new(
        config.registry.url.clone(),
        Duration::from_secs(config.registry.timeout_secs),
    )?);
    let credentials: Arc<dyn CredentialStore> =
        Arc::new(FileCredentialStore::new(config.credentials_path()));

    let source: Box<dyn BoilerplateSource> = match &config.boilerplate.git_url {
        Some(url) => Box::new(GitBoilerplate::new(
            url.clone(),
            config.boilerplate.git_ref.clone(),
        )),
        None => Box::new(BuiltinBoilerplate::new()),
    };

    debug!(
        registry = %config.registry.url,
        credentials = %config.credentials_path().display(),
        cwd = %cwd.display(),
        "Adapters wired"
    );

    let auth = AuthService::new(Arc::clone(&registry), Arc::clone(&credentials));
    let publisher = PublishService::new(
        registry,
        credentials,
        Box::new(LocalBlockWorkspace::new(cwd.clone())),
    );
    let scaffold = ScaffoldService::new(source, Box::new(LocalFilesystem::new()), cwd);

    Ok(ElementApp::new(auth, publisher, scaffold))
}

/// Builds the [`ElementApp`] on the first action call.
///
/// Help and unrecognized commands never reach an action, so they do not
/// depend on the working directory or the registry settings.
pub struct LazyApp<'a> {
    config: &'a AppConfig,
    app: OnceCell<ElementApp>,
}

impl<'a> LazyApp<'a> {
    pub fn new(config: &'a AppConfig) -> Self {
        Self {
            config,
            app: OnceCell::new(),
        }
    }

    fn app(&self) -> ElementResult<&ElementApp> {
        if let Some(app) = self.app.get() {
            return Ok(app);
        }
        let app = build_app(self.config)?;
        Ok(self.app.get_or_init(|| app))
    }

    #[cfg(test)]
    fn is_built(&self) -> bool {
        self.app.get().is_some()
    }
}

impl BlockActions for LazyApp<'_> {
    fn login(&self, request: LoginRequest) -> ElementResult<Session> {
        self.app()?.login(request)
    }

    fn create_block(&self, request: NewBlockRequest) -> ElementResult<PathBuf> {
        self.app()?.create_block(request)
    }

    fn category_names(&self) -> ElementResult<Vec<Category>> {
        self.app()?.category_names()
    }

    fn publish(&self, request: PublishRequest) -> ElementResult<PublishedBlock> {
        self.app()?.publish(request)
    }

    fn publish_update(&self, request: UpdateRequest) -> ElementResult<PublishedBlock> {
        self.app()?.publish_update(request)
    }
}
