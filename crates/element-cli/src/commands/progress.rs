//! Spinner decoration for the actions that may block on the network.

use std::path::PathBuf;

use element_core::{
    application::BlockActions,
    domain::{
        Category, LoginRequest, NewBlockRequest, PublishRequest, PublishedBlock, Session,
        UpdateRequest,
    },
    error::ElementResult,
};

use crate::output::OutputManager;

/// Wraps another [`BlockActions`] and shows a spinner while each call runs.
pub struct SpinnerActions<'a> {
    inner: &'a dyn BlockActions,
    output: &'a OutputManager,
}

impl<'a> SpinnerActions<'a> {
    pub fn new(inner: &'a dyn BlockActions, output: &'a OutputManager) -> Self {
        Self { inner, output }
    }
}

impl BlockActions for SpinnerActions<'_> {
    fn login(&self, request: LoginRequest) -> ElementResult<Session> {
        self.output
            .spin("Logging in...", || self.inner.login(request))
    }

    fn create_block(&self, request: NewBlockRequest) -> ElementResult<PathBuf> {
        self.output
            .spin("Creating block...", || self.inner.create_block(request))
    }

    fn category_names(&self) -> ElementResult<Vec<Category>> {
        self.output
            .spin("Fetching categories...", || self.inner.category_names())
    }

    fn publish(&self, request: PublishRequest) -> ElementResult<PublishedBlock> {
        self.output
            .spin("Publishing block...", || self.inner.publish(request))
    }

    fn publish_update(&self, request: UpdateRequest) -> ElementResult<PublishedBlock> {
        self.output
            .spin("Updating block...", || self.inner.publish_update(request))
    }
}
