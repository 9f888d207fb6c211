//! `ElementApp` - the production [`BlockActions`] implementation.
//!
//! Thin routing from the dispatcher's resolved requests to the services.

use std::path::PathBuf;

use crate::{
    application::{
        ports::BlockActions,
        services::{AuthService, PublishService, ScaffoldService},
    },
    domain::{
        Category, LoginRequest, NewBlockRequest, PublishRequest, PublishedBlock, Session,
        UpdateRequest,
    },
    error::ElementResult,
};

pub struct ElementApp {
    auth: AuthService,
    publisher: PublishService,
    scaffold: ScaffoldService,
}

impl ElementApp {
    pub fn new(auth: AuthService, publisher: PublishService, scaffold: ScaffoldService) -> Self {
        Self {
            auth,
            publisher,
            scaffold,
        }
    }
}

impl BlockActions for ElementApp {
    fn login(&self, request: LoginRequest) -> ElementResult<Session> {
        self.auth.login(&request.credentials)
    }

    fn create_block(&self, request: NewBlockRequest) -> ElementResult<PathBuf> {
        self.scaffold.create(&request.name)
    }

    fn category_names(&self) -> ElementResult<Vec<Category>> {
        self.publisher.categories()
    }

    fn publish(&self, request: PublishRequest) -> ElementResult<PublishedBlock> {
        self.publisher
            .publish(request.name.as_deref(), &request.category)
    }

    fn publish_update(&self, request: UpdateRequest) -> ElementResult<PublishedBlock> {
        self.publisher.update(request.toggle_public)
    }
}
