//! Driving (input) port - the actions the dispatcher invokes.

use std::path::PathBuf;

use crate::domain::{
    Category, LoginRequest, NewBlockRequest, PublishRequest, PublishedBlock, Session,
    UpdateRequest,
};
use crate::error::ElementResult;

/// The external actions behind each command.
///
/// Implemented by `crate::application::ElementApp`. Every request type is
/// fully resolved, so an implementation never has to ask for more input.
#[cfg_attr(test, mockall::automock)]
pub trait BlockActions {
    /// Authenticate and persist the session.
    fn login(&self, request: LoginRequest) -> ElementResult<Session>;

    /// Materialize the boilerplate; returns the created directory.
    fn create_block(&self, request: NewBlockRequest) -> ElementResult<PathBuf>;

    /// Fetch the current category list from the registry.
    fn category_names(&self) -> ElementResult<Vec<Category>>;

    /// Publish the block in the working directory.
    fn publish(&self, request: PublishRequest) -> ElementResult<PublishedBlock>;

    /// Re-upload a published block, optionally flipping its visibility.
    fn publish_update(&self, request: UpdateRequest) -> ElementResult<PublishedBlock>;
}
