//! Publish Service - uploads the block in the working directory.
//!
//! `publish` creates a registry entry and records its id next to the
//! block; `update` reads that record back and replaces the entry's content.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{BlockWorkspace, CredentialStore, RegistryClient},
        services::auth_service::require_session,
    },
    domain::{
        BlockBundle, Category, DomainError, PublishedBlock, RECOMMENDED_MAX_THUMBNAIL_BYTES,
        TogglePublic,
    },
    error::ElementResult,
};

pub struct PublishService {
    registry: Arc<dyn RegistryClient>,
    credentials: Arc<dyn CredentialStore>,
    workspace: Box<dyn BlockWorkspace>,
}

impl PublishService {
    pub fn new(
        registry: Arc<dyn RegistryClient>,
        credentials: Arc<dyn CredentialStore>,
        workspace: Box<dyn BlockWorkspace>,
    ) -> Self {
        Self {
            registry,
            credentials,
            workspace,
        }
    }

    /// Categories currently offered by the registry.
    pub fn categories(&self) -> ElementResult<Vec<Category>> {
        self.registry.categories()
    }

    /// Publish the workspace block. Without `name` the directory name is used.
    #[instrument(skip_all, fields(category = %category))]
    pub fn publish(&self, name: Option<&str>, category: &Category) -> ElementResult<PublishedBlock> {
        let session = require_session(self.credentials.as_ref())?;
        let name = match name {
            Some(name) => name.to_owned(),
            None => self.directory_name()?,
        };

        let bundle = self.bundle()?;
        let block = self.registry.publish(&session, &name, category, &bundle)?;
        self.workspace.write_record(&block)?;

        info!(id = %block.id, name = %block.name, "Block published");
        Ok(block)
    }

    /// Re-upload a previously published block.
    #[instrument(skip_all, fields(toggle = toggle_public.is_toggle()))]
    pub fn update(&self, toggle_public: TogglePublic) -> ElementResult<PublishedBlock> {
        let session = require_session(self.credentials.as_ref())?;
        let record = self
            .workspace
            .read_record()?
            .ok_or_else(|| ApplicationError::NotPublished {
                path: self.workspace.root(),
            })?;

        let bundle = self.bundle()?;
        let block = self
            .registry
            .update(&session, &record, &bundle, toggle_public)?;
        self.workspace.write_record(&block)?;

        info!(id = %block.id, public = block.public, "Block updated");
        Ok(block)
    }

    fn bundle(&self) -> ElementResult<BlockBundle> {
        let bundle = self.workspace.bundle()?;
        if let Some(thumbnail) = bundle.thumbnail.as_ref().filter(|t| t.exceeds_recommended_size()) {
            warn!(
                file = %thumbnail.file_name,
                size = thumbnail.bytes.len(),
                limit = RECOMMENDED_MAX_THUMBNAIL_BYTES,
                "Thumbnail is larger than recommended"
            );
        }
        Ok(bundle)
    }

    fn directory_name(&self) -> ElementResult<String> {
        self.workspace
            .root()
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .ok_or_else(|| DomainError::MissingRequiredField { field: "name" }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockBlockWorkspace, MockCredentialStore, MockRegistryClient};
    use crate::domain::{Session, SessionToken, Thumbnail};
    use crate::error::ElementError;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    fn logged_in() -> MockCredentialStore {
        let mut store = MockCredentialStore::new();
        store
            .expect_load()
            .returning(|| Ok(Some(Session::new("ada", SessionToken::new("tok")))));
        store
    }

    fn logged_out() -> MockCredentialStore {
        let mut store = MockCredentialStore::new();
        store.expect_load().returning(|| Ok(None));
        store
    }

    fn bundle() -> BlockBundle {
        BlockBundle {
            archive_name: "hero.tar.gz".into(),
            archive: vec![0x1f, 0x8b],
            thumbnail: Some(Thumbnail {
                file_name: "thumbnail.png".into(),
                bytes: vec![0; 16],
            }),
        }
    }

    fn record(public: bool) -> PublishedBlock {
        PublishedBlock {
            id: "blk_1".into(),
            name: "hero".into(),
            category: "Widgets".into(),
            public,
            published_at: None,
        }
    }

    fn workspace_at(root: &'static str) -> MockBlockWorkspace {
        let mut ws = MockBlockWorkspace::new();
        ws.expect_root().returning(move || PathBuf::from(root));
        ws.expect_bundle().returning(|| Ok(bundle()));
        ws
    }

    #[test]
    fn publish_defaults_name_to_directory() {
        let mut registry = MockRegistryClient::new();
        registry
            .expect_publish()
            .withf(|s, name, cat, _| {
                s.username == "ada" && name == "hero-banner" && cat.as_str() == "Widgets"
            })
            .times(1)
            .returning(|_, _, _, _| Ok(record(false)));
        let mut ws = workspace_at("/work/hero-banner");
        ws.expect_write_record()
            .with(eq(record(false)))
            .times(1)
            .returning(|_| Ok(()));

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_in()), Box::new(ws));
        let block = service
            .publish(None, &Category::new("Widgets").unwrap())
            .unwrap();
        assert_eq!(block.id, "blk_1");
    }

    #[test]
    fn publish_uses_explicit_name() {
        let mut registry = MockRegistryClient::new();
        registry
            .expect_publish()
            .withf(|_, name, _, _| name == "Fancy Hero")
            .times(1)
            .returning(|_, _, _, _| Ok(record(false)));
        let mut ws = workspace_at("/work/hero-banner");
        ws.expect_write_record().returning(|_| Ok(()));

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_in()), Box::new(ws));
        assert!(
            service
                .publish(Some("Fancy Hero"), &Category::new("Widgets").unwrap())
                .is_ok()
        );
    }

    #[test]
    fn publish_requires_login_before_bundling() {
        let mut registry = MockRegistryClient::new();
        registry.expect_publish().times(0);
        let mut ws = MockBlockWorkspace::new();
        ws.expect_bundle().times(0);

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_out()), Box::new(ws));
        let err = service
            .publish(None, &Category::new("Widgets").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ElementError::Application(ApplicationError::NotLoggedIn)
        ));
    }

    #[test]
    fn rejected_publish_writes_no_record() {
        let mut registry = MockRegistryClient::new();
        registry.expect_publish().returning(|_, _, _, _| {
            Err(ApplicationError::RemoteRejected {
                operation: "publish".into(),
                status: 422,
                message: "duplicate name".into(),
            }
            .into())
        });
        let mut ws = workspace_at("/work/hero");
        ws.expect_write_record().times(0);

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_in()), Box::new(ws));
        assert!(
            service
                .publish(None, &Category::new("Widgets").unwrap())
                .is_err()
        );
    }

    #[test]
    fn oversized_thumbnail_is_still_uploaded() {
        let mut registry = MockRegistryClient::new();
        registry
            .expect_publish()
            .withf(|_, _, _, b| {
                b.thumbnail
                    .as_ref()
                    .is_some_and(|t| t.exceeds_recommended_size())
            })
            .times(1)
            .returning(|_, _, _, _| Ok(record(false)));
        let mut ws = MockBlockWorkspace::new();
        ws.expect_root().returning(|| PathBuf::from("/work/hero"));
        ws.expect_bundle().returning(|| {
            Ok(BlockBundle {
                thumbnail: Some(Thumbnail {
                    file_name: "thumbnail.png".into(),
                    bytes: vec![0; RECOMMENDED_MAX_THUMBNAIL_BYTES + 1],
                }),
                ..bundle()
            })
        });
        ws.expect_write_record().returning(|_| Ok(()));

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_in()), Box::new(ws));
        assert!(
            service
                .publish(None, &Category::new("Widgets").unwrap())
                .is_ok()
        );
    }

    #[test]
    fn update_replaces_recorded_block() {
        let mut registry = MockRegistryClient::new();
        registry
            .expect_update()
            .withf(|_, block, _, toggle| block.id == "blk_1" && toggle.is_toggle())
            .times(1)
            .returning(|_, _, _, _| Ok(record(true)));
        let mut ws = workspace_at("/work/hero");
        ws.expect_read_record().returning(|| Ok(Some(record(false))));
        ws.expect_write_record()
            .with(eq(record(true)))
            .times(1)
            .returning(|_| Ok(()));

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_in()), Box::new(ws));
        assert!(service.update(TogglePublic::Toggle).unwrap().public);
    }

    #[test]
    fn update_without_record_is_not_published() {
        let mut registry = MockRegistryClient::new();
        registry.expect_update().times(0);
        let mut ws = workspace_at("/work/hero");
        ws.expect_read_record().returning(|| Ok(None));

        let service = PublishService::new(Arc::new(registry), Arc::new(logged_in()), Box::new(ws));
        let err = service.update(TogglePublic::Unchanged).unwrap_err();
        assert!(matches!(
            err,
            ElementError::Application(ApplicationError::NotPublished { ref path })
                if path == &PathBuf::from("/work/hero")
        ));
    }
}
