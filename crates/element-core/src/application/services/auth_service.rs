//! Auth Service - logs in against the registry and keeps the session.

use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CredentialStore, RegistryClient},
    },
    domain::{Credentials, Session},
    error::ElementResult,
};

pub struct AuthService {
    registry: Arc<dyn RegistryClient>,
    credentials: Arc<dyn CredentialStore>,
}

impl AuthService {
    pub fn new(registry: Arc<dyn RegistryClient>, credentials: Arc<dyn CredentialStore>) -> Self {
        Self {
            registry,
            credentials,
        }
    }

    /// Exchange credentials for a token and persist it.
    ///
    /// Nothing is written when the registry refuses the login.
    #[instrument(skip_all, fields(username = %credentials.username))]
    pub fn login(&self, credentials: &Credentials) -> ElementResult<Session> {
        let session = self.registry.login(credentials)?;
        self.credentials.save(&session)?;
        info!("Session stored");
        Ok(session)
    }
}

/// The stored session, or `NotLoggedIn`.
pub fn require_session(store: &dyn CredentialStore) -> ElementResult<Session> {
    match store.load()? {
        Some(session) => {
            debug!(username = %session.username, "Using stored session");
            Ok(session)
        }
        None => Err(ApplicationError::NotLoggedIn.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockCredentialStore, MockRegistryClient};
    use crate::domain::SessionToken;
    use crate::error::ElementError;

    fn session() -> Session {
        Session::new("ada", SessionToken::new("tok"))
    }

    #[test]
    fn successful_login_is_saved() {
        let mut registry = MockRegistryClient::new();
        registry
            .expect_login()
            .withf(|c| c.username == "ada" && c.password == "hunter2")
            .returning(|_| Ok(session()));
        let mut store = MockCredentialStore::new();
        store
            .expect_save()
            .withf(|s| s.token.expose() == "tok")
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(registry), Arc::new(store));
        let result = service.login(&Credentials::new("ada", "hunter2")).unwrap();
        assert_eq!(result, session());
    }

    #[test]
    fn rejected_login_saves_nothing() {
        let mut registry = MockRegistryClient::new();
        registry.expect_login().returning(|_| {
            Err(ApplicationError::Unauthorized {
                reason: "bad password".into(),
            }
            .into())
        });
        let mut store = MockCredentialStore::new();
        store.expect_save().times(0);

        let service = AuthService::new(Arc::new(registry), Arc::new(store));
        let err = service.login(&Credentials::new("ada", "nope")).unwrap_err();
        assert!(matches!(
            err,
            ElementError::Application(ApplicationError::Unauthorized { .. })
        ));
    }

    #[test]
    fn missing_session_is_not_logged_in() {
        let mut store = MockCredentialStore::new();
        store.expect_load().returning(|| Ok(None));

        let err = require_session(&store).unwrap_err();
        assert!(matches!(
            err,
            ElementError::Application(ApplicationError::NotLoggedIn)
        ));
    }

    #[test]
    fn stored_session_is_returned() {
        let mut store = MockCredentialStore::new();
        store.expect_load().returning(|| Ok(Some(session())));
        assert_eq!(require_session(&store).unwrap(), session());
    }
}
