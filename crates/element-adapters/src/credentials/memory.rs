//! In-memory credential store for testing.

use std::sync::{Arc, RwLock};

use element_core::{
    application::{ApplicationError, ports::CredentialStore},
    domain::Session,
    error::ElementResult,
};

#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    inner: Arc<RwLock<Option<Session>>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts logged in.
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(session))),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> ElementResult<Option<Session>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }

    fn save(&self, session: &Session) -> ElementResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = Some(session.clone());
        Ok(())
    }
}
