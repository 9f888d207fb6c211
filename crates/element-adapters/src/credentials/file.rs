//! TOML file credential store.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use element_core::{
    application::{ApplicationError, ports::CredentialStore},
    domain::Session,
    error::{ElementError, ElementResult},
};

/// Stores the session as TOML, readable only by the owner on unix.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, reason: impl Into<String>) -> ElementError {
        ApplicationError::CredentialStore {
            path: self.path.clone(),
            reason: reason.into(),
        }
        .into()
    }
}

impl CredentialStore for FileCredentialStore {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> ElementResult<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored session");
                return Ok(None);
            }
            Err(e) => return Err(self.error(e.to_string())),
        };

        toml::from_str(&raw)
            .map(Some)
            .map_err(|e| self.error(format!("malformed session file: {e}")))
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn save(&self, session: &Session) -> ElementResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.error(e.to_string()))?;
        }

        let raw = toml::to_string(session).map_err(|e| self.error(e.to_string()))?;
        write_private(&self.path, raw.as_bytes()).map_err(|e| self.error(e.to_string()))?;

        debug!("Session saved");
        Ok(())
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies on creation.
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(contents)
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}
