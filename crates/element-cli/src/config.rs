//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables, `ELEMENT_` prefix with `__` between sections
//!    (`ELEMENT_REGISTRY__URL`, `ELEMENT_ENV=test`)
//! 2. Config file: `--config FILE`, else `<config dir>/config.toml` if present
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_REGISTRY_URL: &str = "https://registry.element.dev/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Runtime environment; `test` suppresses the automatic help output.
    pub env: Option<String>,
    pub registry: RegistryConfig,
    pub credentials: CredentialsConfig,
    pub boilerplate: BoilerplateConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub url: String,
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Session file; defaults to `<config dir>/credentials.toml`.
    pub path: Option<PathBuf>,
}

/// Where `element new` gets its starter files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerplateConfig {
    /// Clone this repository instead of using the built-in boilerplate.
    pub git_url: Option<String>,
    /// Branch or tag to clone.
    pub git_ref: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from defaults, the config file and the environment.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("failed to serialise built-in defaults")?;

        let file = match config_file {
            Some(path) => config::File::new(&path.to_string_lossy(), config::FileFormat::Toml)
                .required(true),
            None => config::File::new(
                &Self::config_path().to_string_lossy(),
                config::FileFormat::Toml,
            )
            .required(false),
        };

        config::Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("ELEMENT")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }

    /// `ELEMENT_ENV=test` (or `env = "test"`) disables the automatic help.
    pub fn is_test_mode(&self) -> bool {
        self.env
            .as_deref()
            .is_some_and(|env| env.eq_ignore_ascii_case("test"))
    }

    /// Resolved path of the session file.
    pub fn credentials_path(&self) -> PathBuf {
        self.credentials
            .path
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("credentials.toml"))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("com", "element", "element")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".element"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_point_at_public_registry() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.registry.url, DEFAULT_REGISTRY_URL);
        assert_eq!(cfg.registry.timeout_secs, 30);
        assert!(cfg.boilerplate.git_url.is_none());
        assert!(!cfg.is_test_mode());
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("element.toml");
        fs::write(
            &path,
            r#"
env = "test"

[registry]
timeout_secs = 5

[boilerplate]
git_url = "https://example.com/blocks/boilerplate.git"
git_ref = "v2"
"#,
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert!(cfg.is_test_mode());
        assert_eq!(cfg.registry.timeout_secs, 5);
        assert_eq!(cfg.registry.url, DEFAULT_REGISTRY_URL);
        assert_eq!(cfg.boilerplate.git_ref.as_deref(), Some("v2"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn credentials_path_prefers_configured_value() {
        let mut cfg = AppConfig::default();
        assert!(cfg.credentials_path().ends_with("credentials.toml"));

        cfg.credentials.path = Some(PathBuf::from("/tmp/session.toml"));
        assert_eq!(cfg.credentials_path(), PathBuf::from("/tmp/session.toml"));
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
