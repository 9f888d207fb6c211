//! Domain value objects: BlockName, Category, Credentials, Session, TogglePublic.
//!
//! Pure value types with equality-by-value and no identity. Secrets never
//! show up in `Debug` output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── BlockName ────────────────────────────────────────────────────────────────

/// A validated block (project) name.
///
/// Invariant: non-empty, does not start with `.`, contains only ASCII
/// alphanumerics, `-` and `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockName(String);

impl BlockName {
    pub fn parse(raw: impl Into<String>) -> Result<Self, DomainError> {
        let name = raw.into();
        let invalid = |reason: &str| DomainError::InvalidBlockName {
            name: name.clone(),
            reason: reason.into(),
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty"));
        }
        if name.starts_with('.') {
            return Err(invalid("name cannot start with '.'"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(invalid("name cannot contain path separators"));
        }
        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(invalid(&format!("character '{c}' is not allowed")));
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Hero_Banner` → `hero-banner`
    pub fn kebab(&self) -> String {
        self.words().join("-")
    }

    /// `hero-banner` → `hero_banner`
    pub fn snake(&self) -> String {
        self.words().join("_")
    }

    /// `hero-banner` → `HeroBanner`
    pub fn pascal(&self) -> String {
        self.words()
            .iter()
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }

    fn words(&self) -> Vec<String> {
        self.0
            .split(['-', '_'])
            .filter(|w| !w.is_empty())
            .map(str::to_ascii_lowercase)
            .collect()
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Category ─────────────────────────────────────────────────────────────────

/// A registry-defined classification label for a block.
///
/// Only emptiness is checked; the label is never compared against the
/// registry's list on the client side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    pub fn new(label: impl AsRef<str>) -> Result<Self, DomainError> {
        let label = label.as_ref();
        if label.trim().is_empty() {
            return Err(DomainError::EmptyCategory);
        }
        Ok(Self(label.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        c.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Credentials / Session ────────────────────────────────────────────────────

/// Username and password collected by `login`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token issued by the registry.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(<redacted>)")
    }
}

/// An authenticated session as persisted by the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub token: SessionToken,
}

impl Session {
    pub fn new(username: impl Into<String>, token: SessionToken) -> Self {
        Self {
            username: username.into(),
            token,
        }
    }
}

// ── TogglePublic ─────────────────────────────────────────────────────────────

/// Whether `update` should flip the block's public visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TogglePublic {
    /// Flag absent: leave visibility as it is.
    #[default]
    Unchanged,
    /// Flag set: flip visibility.
    Toggle,
}

impl TogglePublic {
    /// Interpret the `-p/--toggle-public [BOOL]` flag.
    ///
    /// `None` is "flag absent", `Some(None)` is "flag given without a value".
    pub fn from_flag(flag: Option<Option<&str>>) -> Result<Self, DomainError> {
        match flag {
            None => Ok(Self::Unchanged),
            Some(None) => Ok(Self::Toggle),
            Some(Some(value)) => value.parse(),
        }
    }

    pub const fn is_toggle(self) -> bool {
        matches!(self, Self::Toggle)
    }
}

impl FromStr for TogglePublic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "true" | "yes" | "y" | "1" | "on" => Ok(Self::Toggle),
            "false" | "no" | "n" | "0" | "off" => Ok(Self::Unchanged),
            _ => Err(DomainError::InvalidToggle { value: s.into() }),
        }
    }
}

// ── Flag normalisation ───────────────────────────────────────────────────────

/// Collapse an optional-value flag into a single notion of "no value".
///
/// Absent, present-without-value and blank values all become `None`.
/// Any other value is passed on exactly as given.
pub fn normalize_flag_value(flag: Option<Option<String>>) -> Option<String> {
    flag.flatten().filter(|v| !v.trim().is_empty())
}
