//! Boilerplate sources for `element new`.
//!
//! - [`BuiltinBoilerplate`]: starter files compiled into the binary
//! - [`GitBoilerplate`]: a shallow clone of a boilerplate repository

mod builtin;
mod git;

pub use builtin::BuiltinBoilerplate;
pub use git::GitBoilerplate;
