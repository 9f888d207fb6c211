//! `element login`: username and password are always prompted for.

use element_core::domain::{Invocation, Session};

use crate::{error::CliResult, output::OutputManager};

pub fn invocation() -> Invocation {
    Invocation::Login
}

pub fn report(session: &Session, output: &OutputManager) -> CliResult<()> {
    output.success(&format!("Logged in as {}", session.username))?;
    Ok(())
}
