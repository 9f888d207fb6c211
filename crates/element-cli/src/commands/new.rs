//! `element new <name>`.
//!
//! The name is passed through untouched; the scaffold service validates it
//! and refuses an existing directory.

use std::path::Path;

use tracing::debug;

use element_core::domain::Invocation;

use crate::{cli::NewArgs, error::CliResult, output::OutputManager};

pub fn invocation(args: NewArgs) -> Invocation {
    Invocation::New { name: args.name }
}

/// Print the created path and the usual next steps.
pub fn report(path: &Path, output: &OutputManager) -> CliResult<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!(path = %path.display(), "Reporting new block");

    output.success(&format!("Block '{name}' created at {}", path.display()))?;

    if !output.is_quiet() {
        output.print("")?;
        output.header("Next steps:")?;
        output.print(&format!("  cd {name}"))?;
        output.print("  npm install")?;
        output.print("  npm run build")?;
        output.print("  element publish")?;
    }

    Ok(())
}
