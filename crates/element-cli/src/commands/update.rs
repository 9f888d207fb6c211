//! `element update [-p [BOOL]]`.

use element_core::{
    domain::{Invocation, PublishedBlock, TogglePublic},
    error::ElementError,
};

use crate::{cli::UpdateArgs, error::CliResult, output::OutputManager};

/// Fails for a `-p` value that is not boolean-like.
pub fn invocation(args: UpdateArgs) -> CliResult<Invocation> {
    let toggle_public = TogglePublic::from_flag(args.toggle_public.as_ref().map(|v| v.as_deref()))
        .map_err(ElementError::from)?;
    Ok(Invocation::Update { toggle_public })
}

pub fn report(block: &PublishedBlock, output: &OutputManager) -> CliResult<()> {
    output.success(&format!("Updated '{}' (id {})", block.name, block.id))?;
    let visibility = if block.public { "public" } else { "private" };
    output.info(&format!("The block is {visibility}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_flag_leaves_visibility() {
        assert_eq!(
            invocation(UpdateArgs {
                toggle_public: None
            })
            .unwrap(),
            Invocation::Update {
                toggle_public: TogglePublic::Unchanged
            }
        );
    }

    #[test]
    fn explicit_false_leaves_visibility() {
        assert_eq!(
            invocation(UpdateArgs {
                toggle_public: Some(Some("false".into()))
            })
            .unwrap(),
            Invocation::Update {
                toggle_public: TogglePublic::Unchanged
            }
        );
    }
}
