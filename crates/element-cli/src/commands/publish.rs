//! `element publish [-n [NAME]] [-c [CATEGORY]]`.

use element_core::domain::{Invocation, PublishedBlock, normalize_flag_value};

use crate::{cli::PublishArgs, error::CliResult, output::OutputManager};

/// A flag given without a value counts as absent: the name falls back to
/// the directory name and the category is asked for.
pub fn invocation(args: PublishArgs) -> Invocation {
    Invocation::Publish {
        name: normalize_flag_value(args.name),
        category: normalize_flag_value(args.category),
    }
}

pub fn report(block: &PublishedBlock, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Published '{}' in {} (id {})",
        block.name, block.category, block.id
    ))?;
    if !block.public {
        output.info("Only members of your organization can see it; run `element update -p` to make it public")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_flags_are_absent() {
        let inv = invocation(PublishArgs {
            name: Some(None),
            category: Some(Some("  ".into())),
        });
        assert_eq!(
            inv,
            Invocation::Publish {
                name: None,
                category: None
            }
        );
    }

    #[test]
    fn flag_values_are_passed_on_as_given() {
        let inv = invocation(PublishArgs {
            name: Some(Some(" Hero Banner ".into())),
            category: Some(Some("Page Headers ".into())),
        });
        assert_eq!(
            inv,
            Invocation::Publish {
                name: Some(" Hero Banner ".into()),
                category: Some("Page Headers ".into())
            }
        );
    }
}
