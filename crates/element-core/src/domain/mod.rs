//! Core domain layer for Element.
//!
//! Pure data and rules with no I/O. Everything that touches the network,
//! the terminal or the filesystem goes through the ports in
//! `crate::application::ports`.
//!
//! - **No I/O**: no filesystem, network, or terminal access
//! - **Immutable values**: all domain objects are Clone + PartialEq
//! - **Secrets stay hidden**: passwords and tokens are redacted in `Debug`

pub mod block;
pub mod error;
pub mod invocation;
pub mod prompt;
pub mod structure;
pub mod value_objects;

mod validation;

pub use block::{BlockBundle, PublishedBlock, RECOMMENDED_MAX_THUMBNAIL_BYTES, Thumbnail};
pub use error::DomainError;
pub use invocation::{
    CommandKind, Invocation, LoginRequest, NewBlockRequest, PublishRequest, UpdateRequest,
};
pub use prompt::{Prompt, PromptKind};
pub use structure::{
    DirectoryToCreate, FileToWrite, FsEntry, Permissions, ProjectStructure, RenderContext,
};
pub use validation::DomainValidator;
pub use value_objects::{
    BlockName, Category, Credentials, Session, SessionToken, TogglePublic, normalize_flag_value,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ── BlockName ─────────────────────────────────────────────────────────

    #[test]
    fn valid_block_names_pass() {
        for name in &["hero-banner", "product_grid", "footer2", "MyBlock"] {
            assert!(BlockName::parse(*name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_block_name_is_invalid() {
        assert!(matches!(
            BlockName::parse(""),
            Err(DomainError::InvalidBlockName { .. })
        ));
    }

    #[test]
    fn dotfile_block_name_is_invalid() {
        assert!(BlockName::parse(".hidden").is_err());
    }

    #[test]
    fn path_separator_in_block_name_is_invalid() {
        assert!(BlockName::parse("a/b").is_err());
        assert!(BlockName::parse("a\\b").is_err());
    }

    #[test]
    fn block_name_rejects_spaces() {
        let err = BlockName::parse("hero banner").unwrap_err();
        assert!(err.to_string().contains("' ' is not allowed"));
    }

    #[test]
    fn block_name_case_renderings() {
        let name = BlockName::parse("Hero_banner-v2").unwrap();
        assert_eq!(name.kebab(), "hero-banner-v2");
        assert_eq!(name.snake(), "hero_banner_v2");
        assert_eq!(name.pascal(), "HeroBannerV2");
    }

    // ── Category ──────────────────────────────────────────────────────────

    #[test]
    fn category_label_is_kept_verbatim() {
        assert_eq!(Category::new(" Widgets ").unwrap().as_str(), " Widgets ");
    }

    #[test]
    fn blank_category_is_rejected() {
        assert_eq!(Category::new("   "), Err(DomainError::EmptyCategory));
    }

    // ── TogglePublic ──────────────────────────────────────────────────────

    #[test]
    fn toggle_absent_means_unchanged() {
        assert_eq!(TogglePublic::from_flag(None), Ok(TogglePublic::Unchanged));
    }

    #[test]
    fn toggle_without_value_means_toggle() {
        assert_eq!(TogglePublic::from_flag(Some(None)), Ok(TogglePublic::Toggle));
    }

    #[test]
    fn toggle_with_boolean_values() {
        assert_eq!(
            TogglePublic::from_flag(Some(Some("true"))),
            Ok(TogglePublic::Toggle)
        );
        assert_eq!(
            TogglePublic::from_flag(Some(Some("No"))),
            Ok(TogglePublic::Unchanged)
        );
    }

    #[test]
    fn toggle_with_garbage_is_error() {
        assert!(matches!(
            TogglePublic::from_flag(Some(Some("maybe"))),
            Err(DomainError::InvalidToggle { .. })
        ));
    }

    // ── normalize_flag_value ──────────────────────────────────────────────

    #[test]
    fn unset_and_valueless_flags_normalise_to_none() {
        assert_eq!(normalize_flag_value(None), None);
        assert_eq!(normalize_flag_value(Some(None)), None);
        assert_eq!(normalize_flag_value(Some(Some("  ".into()))), None);
    }

    #[test]
    fn flag_value_is_kept_verbatim() {
        assert_eq!(
            normalize_flag_value(Some(Some(" hero ".into()))),
            Some(" hero ".to_string())
        );
    }

    // ── secrets ───────────────────────────────────────────────────────────

    #[test]
    fn secrets_are_redacted_in_debug() {
        let creds = Credentials::new("ada", "hunter2");
        assert!(!format!("{creds:?}").contains("hunter2"));

        let session = Session::new("ada", SessionToken::new("tok-123"));
        assert!(!format!("{session:?}").contains("tok-123"));
    }

    // ── ProjectStructure ──────────────────────────────────────────────────

    #[test]
    fn empty_structure_is_invalid() {
        let s = ProjectStructure::new("out");
        assert!(matches!(s.validate(), Err(DomainError::InvalidStructure(_))));
    }

    #[test]
    fn duplicate_paths_are_rejected() {
        let s = ProjectStructure::new("out")
            .with_file("README.md", "a")
            .with_file("README.md", "b");
        assert!(matches!(s.validate(), Err(DomainError::DuplicatePath { .. })));
    }

    #[test]
    fn absolute_paths_are_rejected() {
        let s = ProjectStructure::new("out").with_file("/etc/passwd", "x");
        assert!(matches!(
            s.validate(),
            Err(DomainError::AbsolutePathNotAllowed { .. })
        ));
    }

    // ── RenderContext ─────────────────────────────────────────────────────

    #[test]
    fn render_context_substitutes_all_variants() {
        let ctx = RenderContext::new(&BlockName::parse("hero-banner").unwrap());
        let out = ctx.render("{{BLOCK_NAME}} {{ BLOCK_NAME_PASCAL }} {{BLOCK_NAME_SNAKE}}");
        assert_eq!(out, "hero-banner HeroBanner hero_banner");
    }

    #[test]
    fn render_context_leaves_unknown_keys() {
        let ctx = RenderContext::new(&BlockName::parse("x").unwrap());
        assert_eq!(ctx.render("{{OTHER}}"), "{{OTHER}}");
        assert_eq!(ctx.get("BLOCK_NAME_KEBAB"), Some("x"));
    }

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<_> = CommandKind::ALL.iter().map(|c| c.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CommandKind::ALL.len());
    }
}
