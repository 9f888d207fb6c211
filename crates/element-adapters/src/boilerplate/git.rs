//! Boilerplate fetched from a git repository.
//!
//! The repository is shallow-cloned into a scratch directory, its `.git`
//! metadata is ignored, and every UTF-8 file (and every path) is rendered
//! through [`RenderContext`]. Binary files are copied verbatim.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use element_core::{
    application::{ApplicationError, ports::BoilerplateSource},
    domain::{BlockName, Permissions, ProjectStructure, RenderContext},
    error::ElementResult,
};

#[derive(Debug, Clone)]
pub struct GitBoilerplate {
    url: String,
    reference: Option<String>,
}

impl GitBoilerplate {
    pub fn new(url: impl Into<String>, reference: Option<String>) -> Self {
        Self {
            url: url.into(),
            reference,
        }
    }

    /// `--` keeps a url starting with `-` from being read as an option.
    fn clone_command(&self, dest: &Path) -> Command {
        let mut cmd = Command::new("git");
        cmd.args(["clone", "--depth", "1", "--quiet"]);
        if let Some(reference) = &self.reference {
            cmd.args(["--branch", reference]);
        }
        cmd.arg("--")
            .arg(&self.url)
            .arg(dest)
            .env("GIT_TERMINAL_PROMPT", "0");
        cmd
    }

    fn clone_into(&self, dest: &Path) -> ElementResult<()> {
        let mut cmd = self.clone_command(dest);

        debug!(url = %self.url, "Running git clone");
        let output = cmd.output().map_err(|e| unavailable(format!("could not run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(unavailable(format!(
                "git clone {} failed: {}",
                self.url,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl BoilerplateSource for GitBoilerplate {
    #[instrument(skip_all, fields(name = %name, url = %self.url))]
    fn render(&self, name: &BlockName, root: &Path) -> ElementResult<ProjectStructure> {
        let scratch = tempfile::tempdir()
            .map_err(|e| unavailable(format!("could not create scratch directory: {e}")))?;
        let checkout = scratch.path().join("boilerplate");

        self.clone_into(&checkout)?;
        let structure = structure_from_dir(&checkout, name, root)?;

        info!(entries = structure.entry_count(), "Boilerplate cloned");
        Ok(structure)
    }
}

/// Read a checked-out boilerplate into a [`ProjectStructure`].
pub(crate) fn structure_from_dir(
    source: &Path,
    name: &BlockName,
    root: &Path,
) -> ElementResult<ProjectStructure> {
    let ctx = RenderContext::new(name);
    let mut structure = ProjectStructure::new(root);

    let walker = WalkDir::new(source)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.file_name() != ".git");

    for entry in walker {
        let entry = entry.map_err(|e| unavailable(format!("could not read boilerplate: {e}")))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| unavailable(e.to_string()))?;
        let target = render_path(&ctx, relative);

        if entry.file_type().is_dir() {
            structure.add_directory(target);
        } else if entry.file_type().is_file() {
            let bytes = std::fs::read(entry.path())
                .map_err(|e| unavailable(format!("could not read {}: {e}", relative.display())))?;
            let content = match String::from_utf8(bytes) {
                Ok(text) => ctx.render(&text).into_bytes(),
                Err(binary) => binary.into_bytes(),
            };
            structure.add_file(target, content, permissions_of(entry.path()));
        }
    }

    Ok(structure)
}

fn render_path(ctx: &RenderContext, relative: &Path) -> PathBuf {
    PathBuf::from(ctx.render(&relative.to_string_lossy()))
}

#[cfg(unix)]
fn permissions_of(path: &Path) -> Permissions {
    use std::os::unix::fs::PermissionsExt;
    match std::fs::metadata(path) {
        Ok(meta) if meta.permissions().mode() & 0o111 != 0 => Permissions::executable(),
        _ => Permissions::default(),
    }
}

#[cfg(not(unix))]
fn permissions_of(_path: &Path) -> Permissions {
    Permissions::default()
}

fn unavailable(reason: String) -> element_core::error::ElementError {
    ApplicationError::BoilerplateUnavailable { reason }.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn checkout() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".git/objects")).unwrap();
        fs::write(dir.path().join(".git/HEAD"), "ref: refs/heads/main").unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        fs::write(
            dir.path().join("src/{{BLOCK_NAME_PASCAL}}.js"),
            "export const {{BLOCK_NAME_PASCAL}} = 1;",
        )
        .unwrap();
        fs::write(dir.path().join("logo.png"), [0x89, b'P', b'N', b'G', 0xff, 0xfe]).unwrap();
        dir
    }

    #[test]
    fn renders_text_and_paths_and_skips_git() {
        let dir = checkout();
        let name = BlockName::parse("hero-banner").unwrap();
        let structure = structure_from_dir(dir.path(), &name, Path::new("/work/hero-banner")).unwrap();

        let paths: Vec<_> = structure.entries().iter().map(|e| e.path().clone()).collect();
        assert!(paths.iter().all(|p| !p.starts_with(".git")));
        assert!(paths.contains(&PathBuf::from("src/HeroBanner.js")));

        let js = structure
            .files()
            .find(|f| f.path == Path::new("src/HeroBanner.js"))
            .unwrap();
        assert_eq!(js.content, b"export const HeroBanner = 1;");
    }

    #[test]
    fn binary_files_are_copied_verbatim() {
        let dir = checkout();
        let name = BlockName::parse("hero").unwrap();
        let structure = structure_from_dir(dir.path(), &name, Path::new("/work/hero")).unwrap();

        let logo = structure
            .files()
            .find(|f| f.path == Path::new("logo.png"))
            .unwrap();
        assert_eq!(logo.content, vec![0x89, b'P', b'N', b'G', 0xff, 0xfe]);
    }

    #[test]
    fn clone_url_follows_option_terminator() {
        let source = GitBoilerplate::new("--upload-pack=touch owned", Some("main".into()));
        let cmd = source.clone_command(Path::new("/scratch/boilerplate"));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().into_owned()).collect();

        assert_eq!(
            args,
            [
                "clone",
                "--depth",
                "1",
                "--quiet",
                "--branch",
                "main",
                "--",
                "--upload-pack=touch owned",
                "/scratch/boilerplate",
            ]
        );
    }

    #[test]
    fn unreachable_repository_is_unavailable() {
        let missing = tempfile::tempdir().unwrap().path().join("no-such-repo");
        let source = GitBoilerplate::new(missing.to_string_lossy(), None);
        let name = BlockName::parse("hero").unwrap();

        let err = source.render(&name, Path::new("/work/hero")).unwrap_err();
        assert!(matches!(
            err,
            element_core::error::ElementError::Application(
                ApplicationError::BoilerplateUnavailable { .. }
            )
        ));
    }
}
