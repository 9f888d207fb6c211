//! Block directory on the local filesystem.
//!
//! Layout expected by `publish` and `update`:
//!
//! ```text
//! <root>/
//! ├── dist/                 build output, packed into <root-name>.tar.gz
//! ├── thumbnail.png         optional (.jpg / .jpeg also accepted)
//! └── .element-block.toml   written after the first publish
//! ```

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use flate2::{Compression, write::GzEncoder};
use tracing::{debug, instrument};
use walkdir::WalkDir;

use element_core::{
    application::{ApplicationError, ports::BlockWorkspace},
    domain::{BlockBundle, PublishedBlock, Thumbnail},
    error::{ElementError, ElementResult},
};

/// Publish record kept next to the block.
pub const RECORD_FILE: &str = ".element-block.toml";

const DIST_DIR: &str = "dist";
const THUMBNAIL_CANDIDATES: &[&str] = &["thumbnail.png", "thumbnail.jpg", "thumbnail.jpeg"];

#[derive(Debug, Clone)]
pub struct LocalBlockWorkspace {
    root: PathBuf,
}

impl LocalBlockWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn record_path(&self) -> PathBuf {
        self.root.join(RECORD_FILE)
    }

    fn archive_name(&self) -> String {
        let stem = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "block".to_owned());
        format!("{stem}.tar.gz")
    }

    fn pack_dist(&self, dist: &Path) -> ElementResult<Vec<u8>> {
        let encoder = GzEncoder::new(Vec::new(), Compression::best());
        let mut archive = tar::Builder::new(encoder);
        archive.follow_symlinks(false);

        archive
            .append_dir_all(DIST_DIR, dist)
            .map_err(|e| bundle_error(format!("could not pack {}: {e}", dist.display())))?;

        archive
            .into_inner()
            .and_then(|encoder| encoder.finish())
            .map_err(|e| bundle_error(format!("could not compress bundle: {e}")))
    }

    fn find_thumbnail(&self) -> ElementResult<Option<Thumbnail>> {
        for candidate in THUMBNAIL_CANDIDATES {
            let path = self.root.join(candidate);
            match fs::read(&path) {
                Ok(bytes) => {
                    debug!(file = candidate, size = bytes.len(), "Found thumbnail");
                    return Ok(Some(Thumbnail {
                        file_name: (*candidate).to_owned(),
                        bytes,
                    }));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(bundle_error(format!("could not read {candidate}: {e}"))),
            }
        }
        Ok(None)
    }
}

impl BlockWorkspace for LocalBlockWorkspace {
    fn root(&self) -> PathBuf {
        self.root.clone()
    }

    #[instrument(skip_all, fields(root = %self.root.display()))]
    fn bundle(&self) -> ElementResult<BlockBundle> {
        let dist = self.root.join(DIST_DIR);
        if !dist.is_dir() {
            return Err(bundle_error(format!("{} does not exist", dist.display())));
        }

        let files = WalkDir::new(&dist)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .count();
        if files == 0 {
            return Err(bundle_error(format!("{} is empty", dist.display())));
        }

        let archive = self.pack_dist(&dist)?;
        debug!(files, bytes = archive.len(), "Packed dist");

        Ok(BlockBundle {
            archive_name: self.archive_name(),
            archive,
            thumbnail: self.find_thumbnail()?,
        })
    }

    fn read_record(&self) -> ElementResult<Option<PublishedBlock>> {
        let path = self.record_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(record_error(&path, e.to_string())),
        };

        toml::from_str(&raw)
            .map(Some)
            .map_err(|e| record_error(&path, format!("malformed publish record: {e}")))
    }

    fn write_record(&self, block: &PublishedBlock) -> ElementResult<()> {
        let path = self.record_path();
        let raw = toml::to_string(block).map_err(|e| record_error(&path, e.to_string()))?;
        fs::write(&path, raw).map_err(|e| record_error(&path, e.to_string()))
    }
}

fn bundle_error(reason: String) -> ElementError {
    ApplicationError::BundleFailed { reason }.into()
}

fn record_error(path: &Path, reason: String) -> ElementError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
