//! Published-block record and the bundle uploaded to the registry.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Thumbnails above this size are still uploaded, with a warning.
pub const RECOMMENDED_MAX_THUMBNAIL_BYTES: usize = 500 * 1024;

/// A block as known by the registry after publishing.
///
/// Persisted inside the block directory so that `update` knows which
/// registry entry to replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedBlock {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Screenshot shown in the registry listing.
#[derive(Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Thumbnail {
    pub fn exceeds_recommended_size(&self) -> bool {
        self.bytes.len() > RECOMMENDED_MAX_THUMBNAIL_BYTES
    }
}

impl fmt::Debug for Thumbnail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Thumbnail")
            .field("file_name", &self.file_name)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Packaged block content ready for upload.
#[derive(Clone, PartialEq, Eq)]
pub struct BlockBundle {
    pub archive_name: String,
    /// gzip-compressed tar of the block's build output.
    pub archive: Vec<u8>,
    pub thumbnail: Option<Thumbnail>,
}

impl fmt::Debug for BlockBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockBundle")
            .field("archive_name", &self.archive_name)
            .field("archive", &self.archive.len())
            .field("thumbnail", &self.thumbnail)
            .finish()
    }
}
