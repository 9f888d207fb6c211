//! The on-disk block being published.

mod local;

pub use local::{LocalBlockWorkspace, RECORD_FILE};
