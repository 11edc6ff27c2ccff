//! Meaningful line counting service
//!
//! Reads a text file through the filesystem abstraction and counts the
//! lines that are neither blank nor comments.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::count_meaningful;
use crate::infrastructure::traits::FileSystem;

/// Service for counting meaningful lines in files.
pub struct LineCountService {
    fs: Arc<dyn FileSystem>,
    comment_prefix: String,
}

impl LineCountService {
    /// Create a new line count service.
    pub fn new(fs: Arc<dyn FileSystem>, comment_prefix: impl Into<String>) -> Self {
        Self {
            fs,
            comment_prefix: comment_prefix.into(),
        }
    }

    pub fn comment_prefix(&self) -> &str {
        &self.comment_prefix
    }

    /// Count non-blank, non-comment lines in `path`.
    ///
    /// Fails with `OperationFailed` if the file cannot be read.
    #[instrument(level = "debug", skip(self))]
    pub fn count_meaningful_lines(&self, path: &Path) -> ApplicationResult<usize> {
        let content = self.fs.read_to_string(path).with_path_context("read", path)?;
        let count = count_meaningful(&content, &self.comment_prefix);
        debug!("count_meaningful_lines: {} lines in {}", count, path.display());
        Ok(count)
    }
}
