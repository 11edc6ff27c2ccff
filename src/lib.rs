//! exkit: small, self-contained data-transformation exercises.
//!
//! The [`domain`] layer holds the pure types (quaternions, the persistent
//! search tree, coin change, ...). [`application`] services add the one
//! piece of I/O, counting meaningful lines in a file, behind the
//! [`infrastructure::traits::FileSystem`] seam.

use std::path::Path;
use std::sync::Arc;

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

use crate::application::services::LineCountService;
use crate::application::ApplicationResult;
use crate::domain::DEFAULT_COMMENT_PREFIX;
use crate::infrastructure::traits::RealFileSystem;

/// Count non-blank lines in `path` that do not start with `#` once trimmed.
///
/// # Errors
///
/// Returns `ApplicationError::OperationFailed` if the file cannot be read.
pub fn count_meaningful_lines(path: impl AsRef<Path>) -> ApplicationResult<usize> {
    LineCountService::new(Arc::new(RealFileSystem), DEFAULT_COMMENT_PREFIX)
        .count_meaningful_lines(path.as_ref())
}
