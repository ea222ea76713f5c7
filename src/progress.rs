// src/progress.rs
use std::path::Path;

use crate::error::Error;

/// Lightweight progress reporting for batch runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of recap files.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One recap parsed and written.
    fn item_done(&mut self, _path: &Path) {}

    /// One recap abandoned; the batch goes on.
    fn item_failed(&mut self, _path: &Path, _err: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
