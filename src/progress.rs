// src/progress.rs
use std::path::Path;

/// Lightweight progress reporting for batch runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to process.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one page is done, rendered or skipped.
    fn item_done(&mut self, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
