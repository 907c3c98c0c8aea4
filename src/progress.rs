// src/progress.rs
/// Lightweight progress reporting used by batch runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of documents.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One document processed (index into the input list).
    fn item_done(&mut self, _index: usize, _name: &str) {}

    /// One document failed; the batch keeps going.
    fn item_failed(&mut self, _index: usize, _name: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
