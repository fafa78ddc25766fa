// src/progress.rs
/// Lightweight progress reporting for a watch run.
/// Frontends implement this to surface per-category status to users.
pub trait Progress {
    /// Called once with the number of categories to fetch.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one category is finished, fetched or skipped.
    fn category_done(&mut self, _category_id: u32, _cards: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
