// src/progress.rs
/// Lightweight reporting used by the scrape/export run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per previewed row before the file is written.
    fn preview_row(&mut self, _row: &[String]) {}

    /// Called at the end with the total number of labeled rows produced.
    fn finish(&mut self, _total: usize) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
