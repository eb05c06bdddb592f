// src/progress.rs
/// Lightweight progress reporting for long-running operations (page parsing, saving).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of units (pages or items).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One unit was processed successfully.
    fn item_done(&mut self, _index: usize) {}

    /// One item could not be extracted and was left out.
    fn item_skipped(&mut self, _index: usize, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
