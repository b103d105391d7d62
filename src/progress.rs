// src/progress.rs
/// Lightweight progress reporting for batch lookups.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of codes.
    fn begin(&mut self, _total: usize) {}

    /// One code resolved to an extraction.
    fn item_done(&mut self, _code: &str) {}

    /// One code failed (bad shape, not found, source down).
    fn item_failed(&mut self, _code: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
