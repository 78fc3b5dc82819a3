// src/progress.rs
/// Progress reporting for long-running work (pack repair, full pipeline).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of cards that need a lookup.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A card's pack was looked up and written back.
    fn item_done(&mut self, _card_id: &str) {}

    /// A card's pack could not be resolved.
    fn item_failed(&mut self, _card_id: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
