//! Persisted state record and the persistence collaborator.

pub mod profile;
pub mod record;

pub use profile::Profile;
pub use record::{SaveRecord, SAVE_VERSION};

/// External sink called after every state-affecting action.
///
/// Fire-and-forget: last write wins and failures are the implementor's
/// concern.
pub trait Persist {
    fn persist(&mut self, record: &SaveRecord);
}

impl<F: FnMut(&SaveRecord)> Persist for F {
    fn persist(&mut self, record: &SaveRecord) {
        self(record)
    }
}

/// Discards every snapshot. Used by the simulator and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersist;

impl Persist for NoPersist {
    fn persist(&mut self, _record: &SaveRecord) {}
}
