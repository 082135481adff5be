use super::{ComponentRepository, MeasureRepository, MetricRepository, SnapshotRepository};
use crate::shared::Result;

/// TreeStore port giving access to the persisted component store
///
/// A session is a scoped resource: it is acquired with `open_session`
/// and released when dropped, on success and failure paths alike.
/// All lookups on a session are batched.
pub trait TreeStore {
    /// Session type exposing the batch lookups
    type Session: ComponentRepository + SnapshotRepository + MetricRepository + MeasureRepository;

    /// Opens a new session on the store
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached
    fn open_session(&self) -> Result<Self::Session>;
}
