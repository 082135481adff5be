use crate::component_tree::domain::Snapshot;
use crate::shared::Result;

/// SnapshotRepository port for analysis snapshots
pub trait SnapshotRepository {
    /// Selects the last snapshot of a component, if it was ever analyzed
    fn select_last_snapshot_by_component_id(&self, component_id: i64) -> Result<Option<Snapshot>>;
}
