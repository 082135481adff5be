use crate::component_tree::domain::Measure;
use crate::shared::Result;

/// MeasureRepository port for raw measure rows
pub trait MeasureRepository {
    /// Selects the measures of the given snapshots for the given metrics
    ///
    /// Returned measures carry their snapshot id.
    fn select_by_snapshot_ids_and_metric_ids(
        &self,
        snapshot_ids: &[i64],
        metric_ids: &[i32],
    ) -> Result<Vec<Measure>>;
}
