use crate::component_tree::domain::Metric;
use crate::shared::Result;

/// MetricRepository port for metric definitions
pub trait MetricRepository {
    /// Selects metrics by key; unknown keys are skipped
    fn select_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>>;
}
