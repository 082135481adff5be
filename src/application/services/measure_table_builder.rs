use crate::component_tree::domain::{ComponentWithSnapshotId, MeasureTable, Metric, Period};
use crate::component_tree::policies::QualifierRules;
use crate::component_tree::services::BestValueFiller;
use crate::ports::outbound::MeasureRepository;
use crate::shared::Result;
use std::collections::{HashMap, HashSet};

/// MeasureTableBuilder assembling the (component, metric) measure table
pub struct MeasureTableBuilder;

impl MeasureTableBuilder {
    /// Loads the measures of the components in one batch, then fills best values
    ///
    /// Measures of snapshots or metrics outside the requested sets are ignored.
    pub fn build<R: MeasureRepository + ?Sized>(
        repository: &R,
        components: &[ComponentWithSnapshotId],
        metrics: &[Metric],
        periods: &[Period],
        rules: &QualifierRules,
    ) -> Result<MeasureTable> {
        let uuids_by_snapshot_id: HashMap<i64, &str> = components
            .iter()
            .map(|c| (c.snapshot_id(), c.uuid()))
            .collect();
        let metric_ids: HashSet<i32> = metrics.iter().map(Metric::id).collect();

        let mut snapshot_ids: Vec<i64> = uuids_by_snapshot_id.keys().copied().collect();
        snapshot_ids.sort_unstable();
        let mut metric_id_list: Vec<i32> = metric_ids.iter().copied().collect();
        metric_id_list.sort_unstable();

        let mut table = MeasureTable::with_capacity(components.len() * metrics.len());
        if !snapshot_ids.is_empty() && !metric_id_list.is_empty() {
            let measures = repository
                .select_by_snapshot_ids_and_metric_ids(&snapshot_ids, &metric_id_list)?;
            for measure in measures {
                let uuid = measure
                    .snapshot_id()
                    .and_then(|id| uuids_by_snapshot_id.get(&id).copied());
                if let Some(uuid) = uuid {
                    if metric_ids.contains(&measure.metric_id()) {
                        table.put(uuid, measure);
                    }
                }
            }
        }

        BestValueFiller::fill(&mut table, components, metrics, periods, rules)?;
        Ok(table)
    }
}
