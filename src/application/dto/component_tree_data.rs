use crate::component_tree::domain::{
    Component, ComponentWithSnapshotId, MeasureTable, Metric, Period,
};
use crate::component_tree::services::Paging;
use std::collections::HashMap;

/// ComponentTreeData - response DTO of the component tree use case
///
/// Consumed by formatters. When the base component was never analyzed
/// only `base_component` is set and everything else is empty.
#[derive(Debug, Clone)]
pub struct ComponentTreeData {
    pub base_component: Component,
    /// Components of the requested page
    pub components: Vec<ComponentWithSnapshotId>,
    /// Total number of matching components, before pagination
    pub component_count: Option<usize>,
    pub paging: Option<Paging>,
    /// Measures keyed by (component uuid, metric id), best values included
    pub measures: MeasureTable,
    pub metrics: Vec<Metric>,
    pub periods: Vec<Period>,
    /// Uuids of the components referenced by copies, keyed by component id
    pub reference_component_uuids_by_id: HashMap<i64, String>,
}

impl ComponentTreeData {
    /// Result for a base component without any snapshot
    pub fn without_snapshot(base_component: Component) -> Self {
        Self {
            base_component,
            components: Vec::new(),
            component_count: None,
            paging: None,
            measures: MeasureTable::new(),
            metrics: Vec::new(),
            periods: Vec::new(),
            reference_component_uuids_by_id: HashMap::new(),
        }
    }

    pub fn metric_by_key(&self, key: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.key() == key)
    }
}
