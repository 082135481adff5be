use super::fixture::{MeasureRecord, MetricRecord, SnapshotRecord, StoreFixture};
use crate::component_tree::domain::{
    Component, ComponentTreeQuery, ComponentWithSnapshotId, Measure, Metric, MetricValueType,
    PeriodSlot, Snapshot, SortField,
};
use crate::ports::outbound::{
    ComponentRepository, MeasureRepository, MetricRepository, SnapshotRepository, TreeStore,
};
use crate::shared::Result;
use std::cell::Cell;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

/// Indexed content of a fixture, shared by every session
#[derive(Debug)]
struct StoreData {
    components: Vec<Component>,
    index_by_id: HashMap<i64, usize>,
    children_by_parent: HashMap<i64, Vec<i64>>,
    last_snapshots: HashMap<i64, Snapshot>,
    metrics: Vec<Metric>,
    measures: Vec<Measure>,
}

/// InMemoryStore adapter serving a store fixture
///
/// Implements the TreeStore port. Sessions share the fixture data and
/// the store counts the sessions currently open.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    data: Rc<StoreData>,
    open_sessions: Rc<Cell<usize>>,
}

impl InMemoryStore {
    /// Indexes a fixture
    ///
    /// # Errors
    /// Returns an error if records are duplicated, reference unknown
    /// components, or carry invalid values
    pub fn new(fixture: StoreFixture) -> Result<Self> {
        let mut components = Vec::with_capacity(fixture.components.len());
        let mut index_by_id = HashMap::new();
        let mut children_by_parent: HashMap<i64, Vec<i64>> = HashMap::new();
        let mut uuids = HashSet::new();
        let mut keys = HashSet::new();

        for record in fixture.components {
            if index_by_id.contains_key(&record.id) {
                anyhow::bail!("Duplicate component id {} in store fixture", record.id);
            }
            if !uuids.insert(record.uuid.clone()) {
                anyhow::bail!(
                    "Duplicate component uuid '{}' in store fixture",
                    record.uuid
                );
            }
            if !keys.insert(record.key.clone()) {
                anyhow::bail!("Duplicate component key '{}' in store fixture", record.key);
            }

            let mut component = Component::new(
                record.id,
                record.uuid,
                record.key,
                record.name,
                record.qualifier,
            )?;
            if let Some(long_name) = record.long_name {
                component = component.with_long_name(long_name);
            }
            if let Some(path) = record.path {
                component = component.with_path(path);
            }
            if let Some(project_uuid) = record.project_uuid {
                component = component.with_project_uuid(project_uuid);
            }
            if let Some(copy_id) = record.copy_component_id {
                component = component.with_copy_component_id(copy_id);
            }
            if let Some(parent_id) = record.parent_id {
                children_by_parent
                    .entry(parent_id)
                    .or_default()
                    .push(record.id);
            }

            index_by_id.insert(component.id(), components.len());
            components.push(component);
        }

        if let Some(orphan) = children_by_parent
            .keys()
            .find(|id| !index_by_id.contains_key(id))
        {
            anyhow::bail!(
                "Store fixture references unknown parent component {}",
                orphan
            );
        }

        let last_snapshots = Self::index_last_snapshots(fixture.snapshots, &index_by_id)?;
        let metrics = fixture
            .metrics
            .into_iter()
            .map(Self::to_metric)
            .collect::<Result<Vec<_>>>()?;
        let measures = Self::to_measures(fixture.measures, &metrics)?;

        Ok(Self {
            data: Rc::new(StoreData {
                components,
                index_by_id,
                children_by_parent,
                last_snapshots,
                metrics,
                measures,
            }),
            open_sessions: Rc::new(Cell::new(0)),
        })
    }

    /// Number of sessions not yet released
    pub fn open_sessions(&self) -> usize {
        self.open_sessions.get()
    }

    /// Keeps the last snapshot of each component, highest id winning
    fn index_last_snapshots(
        records: Vec<SnapshotRecord>,
        index_by_id: &HashMap<i64, usize>,
    ) -> Result<HashMap<i64, Snapshot>> {
        let mut last_snapshots: HashMap<i64, Snapshot> = HashMap::new();
        let mut snapshot_ids = HashSet::new();

        for record in records {
            if !snapshot_ids.insert(record.id) {
                anyhow::bail!("Duplicate snapshot id {} in store fixture", record.id);
            }
            if !index_by_id.contains_key(&record.component_id) {
                anyhow::bail!(
                    "Snapshot {} references unknown component {}",
                    record.id,
                    record.component_id
                );
            }
            if !record.last {
                continue;
            }

            let mut snapshot = Snapshot::new(record.id, record.component_id, record.qualifier);
            for period in record.periods {
                let mut slot = PeriodSlot::new();
                if let Some(mode) = period.mode {
                    slot = slot.with_mode(mode);
                }
                if let Some(parameter) = period.parameter {
                    slot = slot.with_parameter(parameter);
                }
                if let Some(date) = period.date {
                    slot = slot.with_date(date);
                }
                snapshot = snapshot.with_period(period.index, slot)?;
            }

            let newer = last_snapshots
                .get(&record.component_id)
                .is_none_or(|current| current.id() < snapshot.id());
            if newer {
                last_snapshots.insert(record.component_id, snapshot);
            }
        }

        Ok(last_snapshots)
    }

    fn to_metric(record: MetricRecord) -> Result<Metric> {
        let value_type: MetricValueType = record.value_type.parse()?;
        let metric = Metric::new(record.id, record.key, record.name, value_type)?;
        Ok(match record.best_value {
            Some(best_value) => metric.with_best_value(best_value, record.optimized_best_value),
            None => metric,
        })
    }

    fn to_measures(records: Vec<MeasureRecord>, metrics: &[Metric]) -> Result<Vec<Measure>> {
        let keys_by_id: HashMap<i32, &str> = metrics.iter().map(|m| (m.id(), m.key())).collect();

        records
            .into_iter()
            .map(|record| {
                let key = keys_by_id.get(&record.metric_id).ok_or_else(|| {
                    anyhow::anyhow!(
                        "Measure of snapshot {} references unknown metric {}",
                        record.snapshot_id,
                        record.metric_id
                    )
                })?;
                let mut measure =
                    Measure::new(record.metric_id, *key).with_snapshot_id(record.snapshot_id);
                if let Some(value) = record.value {
                    measure = measure.with_value(value);
                }
                if let Some(data) = record.data {
                    measure = measure.with_data(data);
                }
                for (index, variation) in record.variations {
                    measure.set_variation(index, variation)?;
                }
                Ok(measure)
            })
            .collect()
    }
}

impl TreeStore for InMemoryStore {
    type Session = InMemorySession;

    fn open_session(&self) -> Result<InMemorySession> {
        self.open_sessions.set(self.open_sessions.get() + 1);
        Ok(InMemorySession {
            data: Rc::clone(&self.data),
            open_sessions: Rc::clone(&self.open_sessions),
        })
    }
}

/// Session on an InMemoryStore, released when dropped
#[derive(Debug)]
pub struct InMemorySession {
    data: Rc<StoreData>,
    open_sessions: Rc<Cell<usize>>,
}

impl Drop for InMemorySession {
    fn drop(&mut self) {
        let open = self.open_sessions.get();
        self.open_sessions.set(open.saturating_sub(1));
    }
}

impl InMemorySession {
    fn component(&self, id: i64) -> Option<&Component> {
        self.data
            .index_by_id
            .get(&id)
            .map(|&index| &self.data.components[index])
    }

    fn children_ids(&self, id: i64) -> &[i64] {
        self.data
            .children_by_parent
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn base_component_id(query: &ComponentTreeQuery) -> i64 {
        query.base_snapshot().component_id()
    }

    /// Descendants of a component, breadth first
    fn descendant_ids(&self, id: i64) -> Vec<i64> {
        let mut visited = HashSet::from([id]);
        let mut queue: VecDeque<i64> = self.children_ids(id).iter().copied().collect();
        let mut descendants = Vec::new();

        while let Some(current) = queue.pop_front() {
            if !visited.insert(current) {
                continue;
            }
            descendants.push(current);
            queue.extend(self.children_ids(current).iter().copied());
        }

        descendants
    }

    /// Candidates matching the query filters, each with its last snapshot
    fn matching(&self, ids: &[i64], query: &ComponentTreeQuery) -> Vec<ComponentWithSnapshotId> {
        let search = query.name_or_key_query().map(str::to_lowercase);

        ids.iter()
            .filter_map(|&id| {
                let component = self.component(id)?;
                let snapshot = self.data.last_snapshots.get(&id)?;
                Some(ComponentWithSnapshotId::new(
                    component.clone(),
                    snapshot.id(),
                ))
            })
            .filter(|c| {
                query
                    .qualifiers()
                    .is_none_or(|qualifiers| qualifiers.iter().any(|q| q == c.qualifier()))
            })
            .filter(|c| {
                search.as_deref().is_none_or(|search| {
                    c.name().to_lowercase().contains(search)
                        || c.component().key().to_lowercase().contains(search)
                })
            })
            .collect()
    }

    fn sorted_page(
        &self,
        mut components: Vec<ComponentWithSnapshotId>,
        query: &ComponentTreeQuery,
    ) -> Vec<ComponentWithSnapshotId> {
        components.sort_by(|a, b| {
            query
                .sort_fields()
                .iter()
                .map(|field| compare_field(*field, a.component(), b.component(), query.asc()))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.component().id().cmp(&b.component().id()))
        });

        components
            .into_iter()
            .skip(query.offset())
            .take(query.page_size())
            .collect()
    }
}

/// Column ordering; absent values go last in both directions
fn compare_field(field: SortField, a: &Component, b: &Component, asc: bool) -> Ordering {
    let (left, right) = match field {
        SortField::Name => (Some(a.name()), Some(b.name())),
        SortField::Path => (a.path(), b.path()),
        SortField::Qualifier => (Some(a.qualifier()), Some(b.qualifier())),
        SortField::Metric => return Ordering::Equal,
    };

    match (left, right) {
        (Some(l), Some(r)) => {
            let ordering = l.to_lowercase().cmp(&r.to_lowercase());
            if asc {
                ordering
            } else {
                ordering.reverse()
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl ComponentRepository for InMemorySession {
    fn select_by_uuid(&self, uuid: &str) -> Result<Option<Component>> {
        let components = &self.data.components;
        Ok(components.iter().find(|c| c.uuid() == uuid).cloned())
    }

    fn select_by_key(&self, key: &str) -> Result<Option<Component>> {
        let components = &self.data.components;
        Ok(components.iter().find(|c| c.key() == key).cloned())
    }

    fn select_by_ids(&self, ids: &[i64]) -> Result<Vec<Component>> {
        let components = ids.iter().filter_map(|&id| self.component(id).cloned());
        Ok(components.collect())
    }

    fn select_direct_children(
        &self,
        query: &ComponentTreeQuery,
    ) -> Result<Vec<ComponentWithSnapshotId>> {
        let ids = self.children_ids(Self::base_component_id(query)).to_vec();
        Ok(self.sorted_page(self.matching(&ids, query), query))
    }

    fn count_direct_children(&self, query: &ComponentTreeQuery) -> Result<usize> {
        let ids = self.children_ids(Self::base_component_id(query)).to_vec();
        Ok(self.matching(&ids, query).len())
    }

    fn select_all_children(
        &self,
        query: &ComponentTreeQuery,
    ) -> Result<Vec<ComponentWithSnapshotId>> {
        let ids = self.descendant_ids(Self::base_component_id(query));
        Ok(self.sorted_page(self.matching(&ids, query), query))
    }

    fn count_all_children(&self, query: &ComponentTreeQuery) -> Result<usize> {
        let ids = self.descendant_ids(Self::base_component_id(query));
        Ok(self.matching(&ids, query).len())
    }
}

impl SnapshotRepository for InMemorySession {
    fn select_last_snapshot_by_component_id(&self, component_id: i64) -> Result<Option<Snapshot>> {
        Ok(self.data.last_snapshots.get(&component_id).cloned())
    }
}

impl MetricRepository for InMemorySession {
    fn select_by_keys(&self, keys: &[String]) -> Result<Vec<Metric>> {
        Ok(keys
            .iter()
            .filter_map(|key| self.data.metrics.iter().find(|m| m.key() == key))
            .fold(Vec::new(), |mut metrics, metric| {
                if !metrics.iter().any(|m: &Metric| m.id() == metric.id()) {
                    metrics.push(metric.clone());
                }
                metrics
            }))
    }
}

impl MeasureRepository for InMemorySession {
    fn select_by_snapshot_ids_and_metric_ids(
        &self,
        snapshot_ids: &[i64],
        metric_ids: &[i32],
    ) -> Result<Vec<Measure>> {
        let snapshot_ids: HashSet<i64> = snapshot_ids.iter().copied().collect();
        let metric_ids: HashSet<i32> = metric_ids.iter().copied().collect();

        Ok(self
            .data
            .measures
            .iter()
            .filter(|m| m.snapshot_id().is_some_and(|id| snapshot_ids.contains(&id)))
            .filter(|m| metric_ids.contains(&m.metric_id()))
            .cloned()
            .collect())
    }
}
