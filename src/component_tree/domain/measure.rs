use crate::shared::Result;
use std::collections::HashMap;

/// Number of comparison periods a snapshot (and therefore a measure) can carry
pub const MAX_PERIOD_INDEX: usize = 5;

/// Measure - value of one metric for one component at one snapshot
///
/// Carries up to five period variations, addressed by period index 1..=5.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    metric_id: i32,
    metric_key: String,
    snapshot_id: Option<i64>,
    value: Option<f64>,
    data: Option<String>,
    variations: [Option<f64>; MAX_PERIOD_INDEX],
    best_value: bool,
}

impl Measure {
    pub fn new(metric_id: i32, metric_key: impl Into<String>) -> Self {
        Self {
            metric_id,
            metric_key: metric_key.into(),
            snapshot_id: None,
            value: None,
            data: None,
            variations: [None; MAX_PERIOD_INDEX],
            best_value: false,
        }
    }

    /// Builds a synthesized measure holding the metric's best value
    ///
    /// Every given period index gets a variation of 0.0.
    pub fn best_value(
        metric_id: i32,
        metric_key: &str,
        value: f64,
        period_indexes: &[usize],
    ) -> Result<Self> {
        let mut measure = Self::new(metric_id, metric_key).with_value(value);
        for &index in period_indexes {
            measure.set_variation(index, 0.0)?;
        }
        measure.best_value = true;
        Ok(measure)
    }

    pub fn with_snapshot_id(mut self, snapshot_id: i64) -> Self {
        self.snapshot_id = Some(snapshot_id);
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the variation for a period index in 1..=5
    pub fn set_variation(&mut self, period_index: usize, variation: f64) -> Result<()> {
        if !(1..=MAX_PERIOD_INDEX).contains(&period_index) {
            anyhow::bail!(
                "Period index must be between 1 and {} (got {})",
                MAX_PERIOD_INDEX,
                period_index
            );
        }
        self.variations[period_index - 1] = Some(variation);
        Ok(())
    }

    pub fn metric_id(&self) -> i32 {
        self.metric_id
    }

    pub fn metric_key(&self) -> &str {
        &self.metric_key
    }

    pub fn snapshot_id(&self) -> Option<i64> {
        self.snapshot_id
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Variation for a period index; None when unset or out of range
    pub fn variation(&self, period_index: usize) -> Option<f64> {
        if !(1..=MAX_PERIOD_INDEX).contains(&period_index) {
            return None;
        }
        self.variations[period_index - 1]
    }

    /// True when the measure was synthesized from the metric's best value
    pub fn is_best_value(&self) -> bool {
        self.best_value
    }
}

/// Sparse lookup of measures keyed by (component uuid, metric id)
///
/// Holds at most one measure per pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasureTable {
    measures: HashMap<(String, i32), Measure>,
}

impl MeasureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            measures: HashMap::with_capacity(capacity),
        }
    }

    /// Stores a measure, replacing any previous one for the same pair
    pub fn put(&mut self, component_uuid: &str, measure: Measure) -> Option<Measure> {
        self.measures
            .insert((component_uuid.to_string(), measure.metric_id()), measure)
    }

    /// Stores a measure only if the pair has none yet; returns whether it was stored
    pub fn insert_if_absent(&mut self, component_uuid: &str, measure: Measure) -> bool {
        let key = (component_uuid.to_string(), measure.metric_id());
        if self.measures.contains_key(&key) {
            return false;
        }
        self.measures.insert(key, measure);
        true
    }

    pub fn get(&self, component_uuid: &str, metric_id: i32) -> Option<&Measure> {
        self.measures.get(&(component_uuid.to_string(), metric_id))
    }

    pub fn contains(&self, component_uuid: &str, metric_id: i32) -> bool {
        self.get(component_uuid, metric_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// All measures of one component, ordered by metric id
    pub fn measures_of(&self, component_uuid: &str) -> Vec<&Measure> {
        let mut measures: Vec<&Measure> = self
            .measures
            .iter()
            .filter(|((uuid, _), _)| uuid == component_uuid)
            .map(|(_, measure)| measure)
            .collect();
        measures.sort_by_key(|m| m.metric_id());
        measures
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Measure)> {
        self.measures
            .iter()
            .map(|((uuid, _), measure)| (uuid.as_str(), measure))
    }
}
