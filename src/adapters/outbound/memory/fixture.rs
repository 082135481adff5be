//! Serialized shape of a store fixture
//!
//! A fixture is a JSON document with four record lists. Keys are camelCase
//! and every optional field may be omitted.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreFixture {
    #[serde(default)]
    pub components: Vec<ComponentRecord>,
    #[serde(default)]
    pub snapshots: Vec<SnapshotRecord>,
    #[serde(default)]
    pub metrics: Vec<MetricRecord>,
    #[serde(default)]
    pub measures: Vec<MeasureRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRecord {
    pub id: i64,
    pub uuid: String,
    pub key: String,
    pub name: String,
    pub qualifier: String,
    pub long_name: Option<String>,
    pub path: Option<String>,
    pub project_uuid: Option<String>,
    /// Id of the parent component; absent for roots
    pub parent_id: Option<i64>,
    /// Id of the component this one is a copy of
    pub copy_component_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotRecord {
    pub id: i64,
    pub component_id: i64,
    pub qualifier: String,
    /// Only the last snapshot of a component is ever returned
    #[serde(default = "default_last")]
    pub last: bool,
    #[serde(default)]
    pub periods: Vec<PeriodRecord>,
}

fn default_last() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    pub index: usize,
    pub mode: Option<String>,
    pub parameter: Option<String>,
    /// RFC 3339 timestamp
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub id: i32,
    pub key: String,
    pub name: String,
    /// INT, FLOAT, PERCENT, BOOL, STRING, MILLISEC, DATA, LEVEL, DISTRIB, RATING, WORK_DUR
    pub value_type: String,
    pub best_value: Option<f64>,
    #[serde(default)]
    pub optimized_best_value: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasureRecord {
    pub snapshot_id: i64,
    pub metric_id: i32,
    pub value: Option<f64>,
    pub data: Option<String>,
    /// Variation per period index
    #[serde(default)]
    pub variations: BTreeMap<usize, f64>,
}
