//! Component view structs for read model
//!
//! These structs provide a flattened view of a component and its
//! formatted measures.

/// View representation of a component of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentView {
    /// Component uuid
    pub id: String,
    pub key: String,
    pub name: String,
    pub long_name: Option<String>,
    pub qualifier: String,
    pub path: Option<String>,
    /// Uuid of the component this one is a copy of
    pub ref_id: Option<String>,
    /// Measures in the order of the requested metrics
    pub measures: Vec<MeasureView>,
}

/// View representation of one measure, values already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureView {
    pub metric: String,
    pub value: Option<String>,
    /// Set when the value was substituted rather than measured
    pub best_value: bool,
    pub periods: Vec<PeriodValueView>,
}

/// Variation of a measure over one differential period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodValueView {
    pub index: usize,
    pub value: String,
}
