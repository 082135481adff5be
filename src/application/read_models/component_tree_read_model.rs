//! Component tree read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! a loaded page of the component tree in a presentation-ready format.

use super::component_view::ComponentView;

/// Main read model for a component tree page
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTreeReadModel {
    pub base_component: ComponentView,
    pub components: Vec<ComponentView>,
    /// Absent when the base component has no analysis
    pub paging: Option<PagingView>,
    pub metrics: Vec<MetricView>,
    pub periods: Vec<PeriodView>,
}

/// View representation of the pagination of the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingView {
    pub page_index: usize,
    pub page_size: usize,
    pub total: usize,
}

/// View representation of a requested metric
#[derive(Debug, Clone, PartialEq)]
pub struct MetricView {
    pub key: String,
    pub name: String,
    pub value_type: String,
    pub best_value: Option<String>,
}

/// View representation of a differential period of the base snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodView {
    pub index: usize,
    pub mode: Option<String>,
    pub parameter: Option<String>,
    pub date: Option<String>,
}
