//! Builder for constructing ComponentTreeReadModel from loaded data
//!
//! This module transforms the use case result into the read model,
//! formatting measure values along the way.

use super::component_tree_read_model::{ComponentTreeReadModel, MetricView, PagingView, PeriodView};
use super::component_view::{ComponentView, MeasureView, PeriodValueView};
use crate::application::dto::ComponentTreeData;
use crate::component_tree::domain::{Component, Measure, MeasureTable, Metric, Period};
use crate::component_tree::services::MeasureValueFormatter;
use std::collections::HashMap;

/// Builder for constructing ComponentTreeReadModel from ComponentTreeData
pub struct ComponentTreeReadModelBuilder;

impl ComponentTreeReadModelBuilder {
    /// Builds the read model of a loaded tree
    ///
    /// Components keep the order of the data. Each component lists its
    /// measures in metric order, skipping metrics it has no measure for.
    pub fn build(data: &ComponentTreeData) -> ComponentTreeReadModel {
        let base_component = Self::build_component(
            &data.base_component,
            &[],
            &[],
            &MeasureTable::new(),
            &HashMap::new(),
        );
        let components = data
            .components
            .iter()
            .map(|c| {
                Self::build_component(
                    c.component(),
                    &data.metrics,
                    &data.periods,
                    &data.measures,
                    &data.reference_component_uuids_by_id,
                )
            })
            .collect();

        ComponentTreeReadModel {
            base_component,
            components,
            paging: data.paging.map(|p| PagingView {
                page_index: p.page_index(),
                page_size: p.page_size(),
                total: p.total(),
            }),
            metrics: data.metrics.iter().map(Self::build_metric).collect(),
            periods: data.periods.iter().map(Self::build_period).collect(),
        }
    }

    fn build_component(
        component: &Component,
        metrics: &[Metric],
        periods: &[Period],
        measures: &MeasureTable,
        references: &HashMap<i64, String>,
    ) -> ComponentView {
        let measures = metrics
            .iter()
            .filter_map(|metric| {
                measures
                    .get(component.uuid(), metric.id())
                    .map(|measure| Self::build_measure(measure, metric, periods))
            })
            .collect();

        ComponentView {
            id: component.uuid().to_string(),
            key: component.key().to_string(),
            name: component.name().to_string(),
            long_name: component.long_name().map(str::to_string),
            qualifier: component.qualifier().to_string(),
            path: component.path().map(str::to_string),
            ref_id: component
                .copy_component_id()
                .and_then(|id| references.get(&id).cloned()),
            measures,
        }
    }

    fn build_measure(measure: &Measure, metric: &Metric, periods: &[Period]) -> MeasureView {
        let period_values = periods
            .iter()
            .filter_map(|period| {
                measure.variation(period.index).map(|variation| PeriodValueView {
                    index: period.index,
                    value: MeasureValueFormatter::format_variation(variation, metric),
                })
            })
            .collect();

        MeasureView {
            metric: metric.key().to_string(),
            value: MeasureValueFormatter::format_value(measure, metric),
            best_value: measure.is_best_value(),
            periods: period_values,
        }
    }

    fn build_metric(metric: &Metric) -> MetricView {
        MetricView {
            key: metric.key().to_string(),
            name: metric.name().to_string(),
            value_type: metric.value_type().as_str().to_string(),
            best_value: metric.best_value().map(|v| {
                let measure = Measure::new(metric.id(), metric.key()).with_value(v);
                MeasureValueFormatter::format_value(&measure, metric)
                    .unwrap_or_else(|| v.to_string())
            }),
        }
    }

    fn build_period(period: &Period) -> PeriodView {
        PeriodView {
            index: period.index,
            mode: period.mode.clone(),
            parameter: period.parameter.clone(),
            date: period.date.clone(),
        }
    }
}
