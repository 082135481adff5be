use crate::component_tree::domain::{Measure, Metric, MetricValueType};

/// MeasureValueFormatter renders measure values according to the metric type
pub struct MeasureValueFormatter;

impl MeasureValueFormatter {
    /// Formats the value of a measure
    ///
    /// Numeric types use the numeric value, other types the text data.
    pub fn format_value(measure: &Measure, metric: &Metric) -> Option<String> {
        if metric.value_type().is_numeric() {
            measure
                .value()
                .map(|value| Self::format_numeric(value, metric.value_type()))
        } else {
            measure.data().map(String::from)
        }
    }

    /// Formats a period variation; variations are always numeric
    pub fn format_variation(variation: f64, metric: &Metric) -> String {
        match metric.value_type() {
            MetricValueType::Bool => Self::format_numeric(variation, MetricValueType::Int),
            other if other.is_numeric() => Self::format_numeric(variation, other),
            _ => Self::format_numeric(variation, MetricValueType::Float),
        }
    }

    fn format_numeric(value: f64, value_type: MetricValueType) -> String {
        match value_type {
            MetricValueType::Bool => (value == 1.0).to_string(),
            MetricValueType::Int
            | MetricValueType::Millisec
            | MetricValueType::WorkDur
            | MetricValueType::Rating => format!("{}", value.round() as i64),
            _ => format!("{:.1}", value),
        }
    }
}
