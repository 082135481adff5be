use crate::application::read_models::{
    ComponentTreeReadModel, ComponentView, MeasureView, MetricView, PagingView, PeriodView,
};
use crate::ports::outbound::TreeFormatter;
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Response<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    paging: Option<Paging>,
    base_component: Component<'a>,
    components: Vec<Component<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    metrics: Vec<Metric<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    periods: Vec<Period<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Paging {
    page_index: usize,
    page_size: usize,
    total: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Component<'a> {
    id: &'a str,
    key: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    long_name: Option<&'a str>,
    qualifier: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ref_id: Option<&'a str>,
    measures: Vec<Measure<'a>>,
}

#[derive(Debug, Serialize)]
struct Measure<'a> {
    metric: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    periods: Vec<PeriodValue<'a>>,
}

#[derive(Debug, Serialize)]
struct PeriodValue<'a> {
    index: usize,
    value: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metric<'a> {
    key: &'a str,
    name: &'a str,
    #[serde(rename = "type")]
    value_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_value: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Period<'a> {
    index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameter: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
}

/// JsonFormatter adapter rendering the tree as a web-service style document
///
/// This adapter implements the TreeFormatter port. Keys are camelCase and
/// absent values are omitted.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_paging(paging: &PagingView) -> Paging {
        Paging {
            page_index: paging.page_index,
            page_size: paging.page_size,
            total: paging.total,
        }
    }

    fn build_component(component: &ComponentView) -> Component<'_> {
        Component {
            id: &component.id,
            key: &component.key,
            name: &component.name,
            long_name: component.long_name.as_deref(),
            qualifier: &component.qualifier,
            path: component.path.as_deref(),
            ref_id: component.ref_id.as_deref(),
            measures: component.measures.iter().map(Self::build_measure).collect(),
        }
    }

    fn build_measure(measure: &MeasureView) -> Measure<'_> {
        Measure {
            metric: &measure.metric,
            value: measure.value.as_deref(),
            periods: measure
                .periods
                .iter()
                .map(|p| PeriodValue {
                    index: p.index,
                    value: &p.value,
                })
                .collect(),
        }
    }

    fn build_metric(metric: &MetricView) -> Metric<'_> {
        Metric {
            key: &metric.key,
            name: &metric.name,
            value_type: &metric.value_type,
            best_value: metric.best_value.as_deref(),
        }
    }

    fn build_period(period: &PeriodView) -> Period<'_> {
        Period {
            index: period.index,
            mode: period.mode.as_deref(),
            parameter: period.parameter.as_deref(),
            date: period.date.as_deref(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeFormatter for JsonFormatter {
    fn format(&self, model: &ComponentTreeReadModel) -> Result<String> {
        let response = Response {
            paging: model.paging.as_ref().map(Self::build_paging),
            base_component: Self::build_component(&model.base_component),
            components: model.components.iter().map(Self::build_component).collect(),
            metrics: model.metrics.iter().map(Self::build_metric).collect(),
            periods: model.periods.iter().map(Self::build_period).collect(),
        };

        serde_json::to_string_pretty(&response).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::PeriodValueView;
    use serde_json::Value;

    fn component(id: &str, name: &str, qualifier: &str) -> ComponentView {
        ComponentView {
            id: id.into(),
            key: format!("project:{}", name),
            name: name.into(),
            long_name: None,
            qualifier: qualifier.into(),
            path: None,
            ref_id: None,
            measures: vec![],
        }
    }

    fn create_test_read_model() -> ComponentTreeReadModel {
        let mut file = component("file-uuid", "A.java", "FIL");
        file.path = Some("src/A.java".into());
        file.measures = vec![
            MeasureView {
                metric: "coverage".into(),
                value: Some("87.3".into()),
                best_value: false,
                periods: vec![PeriodValueView {
                    index: 1,
                    value: "2.0".into(),
                }],
            },
            MeasureView {
                metric: "violations".into(),
                value: Some("0".into()),
                best_value: true,
                periods: vec![],
            },
        ];

        ComponentTreeReadModel {
            base_component: component("project-uuid", "Project", "TRK"),
            components: vec![file],
            paging: Some(PagingView {
                page_index: 1,
                page_size: 100,
                total: 1,
            }),
            metrics: vec![MetricView {
                key: "coverage".into(),
                name: "Coverage".into(),
                value_type: "PERCENT".into(),
                best_value: None,
            }],
            periods: vec![PeriodView {
                index: 1,
                mode: Some("previous_version".into()),
                parameter: None,
                date: Some("2016-01-03T10:49:50+0000".into()),
            }],
        }
    }

    #[test]
    fn test_format_structure() {
        let model = create_test_read_model();
        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["paging"]["pageIndex"], 1);
        assert_eq!(json["paging"]["total"], 1);
        assert_eq!(json["baseComponent"]["key"], "project:Project");
        assert_eq!(json["components"][0]["path"], "src/A.java");
        let coverage = &json["components"][0]["measures"][0];
        assert_eq!(coverage["value"], "87.3");
        assert_eq!(coverage["periods"][0]["value"], "2.0");
        assert_eq!(json["metrics"][0]["type"], "PERCENT");
        assert_eq!(json["periods"][0]["date"], "2016-01-03T10:49:50+0000");
    }

    #[test]
    fn test_best_value_flag_and_absent_fields_omitted() {
        let model = create_test_read_model();
        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        let best = &json["components"][0]["measures"][1];
        assert_eq!(best["value"], "0");
        assert!(best.get("bestValue").is_none());
        assert!(best.get("periods").is_none());
        assert!(json["components"][0].get("refId").is_none());
        assert!(json["periods"][0].get("parameter").is_none());
    }

    #[test]
    fn test_format_base_component_only() {
        let model = ComponentTreeReadModel {
            base_component: component("project-uuid", "Project", "TRK"),
            components: vec![],
            paging: None,
            metrics: vec![],
            periods: vec![],
        };

        let output = JsonFormatter::new().format(&model).unwrap();
        let json: Value = serde_json::from_str(&output).unwrap();

        assert!(json.get("paging").is_none());
        assert_eq!(json["components"], Value::Array(vec![]));
        assert!(json.get("metrics").is_none());
    }
}
