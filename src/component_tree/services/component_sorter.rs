use crate::component_tree::domain::{
    ComponentWithSnapshotId, MeasureTable, Metric, MetricValueType, SortField,
};
use std::cmp::Ordering;

/// ComponentSorter service ordering components in memory
///
/// Used when the order depends on measure values, which the store
/// cannot sort on.
pub struct ComponentSorter;

impl ComponentSorter {
    /// Sorts components on the given fields, in field order
    ///
    /// `asc` applies to every field. Missing values always go last,
    /// whatever the direction. The sort is stable and components equal
    /// on every field are finally ordered by name, ascending in both
    /// directions. On equal values name order therefore wins over the
    /// order the components came in; only same-named components keep it.
    ///
    /// # Arguments
    /// * `sort_metric` - Metric used for `SortField::Metric`; the field is ignored when None
    pub fn sort(
        mut components: Vec<ComponentWithSnapshotId>,
        sort_fields: &[SortField],
        asc: bool,
        sort_metric: Option<&Metric>,
        measures: &MeasureTable,
    ) -> Vec<ComponentWithSnapshotId> {
        components.sort_by(|a, b| {
            sort_fields
                .iter()
                .map(|field| Self::compare_on(*field, a, b, asc, sort_metric, measures))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
                .then_with(|| compare_text(Some(a.name()), Some(b.name()), true))
        });
        components
    }

    fn compare_on(
        field: SortField,
        a: &ComponentWithSnapshotId,
        b: &ComponentWithSnapshotId,
        asc: bool,
        sort_metric: Option<&Metric>,
        measures: &MeasureTable,
    ) -> Ordering {
        match field {
            SortField::Name => compare_text(Some(a.name()), Some(b.name()), asc),
            SortField::Path => compare_text(a.component().path(), b.component().path(), asc),
            SortField::Qualifier => compare_text(Some(a.qualifier()), Some(b.qualifier()), asc),
            SortField::Metric => match sort_metric {
                Some(metric) => Self::compare_metric(metric, a, b, asc, measures),
                None => Ordering::Equal,
            },
        }
    }

    fn compare_metric(
        metric: &Metric,
        a: &ComponentWithSnapshotId,
        b: &ComponentWithSnapshotId,
        asc: bool,
        measures: &MeasureTable,
    ) -> Ordering {
        let measure_a = measures.get(a.uuid(), metric.id());
        let measure_b = measures.get(b.uuid(), metric.id());

        if metric.value_type().is_numeric() {
            let value_a = measure_a.and_then(|m| m.value());
            let value_b = measure_b.and_then(|m| m.value());
            compare_nulls_last(value_a, value_b, asc, |x, y| x.total_cmp(y))
        } else if metric.value_type() == MetricValueType::Level {
            let level_a = measure_a.and_then(|m| m.data()).and_then(level_rank);
            let level_b = measure_b.and_then(|m| m.data()).and_then(level_rank);
            compare_nulls_last(level_a, level_b, asc, Ord::cmp)
        } else {
            compare_text(
                measure_a.and_then(|m| m.data()),
                measure_b.and_then(|m| m.data()),
                asc,
            )
        }
    }
}

/// Alert levels, from best to worst
fn level_rank(level: &str) -> Option<u8> {
    match level {
        "OK" => Some(0),
        "WARN" => Some(1),
        "ERROR" => Some(2),
        _ => None,
    }
}

fn compare_text(a: Option<&str>, b: Option<&str>, asc: bool) -> Ordering {
    compare_nulls_last(a, b, asc, |x, y| {
        x.to_lowercase()
            .cmp(&y.to_lowercase())
            .then_with(|| x.cmp(y))
    })
}

fn compare_nulls_last<T>(
    a: Option<T>,
    b: Option<T>,
    asc: bool,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = compare(&a, &b);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_tree::domain::{Component, Measure};

    fn component(id: i64, name: &str) -> ComponentWithSnapshotId {
        let component = Component::new(
            id,
            format!("uuid-{}", id),
            format!("key-{}", id),
            name.to_string(),
            "FIL".to_string(),
        )
        .unwrap()
        .with_path(format!("src/dir{}/{}", id, name));
        ComponentWithSnapshotId::new(component, 100 + id)
    }

    fn metric(value_type: MetricValueType) -> Metric {
        Metric::new(1, "sorted".into(), "Sorted".into(), value_type).unwrap()
    }

    fn names(components: &[ComponentWithSnapshotId]) -> Vec<&str> {
        components.iter().map(|c| c.name()).collect()
    }

    fn uuids(components: &[ComponentWithSnapshotId]) -> Vec<&str> {
        components.iter().map(|c| c.uuid()).collect()
    }

    fn numeric_table(values: &[(i64, f64)]) -> MeasureTable {
        let mut table = MeasureTable::new();
        for (id, value) in values {
            let measure = Measure::new(1, "sorted").with_value(*value);
            table.put(&format!("uuid-{}", id), measure);
        }
        table
    }

    fn sort_on_metric(
        components: Vec<ComponentWithSnapshotId>,
        asc: bool,
        metric: &Metric,
        table: &MeasureTable,
    ) -> Vec<ComponentWithSnapshotId> {
        ComponentSorter::sort(components, &[SortField::Metric], asc, Some(metric), table)
    }

    #[test]
    fn test_sort_numeric_ascending_and_descending() {
        let components = vec![component(1, "a"), component(2, "b"), component(3, "c")];
        let table = numeric_table(&[(1, 5.0), (2, 1.0), (3, 3.0)]);
        let metric = metric(MetricValueType::Int);

        let asc = sort_on_metric(components.clone(), true, &metric, &table);
        assert_eq!(names(&asc), vec!["b", "c", "a"]);

        let desc = sort_on_metric(components, false, &metric, &table);
        assert_eq!(names(&desc), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_missing_values_go_last_in_both_directions() {
        let components = vec![component(1, "a"), component(2, "b"), component(3, "c")];
        let table = numeric_table(&[(2, 1.0), (3, 3.0)]);
        let metric = metric(MetricValueType::Float);

        let asc = sort_on_metric(components.clone(), true, &metric, &table);
        assert_eq!(names(&asc), vec!["b", "c", "a"]);

        let desc = sort_on_metric(components, false, &metric, &table);
        assert_eq!(names(&desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_equal_values_keep_relative_order() {
        // Same name, so only stability decides
        let components = vec![
            component(1, "Same.java"),
            component(2, "Same.java"),
            component(3, "Other.java"),
        ];
        let table = numeric_table(&[(1, 2.0), (2, 2.0), (3, 9.0)]);
        let metric = metric(MetricValueType::Int);

        let sorted = sort_on_metric(components, true, &metric, &table);

        assert_eq!(uuids(&sorted), vec!["uuid-1", "uuid-2", "uuid-3"]);
    }

    #[test]
    fn test_equal_values_break_ties_by_name() {
        let components = vec![
            component(1, "zeta"),
            component(2, "alpha"),
            component(3, "mid"),
        ];
        let table = numeric_table(&[(1, 2.0), (2, 2.0), (3, 1.0)]);
        let metric = metric(MetricValueType::Int);

        let sorted = sort_on_metric(components, false, &metric, &table);

        assert_eq!(names(&sorted), vec!["alpha", "zeta", "mid"]);
    }

    #[test]
    fn test_name_order_wins_over_input_order_on_equal_values() {
        let components = vec![
            component(1, "zeta"),
            component(2, "beta"),
            component(3, "alpha"),
        ];
        let table = numeric_table(&[(1, 4.0), (2, 4.0), (3, 4.0)]);
        let metric = metric(MetricValueType::Int);

        let asc = sort_on_metric(components.clone(), true, &metric, &table);
        let desc = sort_on_metric(components, false, &metric, &table);

        assert_eq!(names(&asc), vec!["alpha", "beta", "zeta"]);
        assert_eq!(names(&desc), vec!["alpha", "beta", "zeta"]);
    }

    #[test]
    fn test_sort_level_metric() {
        let components = vec![
            component(1, "a"),
            component(2, "b"),
            component(3, "c"),
            component(4, "d"),
        ];
        let mut table = MeasureTable::new();
        table.put("uuid-1", Measure::new(1, "alert_status").with_data("ERROR"));
        table.put("uuid-2", Measure::new(1, "alert_status").with_data("OK"));
        table.put("uuid-3", Measure::new(1, "alert_status").with_data("WARN"));
        let metric = metric(MetricValueType::Level);

        let sorted = sort_on_metric(components, true, &metric, &table);

        assert_eq!(names(&sorted), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_sort_text_metric() {
        let components = vec![component(1, "a"), component(2, "b")];
        let mut table = MeasureTable::new();
        table.put("uuid-1", Measure::new(1, "version").with_data("beta"));
        table.put("uuid-2", Measure::new(1, "version").with_data("alpha"));
        let metric = metric(MetricValueType::String);

        let sorted = sort_on_metric(components, true, &metric, &table);

        assert_eq!(names(&sorted), vec!["b", "a"]);
    }

    #[test]
    fn test_compound_sort_metric_then_path() {
        let components = vec![component(3, "x"), component(1, "y"), component(2, "z")];
        let table = numeric_table(&[(1, 1.0), (2, 1.0), (3, 0.0)]);
        let metric = metric(MetricValueType::Int);

        let sorted = ComponentSorter::sort(
            components,
            &[SortField::Metric, SortField::Path],
            true,
            Some(&metric),
            &table,
        );

        assert_eq!(uuids(&sorted), vec!["uuid-3", "uuid-1", "uuid-2"]);
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let components = vec![
            component(1, "beta"),
            component(2, "Alpha"),
            component(3, "alpha2"),
        ];
        let table = MeasureTable::new();

        let sorted = ComponentSorter::sort(components, &[SortField::Name], true, None, &table);

        assert_eq!(names(&sorted), vec!["Alpha", "alpha2", "beta"]);
    }
}
