use crate::component_tree::domain::{Period, Snapshot, MAX_PERIOD_INDEX};
use chrono::{DateTime, Utc};

/// Date-time layout used for period dates, e.g. 2016-01-11T10:49:50+0000
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// PeriodExtractor service deriving comparison periods from a snapshot
pub struct PeriodExtractor;

impl PeriodExtractor {
    /// Extracts the dated periods of a snapshot, ordered by index
    ///
    /// Slots without a date are skipped, so the result has at most five
    /// entries with strictly increasing indexes.
    pub fn extract(snapshot: &Snapshot) -> Vec<Period> {
        (1..=MAX_PERIOD_INDEX)
            .filter_map(|index| {
                snapshot.period_date(index).map(|date| Period {
                    index,
                    mode: snapshot.period_mode(index).map(String::from),
                    parameter: snapshot.period_parameter(index).map(String::from),
                    date: Some(Self::format_date_time(date)),
                })
            })
            .collect()
    }

    pub fn format_date_time(date: DateTime<Utc>) -> String {
        date.format(DATE_TIME_FORMAT).to_string()
    }

    /// Period indexes, in the order of the period list
    pub fn indexes(periods: &[Period]) -> Vec<usize> {
        periods.iter().map(|p| p.index).collect()
    }
}
