pub mod component;
pub mod measure;
pub mod metric;
pub mod qualifier;
pub mod snapshot;
pub mod tree_query;

pub use component::{Component, ComponentWithSnapshotId};
pub use measure::{Measure, MeasureTable, MAX_PERIOD_INDEX};
pub use metric::{Metric, MetricValueType};
pub use snapshot::{Period, PeriodSlot, Snapshot};
pub use tree_query::{ComponentTreeQuery, ComponentTreeQueryBuilder, SortField, Strategy};
