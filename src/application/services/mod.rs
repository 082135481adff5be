/// Application services - steps of the component tree pipeline that talk to ports
mod component_fetcher;
mod component_finder;
mod measure_table_builder;
mod metric_resolver;
mod permission_gate;
mod query_builder;
mod reference_resolver;

pub use component_fetcher::{ComponentFetcher, ComponentsAndTotal};
pub use component_finder::ComponentFinder;
pub use measure_table_builder::MeasureTableBuilder;
pub use metric_resolver::MetricResolver;
pub use permission_gate::PermissionGate;
pub use query_builder::QueryBuilder;
pub use reference_resolver::ReferenceResolver;
