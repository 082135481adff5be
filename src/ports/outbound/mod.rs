/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (store, user session, console, etc.).
pub mod component_repository;
pub mod formatter;
pub mod measure_repository;
pub mod metric_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_repository;
pub mod tree_store;
pub mod user_session;

pub use component_repository::ComponentRepository;
pub use formatter::TreeFormatter;
pub use measure_repository::MeasureRepository;
pub use metric_repository::MetricRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_repository::SnapshotRepository;
pub use tree_store::TreeStore;
pub use user_session::UserSession;
