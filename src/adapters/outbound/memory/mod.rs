/// In-memory store adapter backed by a JSON fixture
mod fixture;
mod in_memory_store;

pub use fixture::{
    ComponentRecord, MeasureRecord, MetricRecord, PeriodRecord, SnapshotRecord, StoreFixture,
};
pub use in_memory_store::{InMemorySession, InMemoryStore};
