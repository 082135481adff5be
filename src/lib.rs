//! component-tree - load a project's component tree with its measures
//!
//! This library loads the components below a base component (direct
//! children, leaves or all descendants) together with the requested
//! metric measures, synthesizes best values for files, and sorts and
//! paginates the result, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`component_tree`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use component_tree::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let fixture = FileSystemReader::new().read_store_fixture(Path::new("store.json"))?;
//! let store = InMemoryStore::new(fixture)?;
//! let user_session = StaticUserSession::anonymous().with_system_admin(true);
//!
//! // Create use case
//! let use_case = LoadComponentTreeUseCase::new(
//!     store,
//!     user_session,
//!     StderrProgressReporter::new(),
//!     QualifierRules::default(),
//! );
//!
//! // Execute
//! let request = ComponentTreeRequest::builder()
//!     .base_component_key("my-project")
//!     .metric_keys(["ncloc", "coverage"])
//!     .build()?;
//! let data = use_case.execute(request)?;
//!
//! // Format output
//! let model = ComponentTreeReadModelBuilder::build(&data);
//! println!("{}", JsonFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod component_tree;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{NullProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::memory::{InMemoryStore, StoreFixture};
    pub use crate::adapters::outbound::security::StaticUserSession;
    pub use crate::application::dto::{ComponentTreeData, ComponentTreeRequest, OutputFormat};
    pub use crate::application::read_models::{
        ComponentTreeReadModel, ComponentTreeReadModelBuilder,
    };
    pub use crate::application::use_cases::LoadComponentTreeUseCase;
    pub use crate::component_tree::domain::{
        Component, ComponentWithSnapshotId, Measure, MeasureTable, Metric, MetricValueType, Period,
        Snapshot, SortField, Strategy,
    };
    pub use crate::component_tree::policies::QualifierRules;
    pub use crate::ports::inbound::ComponentTreePort;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, TreeFormatter, TreeStore, UserSession,
    };
    pub use crate::shared::error::{ExitCode, TreeError};
    pub use crate::shared::Result;
}
