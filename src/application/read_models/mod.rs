//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of a loaded component tree.

pub mod component_tree_read_model;
pub mod component_tree_read_model_builder;
pub mod component_view;

pub use component_tree_read_model::{ComponentTreeReadModel, MetricView, PagingView, PeriodView};
pub use component_tree_read_model_builder::ComponentTreeReadModelBuilder;
pub use component_view::{ComponentView, MeasureView, PeriodValueView};
