/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod component_tree_data;
mod component_tree_request;
mod output_format;

pub use component_tree_data::ComponentTreeData;
pub use component_tree_request::{
    ComponentTreeRequest, ComponentTreeRequestBuilder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    MIN_QUERY_LENGTH,
};
pub use output_format::OutputFormat;
