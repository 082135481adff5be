use crate::application::dto::{ComponentTreeData, ComponentTreeRequest};
use crate::shared::Result;

/// ComponentTreePort - Inbound port for loading a component tree
///
/// This port is the application's public API for the component tree
/// with measures. Transport adapters (CLI, HTTP) call it.
pub trait ComponentTreePort {
    /// Loads the components below a base component with their measures
    ///
    /// # Errors
    /// Returns an error if:
    /// - The base component cannot be found (NotFound)
    /// - The caller lacks browse rights on the project (InsufficientPrivileges)
    /// - A requested metric key does not exist (NotFound)
    /// - The store fails
    fn load_component_tree(&self, request: ComponentTreeRequest) -> Result<ComponentTreeData>;
}
