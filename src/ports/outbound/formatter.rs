use crate::application::read_models::ComponentTreeReadModel;
use crate::shared::Result;

/// TreeFormatter port for rendering a loaded component tree
///
/// This port abstracts the output format (JSON, Markdown, etc.).
/// Formatters receive the read model, with measure values already formatted.
pub trait TreeFormatter {
    /// Formats the component tree
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &ComponentTreeReadModel) -> Result<String>;
}
