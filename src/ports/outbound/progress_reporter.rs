/// ProgressReporter port for diagnostic output while loading a tree
///
/// The use case reports each pipeline stage through this port so that
/// adapters decide where (and whether) the messages go.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports that `current` of `total` pipeline stages are done
    ///
    /// # Arguments
    /// * `message` - Optional name of the stage being entered
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports the end of an operation
    fn report_completion(&self, message: &str);
}
