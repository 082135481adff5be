use crate::component_tree::domain::Metric;
use crate::ports::outbound::MetricRepository;
use crate::shared::error::TreeError;
use crate::shared::Result;

/// MetricResolver loading the metric definitions of a request
pub struct MetricResolver;

impl MetricResolver {
    /// Resolves every key to a metric definition
    ///
    /// # Errors
    /// NotFound naming the unknown keys, in request order
    pub fn resolve<R: MetricRepository + ?Sized>(
        repository: &R,
        keys: &[String],
    ) -> Result<Vec<Metric>> {
        let metrics = repository.select_by_keys(keys)?;

        let mut missing: Vec<&str> = Vec::new();
        for key in keys {
            if !metrics.iter().any(|m| m.key() == key) && !missing.contains(&key.as_str()) {
                missing.push(key);
            }
        }
        if !missing.is_empty() {
            return Err(TreeError::not_found(format!(
                "The following metric keys are not found: {}",
                missing.join(", ")
            ))
            .into());
        }

        Ok(metrics)
    }
}
