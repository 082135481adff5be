use crate::component_tree::domain::{ComponentWithSnapshotId, Measure, MeasureTable, Metric, Period};
use crate::component_tree::policies::QualifierRules;
use crate::component_tree::services::PeriodExtractor;
use crate::shared::Result;

/// BestValueFiller service substituting best values for missing measures
///
/// Conditions for a best value measure:
/// - the component is a production file or a test file
/// - the metric is optimized for best value and has a best value
pub struct BestValueFiller;

impl BestValueFiller {
    /// Fills the gaps of the table for eligible component/metric pairs
    ///
    /// Real measurements are never overwritten, so running the filler
    /// twice leaves the table unchanged.
    ///
    /// # Returns
    /// Number of synthesized measures
    pub fn fill(
        table: &mut MeasureTable,
        components: &[ComponentWithSnapshotId],
        metrics: &[Metric],
        periods: &[Period],
        rules: &QualifierRules,
    ) -> Result<usize> {
        let period_indexes = PeriodExtractor::indexes(periods);
        let best_value_measures = metrics
            .iter()
            .filter(|m| m.is_eligible_for_best_value())
            .filter_map(|m| {
                m.best_value()
                    .map(|value| Measure::best_value(m.id(), m.key(), value, &period_indexes))
            })
            .collect::<Result<Vec<_>>>()?;
        if best_value_measures.is_empty() {
            return Ok(0);
        }

        let mut filled = 0;
        for component in components
            .iter()
            .filter(|c| rules.is_eligible_for_best_value(c.qualifier()))
        {
            for measure in &best_value_measures {
                if table.insert_if_absent(component.uuid(), measure.clone()) {
                    filled += 1;
                }
            }
        }

        Ok(filled)
    }
}
