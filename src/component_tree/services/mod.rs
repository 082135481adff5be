mod best_value_filler;
mod component_sorter;
mod measure_value_formatter;
mod paginator;
mod period_extractor;

pub use best_value_filler::BestValueFiller;
pub use component_sorter::ComponentSorter;
pub use measure_value_formatter::MeasureValueFormatter;
pub use paginator::{Paginator, Paging};
pub use period_extractor::PeriodExtractor;
