mod qualifier_rules;

pub use qualifier_rules::{QualifierRules, ResourceType, DEFAULT_BEST_VALUE_QUALIFIERS};
