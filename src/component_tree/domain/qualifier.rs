//! Qualifiers tag the kind of a component (project, directory, file...).

pub const VIEW: &str = "VW";
pub const SUBVIEW: &str = "SVW";
pub const PROJECT: &str = "TRK";
pub const MODULE: &str = "BRC";
pub const DIRECTORY: &str = "DIR";
pub const FILE: &str = "FIL";
pub const UNIT_TEST_FILE: &str = "UTS";

/// Maximum qualifier length accepted from configuration
const MAX_QUALIFIER_LENGTH: usize = 10;

/// Returns true if the text is usable as a qualifier:
/// non-empty, at most 10 chars, uppercase ASCII letters, digits or '_'.
pub fn is_valid_qualifier(qualifier: &str) -> bool {
    !qualifier.is_empty()
        && qualifier.len() <= MAX_QUALIFIER_LENGTH
        && qualifier
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
