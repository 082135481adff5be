/// Domain layer - component tree, metrics, measures and periods
///
/// Pure business logic with no I/O dependencies. Everything that
/// needs the store lives in the application layer.
pub mod domain;
pub mod policies;
pub mod services;
