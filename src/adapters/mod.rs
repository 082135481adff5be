/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// the fixture-backed store, the user session, console output,
/// filesystem I/O and the output formatters.
pub mod outbound;
