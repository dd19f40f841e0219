/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: inventory storage,
/// console output and report rendering.
pub mod outbound;
