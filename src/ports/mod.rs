/// Ports module defining interfaces for hexagonal architecture
///
/// The core only drives outbound ports; the CLI calls use cases directly.
pub mod outbound;
