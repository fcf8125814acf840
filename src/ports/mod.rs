/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the infrastructure interfaces the
/// reporting core depends on. The use cases themselves are the inbound side.
pub mod outbound;
