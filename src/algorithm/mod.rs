/// Endpoint alignment and the local rotation search between neighbors
pub mod connection;
/// Breadth-first flow propagation from the gas tanks
pub mod propagation;

pub use propagation::SolveSummary;
