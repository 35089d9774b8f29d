// Domain layer - Pure check-in rules and value types
// No dependencies on infrastructure or presentation layers

pub mod check_in;
pub mod notification;
pub mod shared;

// Re-exports for convenience
pub use shared::DomainError;
