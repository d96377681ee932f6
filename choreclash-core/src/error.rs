use thiserror::Error;

/// Local input validation failures. Surfaced inline next to the offending
/// field and never sent over the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("User already exists")]
    DuplicateName,
    #[error("Task cannot be empty")]
    EmptyTask,
    #[error("Amount must be ≥ 0")]
    InvalidBid,
}
