use thiserror::Error;

/// Reasons an agenda action is rejected before any API call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    #[error("activity is submitted; only a supervisor can change it")]
    Locked,
    #[error("activity belongs to another user")]
    NotOwner,
    #[error("activity not found: {0}")]
    NotFound(String),
}
