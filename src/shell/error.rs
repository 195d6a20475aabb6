//! Tab panel errors.

/// Errors returned by tab panel operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TabError {
    #[error("Cannot close the last remaining tab")]
    LastTab,

    #[error("No tab with id {0}")]
    NotFound(usize),
}
