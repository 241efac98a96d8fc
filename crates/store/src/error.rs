//! Typed error type for the store crate.

use engine::{WorkflowId, WorkflowStatus};
use thiserror::Error;

/// Errors raised by store operations.
///
/// All of these are local precondition failures. Nothing is recoverable
/// inside the store; the caller re-prompts or no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    // ------ Validation errors ------
    /// `create`/`update` received a draft with an empty name.
    #[error("workflow name must not be empty")]
    EmptyName,

    /// `create`/`update` received a draft with no actions.
    #[error("workflow must contain at least one action")]
    NoActions,

    // ------ Lookup / transition errors ------
    /// The referenced workflow does not exist.
    #[error("workflow {0} not found")]
    NotFound(WorkflowId),

    /// A status toggle that the store does not permit. Only Active and
    /// Paused can be toggled; Failed workflows need an external recovery
    /// path.
    #[error("workflow {id} cannot change status from '{from}' to '{to}'")]
    InvalidTransition {
        id: WorkflowId,
        from: WorkflowStatus,
        to: WorkflowStatus,
    },
}
