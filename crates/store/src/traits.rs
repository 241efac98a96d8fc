//! The `WorkflowStore` trait — the repository contract callers depend on.
//!
//! Defined as a trait so a persistence-backed implementation can replace
//! [`crate::MemoryStore`] without changing the REST layer or the CLI.

use engine::{WorkflowDefinition, WorkflowDraft, WorkflowId, WorkflowStatus};

use crate::StoreError;

/// Authoritative collection of workflow definitions.
///
/// Implementations own every definition exclusively: callers receive
/// snapshots, never live references. All operations are synchronous; hosts
/// with more than one thread serialize access externally.
pub trait WorkflowStore {
    /// Validate the draft and store it under a fresh id.
    ///
    /// The new definition starts with zeroed stats, no last run, and a next
    /// run 24 hours out when the trigger is a schedule.
    ///
    /// # Errors
    /// [`StoreError::EmptyName`] / [`StoreError::NoActions`] on a bad draft.
    fn create(&mut self, draft: WorkflowDraft) -> Result<WorkflowDefinition, StoreError>;

    /// Replace a definition's caller-editable fields from the draft.
    ///
    /// `id`, `stats`, `last_run`, and `next_run` are preserved; status is
    /// recomputed from the draft's `is_active` flag.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if `id` is absent, or a validation error on
    /// a bad draft.
    fn update(
        &mut self,
        id: WorkflowId,
        draft: WorkflowDraft,
    ) -> Result<WorkflowDefinition, StoreError>;

    /// Remove a definition. Remaining entries keep their relative order.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if `id` is absent.
    fn delete(&mut self, id: WorkflowId) -> Result<(), StoreError>;

    /// Toggle a definition between Active and Paused.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if `id` is absent;
    /// [`StoreError::InvalidTransition`] if the workflow is currently Failed
    /// or the requested status is Failed.
    fn set_status(
        &mut self,
        id: WorkflowId,
        status: WorkflowStatus,
    ) -> Result<WorkflowDefinition, StoreError>;

    /// All definitions in insertion order.
    fn list(&self) -> Vec<WorkflowDefinition>;

    /// Fetch one definition.
    ///
    /// # Errors
    /// [`StoreError::NotFound`] if `id` is absent.
    fn get(&self, id: WorkflowId) -> Result<WorkflowDefinition, StoreError>;
}

/// Precondition checks shared by `create` and `update`.
pub fn validate_draft(draft: &WorkflowDraft) -> Result<(), StoreError> {
    if draft.name.trim().is_empty() {
        return Err(StoreError::EmptyName);
    }
    if draft.actions.is_empty() {
        return Err(StoreError::NoActions);
    }
    Ok(())
}
