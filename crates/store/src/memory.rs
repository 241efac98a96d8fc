//! In-memory `WorkflowStore` implementation.

use chrono::{Duration, Utc};
use engine::{RunStats, WorkflowDefinition, WorkflowDraft, WorkflowId, WorkflowStatus};
use tracing::info;

use crate::traits::{validate_draft, WorkflowStore};
use crate::StoreError;

/// Vec-backed store: insertion order is list order, and a monotonic counter
/// hands out ids so a new id is strictly greater than every id ever issued,
/// deletes included.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub(crate) workflows: Vec<WorkflowDefinition>,
    next_id: WorkflowId,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, id: WorkflowId) -> Result<usize, StoreError> {
        self.workflows
            .iter()
            .position(|workflow| workflow.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl WorkflowStore for MemoryStore {
    fn create(&mut self, draft: WorkflowDraft) -> Result<WorkflowDefinition, StoreError> {
        validate_draft(&draft)?;

        let status = draft.status();
        let next_run = draft
            .trigger
            .is_schedule()
            .then(|| Utc::now() + Duration::hours(24));

        self.next_id += 1;
        let workflow = WorkflowDefinition {
            id: self.next_id,
            name: draft.name,
            description: draft.description,
            trigger: draft.trigger,
            actions: draft.actions,
            status,
            last_run: None,
            next_run,
            stats: RunStats::default(),
        };

        info!("created workflow {} ('{}')", workflow.id, workflow.name);
        self.workflows.push(workflow.clone());
        Ok(workflow)
    }

    fn update(
        &mut self,
        id: WorkflowId,
        draft: WorkflowDraft,
    ) -> Result<WorkflowDefinition, StoreError> {
        let index = self.index_of(id)?;
        validate_draft(&draft)?;

        let status = draft.status();
        let workflow = &mut self.workflows[index];
        workflow.name = draft.name;
        workflow.description = draft.description;
        workflow.trigger = draft.trigger;
        workflow.actions = draft.actions;
        workflow.status = status;

        Ok(workflow.clone())
    }

    fn delete(&mut self, id: WorkflowId) -> Result<(), StoreError> {
        let index = self.index_of(id)?;
        let removed = self.workflows.remove(index);
        info!("deleted workflow {} ('{}')", removed.id, removed.name);
        Ok(())
    }

    fn set_status(
        &mut self,
        id: WorkflowId,
        status: WorkflowStatus,
    ) -> Result<WorkflowDefinition, StoreError> {
        let index = self.index_of(id)?;
        let workflow = &mut self.workflows[index];

        // Failed is owned by the external executor: it can neither be left
        // nor entered through this toggle.
        if workflow.status == WorkflowStatus::Failed || status == WorkflowStatus::Failed {
            return Err(StoreError::InvalidTransition {
                id,
                from: workflow.status,
                to: status,
            });
        }

        workflow.status = status;
        Ok(workflow.clone())
    }

    fn list(&self) -> Vec<WorkflowDefinition> {
        self.workflows.clone()
    }

    fn get(&self, id: WorkflowId) -> Result<WorkflowDefinition, StoreError> {
        let index = self.index_of(id)?;
        Ok(self.workflows[index].clone())
    }
}
