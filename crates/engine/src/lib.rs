//! `engine` crate — core domain models and trigger rendering.

pub mod describe;
pub mod models;

pub use describe::{describe_trigger, humanize_cron};
pub use models::{
    EventKind, RunStats, Trigger, WorkflowDefinition, WorkflowDraft, WorkflowId, WorkflowStatus,
};
