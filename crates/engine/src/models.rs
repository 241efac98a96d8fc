//! Core domain models for workflow automation rules.
//!
//! These types are the source of truth for what a workflow definition looks
//! like in memory. They serialize to the JSON shape the REST layer speaks.

use actions::ActionStep;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Store-assigned workflow identifier. Monotonically increasing, starting
/// at 1, never reused within a store instance.
pub type WorkflowId = u64;

// ---------------------------------------------------------------------------
// Trigger
// ---------------------------------------------------------------------------

/// Application events a workflow can react to.
///
/// Event names outside the known set are carried through verbatim so that
/// definitions written by a newer build stay displayable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    NewOrder,
    StockUpdate,
    PriceChange,
    #[serde(untagged)]
    Other(String),
}

impl EventKind {
    /// Display name shown wherever the event is rendered for a human.
    pub fn display_name(&self) -> &str {
        match self {
            Self::NewOrder => "New Order Received",
            Self::StockUpdate => "Stock Level Changed",
            Self::PriceChange => "Price Changed",
            Self::Other(name) => name,
        }
    }
}

/// How a workflow is started.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Trigger {
    /// Fires on a cron-like schedule (5 fields: minute hour day-of-month
    /// month day-of-week).
    Schedule { schedule: String },
    /// Fires when an application event occurs. The condition is an opaque
    /// expression string: displayed, never parsed or evaluated.
    Event {
        event: EventKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        condition: Option<String>,
    },
    /// Trigger payloads this build does not understand, kept verbatim.
    #[serde(untagged)]
    Unknown(serde_json::Value),
}

impl Trigger {
    pub fn is_schedule(&self) -> bool {
        matches!(self, Self::Schedule { .. })
    }
}

// ---------------------------------------------------------------------------
// Status and run statistics
// ---------------------------------------------------------------------------

/// Lifecycle state of a workflow.
///
/// `Active`/`Paused` mirror the draft's `is_active` flag. `Failed` is set by
/// the external executor, never by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowStatus {
    Active,
    Paused,
    Failed,
}

impl std::fmt::Display for WorkflowStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for WorkflowStatus {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "failed" => Ok(Self::Failed),
            other => Err(format!("unknown workflow status: {other}")),
        }
    }
}

/// Run counters owned by the external executor.
///
/// All counters are monotonically non-decreasing, and
/// `successful_runs + failed_runs <= total_runs` holds at all times.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub total_runs: u64,
    pub successful_runs: u64,
    pub failed_runs: u64,
    pub items_processed: u64,
}

impl RunStats {
    /// Rounded percentage of successful runs, or `None` before the first run.
    pub fn success_rate(&self) -> Option<u32> {
        if self.total_runs == 0 {
            return None;
        }
        let rate = self.successful_runs as f64 / self.total_runs as f64 * 100.0;
        Some(rate.round() as u32)
    }
}

// ---------------------------------------------------------------------------
// WorkflowDefinition
// ---------------------------------------------------------------------------

/// A stored automation rule: trigger, ordered action list, status, and run
/// bookkeeping. Owned exclusively by the store that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub id: WorkflowId,
    pub name: String,
    pub description: String,
    pub trigger: Trigger,
    /// At least one step; executes and displays in list order.
    pub actions: Vec<ActionStep>,
    pub status: WorkflowStatus,
    pub last_run: Option<DateTime<Utc>>,
    pub next_run: Option<DateTime<Utc>>,
    pub stats: RunStats,
}

impl WorkflowDefinition {
    pub fn is_active(&self) -> bool {
        self.status == WorkflowStatus::Active
    }
}

/// Caller-supplied fields for creating or editing a workflow. Identity, run
/// timestamps, and statistics are store-owned and absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub trigger: Trigger,
    pub actions: Vec<ActionStep>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl WorkflowDraft {
    /// Convenience constructor for seeds and tests: empty description,
    /// active by default.
    pub fn new(name: impl Into<String>, trigger: Trigger, actions: Vec<ActionStep>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            trigger,
            actions,
            is_active: true,
        }
    }

    /// Status the draft's `is_active` flag maps to.
    pub fn status(&self) -> WorkflowStatus {
        if self.is_active {
            WorkflowStatus::Active
        } else {
            WorkflowStatus::Paused
        }
    }
}
