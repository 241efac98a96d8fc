//! Scenario tests for the in-memory store.

use actions::step::{StockOperation, UpdatePriceConfig, UpdateStockConfig};
use actions::{render_actions, ActionStep};
use chrono::{Duration, Utc};
use engine::{describe_trigger, EventKind, Trigger, WorkflowDraft, WorkflowStatus};

use crate::{MemoryStore, StoreError, WorkflowStore};

/// A minimal valid draft: scheduled, one default price update, active.
fn draft(name: &str) -> WorkflowDraft {
    WorkflowDraft::new(
        name,
        Trigger::Schedule {
            schedule: "0 0 * * *".into(),
        },
        vec![ActionStep::UpdatePrice(UpdatePriceConfig::default())],
    )
}

// ============================================================
// Validation
// ============================================================

#[test]
fn create_rejects_empty_name_and_leaves_store_unchanged() {
    let mut store = MemoryStore::new();

    assert_eq!(store.create(draft("")), Err(StoreError::EmptyName));
    assert_eq!(store.create(draft("   ")), Err(StoreError::EmptyName));
    assert!(store.list().is_empty());
}

#[test]
fn create_rejects_empty_action_list_and_leaves_store_unchanged() {
    let mut store = MemoryStore::new();

    let mut empty = draft("No Actions");
    empty.actions.clear();

    assert_eq!(store.create(empty), Err(StoreError::NoActions));
    assert!(store.list().is_empty());
}

#[test]
fn update_validates_the_draft_too() {
    let mut store = MemoryStore::new();
    let created = store.create(draft("Valid")).unwrap();

    let mut bad = draft("Valid");
    bad.actions.clear();

    assert_eq!(store.update(created.id, bad), Err(StoreError::NoActions));
    // The stored definition is untouched.
    assert_eq!(store.get(created.id).unwrap(), created);
}

// ============================================================
// Identity
// ============================================================

#[test]
fn ids_are_strictly_increasing_starting_at_one() {
    let mut store = MemoryStore::new();

    let first = store.create(draft("a")).unwrap();
    let second = store.create(draft("b")).unwrap();
    let third = store.create(draft("c")).unwrap();
    assert_eq!((first.id, second.id, third.id), (1, 2, 3));

    // A deleted id is never reissued.
    store.delete(third.id).unwrap();
    let fourth = store.create(draft("d")).unwrap();
    assert_eq!(fourth.id, 4);
}

#[test]
fn list_preserves_insertion_order_across_deletes() {
    let mut store = MemoryStore::new();
    for name in ["a", "b", "c", "d"] {
        store.create(draft(name)).unwrap();
    }

    store.delete(2).unwrap();

    let names: Vec<String> = store.list().into_iter().map(|w| w.name).collect();
    assert_eq!(names, vec!["a", "c", "d"]);
}

// ============================================================
// Update / delete semantics
// ============================================================

#[test]
fn update_replaces_fields_but_preserves_id_stats_and_run_times() {
    let mut store = MemoryStore::new();
    let created = store.create(draft("Original")).unwrap();

    let mut revised = WorkflowDraft::new(
        "Revised",
        Trigger::Event {
            event: EventKind::NewOrder,
            condition: None,
        },
        vec![ActionStep::UpdateStock(UpdateStockConfig {
            operation: StockOperation::Increase,
        })],
    );
    revised.description = "now event-driven".into();
    revised.is_active = false;

    let updated = store.update(created.id, revised.clone()).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.stats, created.stats);
    assert_eq!(updated.last_run, created.last_run);
    assert_eq!(updated.next_run, created.next_run);

    assert_eq!(updated.name, "Revised");
    assert_eq!(updated.description, "now event-driven");
    assert_eq!(updated.trigger, revised.trigger);
    assert_eq!(updated.actions, revised.actions);
    assert_eq!(updated.status, WorkflowStatus::Paused);
}

#[test]
fn operations_on_missing_ids_fail_with_not_found() {
    let mut store = MemoryStore::new();

    assert_eq!(store.get(42), Err(StoreError::NotFound(42)));
    assert_eq!(store.delete(42), Err(StoreError::NotFound(42)));
    assert_eq!(store.update(42, draft("x")), Err(StoreError::NotFound(42)));
    assert_eq!(
        store.set_status(42, WorkflowStatus::Paused),
        Err(StoreError::NotFound(42))
    );
}

#[test]
fn delete_then_get_fails_with_not_found() {
    let mut store = MemoryStore::new();
    let created = store.create(draft("short-lived")).unwrap();

    store.delete(created.id).unwrap();
    assert_eq!(store.get(created.id), Err(StoreError::NotFound(created.id)));
}

// ============================================================
// Status transitions
// ============================================================

#[test]
fn set_status_toggles_between_active_and_paused() {
    let mut store = MemoryStore::new();
    let created = store.create(draft("toggle-me")).unwrap();
    assert_eq!(created.status, WorkflowStatus::Active);

    let paused = store
        .set_status(created.id, WorkflowStatus::Paused)
        .unwrap();
    assert_eq!(paused.status, WorkflowStatus::Paused);

    let active = store
        .set_status(created.id, WorkflowStatus::Active)
        .unwrap();
    assert_eq!(active.status, WorkflowStatus::Active);
}

#[test]
fn failed_workflows_cannot_be_toggled() {
    let mut store = MemoryStore::new();
    let created = store.create(draft("doomed")).unwrap();

    // The external executor owns the Failed state; simulate it directly.
    store.workflows[0].status = WorkflowStatus::Failed;

    assert_eq!(
        store.set_status(created.id, WorkflowStatus::Active),
        Err(StoreError::InvalidTransition {
            id: created.id,
            from: WorkflowStatus::Failed,
            to: WorkflowStatus::Active,
        })
    );
}

#[test]
fn failed_is_not_a_permitted_toggle_target() {
    let mut store = MemoryStore::new();
    let created = store.create(draft("healthy")).unwrap();

    let result = store.set_status(created.id, WorkflowStatus::Failed);
    assert_eq!(
        result,
        Err(StoreError::InvalidTransition {
            id: created.id,
            from: WorkflowStatus::Active,
            to: WorkflowStatus::Failed,
        })
    );
    // And the stored status is untouched.
    assert_eq!(store.get(created.id).unwrap().status, WorkflowStatus::Active);
}

// ============================================================
// End-to-end: create → describe
// ============================================================

#[test]
fn nightly_reprice_scenario() {
    let mut store = MemoryStore::new();

    let before = Utc::now();
    let created = store.create(draft("Nightly Reprice")).unwrap();
    let after = Utc::now();

    assert_eq!(created.status, WorkflowStatus::Active);
    assert_eq!(created.last_run, None);
    assert_eq!(created.stats.total_runs, 0);

    // next_run is ~24h out.
    let next_run = created.next_run.expect("scheduled workflows get a next run");
    assert!(next_run >= before + Duration::hours(24));
    assert!(next_run <= after + Duration::hours(24));

    assert_eq!(
        describe_trigger(&created.trigger),
        "Scheduled: Daily at midnight"
    );
    assert_eq!(
        render_actions(&created.actions),
        vec!["1. Update prices for all products by 5%"]
    );
}

#[test]
fn event_workflows_get_no_next_run() {
    let mut store = MemoryStore::new();

    let created = store
        .create(WorkflowDraft::new(
            "Low Stock Alert",
            Trigger::Event {
                event: EventKind::StockUpdate,
                condition: Some("stock < 10".into()),
            },
            vec![ActionStep::with_default_config("send_notification")],
        ))
        .unwrap();

    assert_eq!(created.next_run, None);
    assert_eq!(
        describe_trigger(&created.trigger),
        "Event: Stock Level Changed when stock < 10"
    );
}
