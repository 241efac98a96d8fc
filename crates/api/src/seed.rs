//! Canonical demo workflows.
//!
//! Served behind `dropflow serve --seed` so a fresh instance has data to
//! browse. Seeds go through the public store API, so they follow the same
//! validation and id-allocation path as user-created workflows.

use actions::step::{
    CheckCompetitorPricesConfig, CreateTaskConfig, GenerateReportConfig, SendNotificationConfig,
    UpdatePriceConfig, UpdateStockConfig,
};
use actions::ActionStep;
use engine::{EventKind, Trigger, WorkflowDraft};
use store::{StoreError, WorkflowStore};
use tracing::info;

fn demo_drafts() -> Vec<WorkflowDraft> {
    let mut price_optimization = WorkflowDraft::new(
        "Daily Price Optimization",
        Trigger::Schedule {
            schedule: "0 0 * * *".into(),
        },
        vec![ActionStep::UpdatePrice(UpdatePriceConfig::default())],
    );
    price_optimization.description =
        "Automatically adjusts prices based on competitor data every day".into();

    let mut low_stock = WorkflowDraft::new(
        "Low Stock Alert",
        Trigger::Event {
            event: EventKind::StockUpdate,
            condition: Some("stock < 10".into()),
        },
        vec![
            ActionStep::SendNotification(SendNotificationConfig {
                channel: "email".into(),
                template: "low_stock_alert".into(),
            }),
            ActionStep::CreateTask(CreateTaskConfig {
                title: "Restock {{product.name}}".into(),
                priority: "high".into(),
            }),
        ],
    );
    low_stock.description = "Sends notification when product stock falls below threshold".into();

    let mut order_processing = WorkflowDraft::new(
        "New Order Processing",
        Trigger::Event {
            event: EventKind::NewOrder,
            condition: None,
        },
        vec![
            ActionStep::UpdateStock(UpdateStockConfig::default()),
            ActionStep::SendNotification(SendNotificationConfig {
                channel: "email".into(),
                template: "order_confirmation".into(),
            }),
        ],
    );
    order_processing.description =
        "Automatically processes new orders and updates inventory".into();

    let mut weekly_report = WorkflowDraft::new(
        "Weekly Performance Report",
        Trigger::Schedule {
            schedule: "0 9 * * 1".into(),
        },
        vec![
            ActionStep::GenerateReport(GenerateReportConfig {
                report_type: "weekly_performance".into(),
                format: "pdf".into(),
            }),
            ActionStep::SendNotification(SendNotificationConfig {
                channel: "email".into(),
                template: "weekly_report".into(),
            }),
        ],
    );
    weekly_report.description = "Generates and sends weekly sales and performance report".into();

    let mut competitor_watch = WorkflowDraft::new(
        "Competitor Price Monitoring",
        Trigger::Schedule {
            schedule: "0 */6 * * *".into(),
        },
        vec![
            ActionStep::CheckCompetitorPrices(CheckCompetitorPricesConfig {
                threshold: 10.0,
                stores: vec!["amazon".into(), "ebay".into(), "walmart".into()],
            }),
            ActionStep::SendNotification(SendNotificationConfig {
                channel: "email".into(),
                template: "price_alert".into(),
            }),
        ],
    );
    competitor_watch.description =
        "Monitors competitor prices and alerts on significant changes".into();
    competitor_watch.is_active = false;

    vec![
        price_optimization,
        low_stock,
        order_processing,
        weekly_report,
        competitor_watch,
    ]
}

/// Populate the store with the demo workflows.
pub fn seed_demo_workflows(store: &mut impl WorkflowStore) -> Result<(), StoreError> {
    let drafts = demo_drafts();
    let count = drafts.len();
    for draft in drafts {
        store.create(draft)?;
    }
    info!("Seeded {count} demo workflows");
    Ok(())
}
