//! Human-readable rendering of action steps.
//!
//! These are pure display helpers: they never fail. A step this build does
//! not understand renders as its raw type token rather than an error, so
//! corrupted or forward-incompatible definitions remain displayable.

use crate::step::{ActionStep, PriceAdjustment, PriceTarget, StockOperation};

/// Render one step as a sentence.
pub fn describe_action(step: &ActionStep) -> String {
    match step {
        ActionStep::UpdatePrice(config) => {
            let scope = match config.target {
                PriceTarget::All => "for all products",
                PriceTarget::Selected => "for selected products",
            };
            let unit = match config.adjustment {
                PriceAdjustment::Percentage => "%",
                PriceAdjustment::Fixed => " EUR",
            };
            format!("Update prices {} by {}{}", scope, config.value, unit)
        }
        ActionStep::SendNotification(config) => format!(
            "Send {} notification using {} template",
            config.channel, config.template
        ),
        ActionStep::UpdateStock(config) => {
            let direction = match config.operation {
                StockOperation::Decrease => "Decrease",
                StockOperation::Increase => "Increase",
            };
            format!("{direction} stock levels")
        }
        ActionStep::GenerateReport(config) => format!(
            "Generate {} report in {} format",
            config.report_type, config.format
        ),
        ActionStep::CheckCompetitorPrices(config) => format!(
            "Check competitor prices on {} with {}% threshold",
            config.stores.join(", "),
            config.threshold
        ),
        ActionStep::CreateTask(config) => {
            format!("Create {} priority task: {}", config.priority, config.title)
        }
        ActionStep::Other { kind, .. } => kind.clone(),
    }
}

/// Render an ordered action list as 1-indexed lines, in list order.
pub fn render_actions(steps: &[ActionStep]) -> Vec<String> {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, describe_action(step)))
        .collect()
}
