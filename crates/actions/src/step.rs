//! Action step types.
//!
//! An [`ActionStep`] is one unit of work in a workflow's action list. On the
//! wire it is a `{ "type": …, "config": { … } }` pair; in memory each variant
//! owns a typed config struct. Unrecognized types are preserved verbatim in
//! [`ActionStep::Other`] so forward-incompatible definitions stay loadable
//! and displayable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Per-variant config structs
// ---------------------------------------------------------------------------

/// Which products a price update applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTarget {
    All,
    Selected,
}

/// How the price adjustment value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceAdjustment {
    /// `value` is a percentage of the current price.
    Percentage,
    /// `value` is a fixed amount in EUR.
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdatePriceConfig {
    pub target: PriceTarget,
    pub adjustment: PriceAdjustment,
    pub value: f64,
}

impl Default for UpdatePriceConfig {
    fn default() -> Self {
        Self {
            target: PriceTarget::All,
            adjustment: PriceAdjustment::Percentage,
            value: 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendNotificationConfig {
    pub channel: String,
    pub template: String,
}

impl Default for SendNotificationConfig {
    fn default() -> Self {
        Self {
            channel: "email".into(),
            template: "default".into(),
        }
    }
}

/// Direction of a stock-level adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockOperation {
    Decrease,
    Increase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateStockConfig {
    pub operation: StockOperation,
}

impl Default for UpdateStockConfig {
    fn default() -> Self {
        Self {
            operation: StockOperation::Decrease,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateReportConfig {
    pub report_type: String,
    pub format: String,
}

impl Default for GenerateReportConfig {
    fn default() -> Self {
        Self {
            report_type: "performance".into(),
            format: "pdf".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckCompetitorPricesConfig {
    /// Percentage change that counts as significant.
    pub threshold: f64,
    pub stores: Vec<String>,
}

impl Default for CheckCompetitorPricesConfig {
    fn default() -> Self {
        Self {
            threshold: 10.0,
            stores: vec!["amazon".into(), "ebay".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateTaskConfig {
    pub title: String,
    pub priority: String,
}

impl Default for CreateTaskConfig {
    fn default() -> Self {
        Self {
            title: "New Task".into(),
            priority: "medium".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// ActionStep
// ---------------------------------------------------------------------------

/// A single step in a workflow's action list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum ActionStep {
    UpdatePrice(UpdatePriceConfig),
    SendNotification(SendNotificationConfig),
    UpdateStock(UpdateStockConfig),
    GenerateReport(GenerateReportConfig),
    CheckCompetitorPrices(CheckCompetitorPricesConfig),
    CreateTask(CreateTaskConfig),
    /// Any action type this build does not know about. The raw type token and
    /// config are carried through untouched.
    #[serde(untagged)]
    Other {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        config: Value,
    },
}

impl ActionStep {
    /// Build a step of the given type with that type's canonical default
    /// config. This is the "change type" operation: the previous config is
    /// discarded wholesale, never merged.
    pub fn with_default_config(kind: &str) -> Self {
        match kind {
            "update_price" => Self::UpdatePrice(UpdatePriceConfig::default()),
            "send_notification" => Self::SendNotification(SendNotificationConfig::default()),
            "update_stock" => Self::UpdateStock(UpdateStockConfig::default()),
            "generate_report" => Self::GenerateReport(GenerateReportConfig::default()),
            "check_competitor_prices" => {
                Self::CheckCompetitorPrices(CheckCompetitorPricesConfig::default())
            }
            "create_task" => Self::CreateTask(CreateTaskConfig::default()),
            other => Self::Other {
                kind: other.to_owned(),
                config: Value::Object(serde_json::Map::new()),
            },
        }
    }

    /// The step's type token as it appears on the wire.
    pub fn kind(&self) -> &str {
        match self {
            Self::UpdatePrice(_) => "update_price",
            Self::SendNotification(_) => "send_notification",
            Self::UpdateStock(_) => "update_stock",
            Self::GenerateReport(_) => "generate_report",
            Self::CheckCompetitorPrices(_) => "check_competitor_prices",
            Self::CreateTask(_) => "create_task",
            Self::Other { kind, .. } => kind,
        }
    }
}
