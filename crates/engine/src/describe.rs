//! Human-readable rendering of triggers.
//!
//! Pure display helpers, never failing: malformed or unknown trigger data
//! degrades to a verbatim or fallback string so display code cannot crash on
//! unexpected definitions.

use crate::models::Trigger;

/// Render a trigger as a sentence, e.g. `Scheduled: Daily at midnight` or
/// `Event: Stock Level Changed when stock < 10`.
pub fn describe_trigger(trigger: &Trigger) -> String {
    match trigger {
        Trigger::Schedule { schedule } => format!("Scheduled: {}", humanize_cron(schedule)),
        Trigger::Event { event, condition } => {
            let mut description = format!("Event: {}", event.display_name());
            if let Some(condition) = condition.as_deref().filter(|c| !c.is_empty()) {
                description.push_str(" when ");
                description.push_str(condition);
            }
            description
        }
        Trigger::Unknown(_) => "Unknown trigger".to_owned(),
    }
}

/// Translate a handful of well-known cron patterns into English.
///
/// Field order is `minute hour day-of-month month day-of-week`. Anything that
/// is not exactly five whitespace-separated fields, or that matches none of
/// the known patterns, is returned verbatim.
pub fn humanize_cron(expr: &str) -> String {
    let fields: Vec<&str> = expr.split_whitespace().collect();
    let &[minute, hour, day_of_month, month, day_of_week] = fields.as_slice() else {
        return expr.to_owned();
    };

    if (minute, hour, day_of_month, month, day_of_week) == ("0", "0", "*", "*", "*") {
        return "Daily at midnight".to_owned();
    }

    if (minute, hour, day_of_month, month, day_of_week) == ("0", "9", "*", "*", "1") {
        return "Every Monday at 9 AM".to_owned();
    }

    if minute == "0" {
        if let Some(interval) = hour.strip_prefix("*/") {
            return format!("Every {interval} hours");
        }
    }

    expr.to_owned()
}
