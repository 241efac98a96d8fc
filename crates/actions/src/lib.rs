//! `actions` crate — the `ActionStep` tagged union and its display helpers.
//!
//! Every workflow carries an ordered list of action steps. Each step's
//! variant owns its own config type, so swapping a step's type swaps the
//! whole config rather than merging fields across incompatible shapes.

pub mod describe;
pub mod step;

pub use describe::{describe_action, render_actions};
pub use step::ActionStep;
