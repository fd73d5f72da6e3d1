mod args;
mod fetch;
mod params;
mod plan;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use fetch::{EntryOutcome, fetch_entry, run_fetch};
pub use params::{FetchParams, PlanParams};
pub use plan::{PlanReport, PlannedAsset, run_plan};
pub use resolved_command::{ResolvedCommand, resolve_command};
