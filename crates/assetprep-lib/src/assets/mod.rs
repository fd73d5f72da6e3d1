mod collector;
mod destination;
mod types;

pub use collector::{ASSETS_SECTION_KEY, collect_asset_entries, is_http_url};
pub use destination::{DestinationState, inspect_destination};
pub use types::{AssetEntry, AssetPlan, SkipReason, SkippedEntry};
