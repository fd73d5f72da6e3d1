use super::types::{AssetEntry, AssetPlan, SkipReason, SkippedEntry};
use crate::config::{AssetsConfig, ConfigValue, ReservedKeys};
use std::collections::HashSet;

/// Top-level key whose mapping value lists assets explicitly, as `path: url` pairs.
pub const ASSETS_SECTION_KEY: &str = "assets";

pub fn is_http_url(value: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Splits the configuration into downloadable entries and everything else, keeping file order.
pub fn collect_asset_entries(config: &AssetsConfig, reserved: &ReservedKeys) -> AssetPlan {
    let mut plan = AssetPlan::default();
    let mut seen = HashSet::new();

    for (key, value) in config.iter() {
        match value {
            ConfigValue::Table(section) if key == ASSETS_SECTION_KEY => {
                for (path, url) in section {
                    classify(&mut plan, &mut seen, path, url, None);
                }
            }
            _ => classify(&mut plan, &mut seen, key, value, Some(reserved)),
        }
    }

    tracing::debug!(
        assets = plan.entries.len(),
        skipped = plan.skipped.len(),
        "Collected asset entries"
    );
    plan
}

fn classify(
    plan: &mut AssetPlan,
    seen: &mut HashSet<String>,
    key: &str,
    value: &ConfigValue,
    reserved: Option<&ReservedKeys>,
) {
    let outcome = if reserved.is_some_and(|reserved| reserved.contains(key)) {
        Err(SkipReason::Reserved)
    } else {
        match value.as_str() {
            None => Err(SkipReason::NotAString),
            Some(url) if !is_http_url(url) => Err(SkipReason::NotAUrl),
            Some(_) if seen.contains(key) => Err(SkipReason::Duplicate),
            Some(url) => Ok(url),
        }
    };

    match outcome {
        Ok(url) => {
            seen.insert(key.to_string());
            plan.entries.push(AssetEntry::new(key, url));
        }
        Err(reason) => {
            tracing::trace!(key, ?reason, kind = value.kind(), "Skipping configuration entry");
            plan.skipped.push(SkippedEntry {
                key: key.to_string(),
                reason,
            });
        }
    }
}
