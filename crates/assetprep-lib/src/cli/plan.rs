use crate::assets::{DestinationState, SkippedEntry, collect_asset_entries, inspect_destination};
use crate::cli::PlanParams;
use crate::config::load_config;
use crate::error::AssetPrepError;
use itertools::Itertools;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize)]
pub struct PlannedAsset {
    pub relative_path: String,
    pub url: String,
    pub destination: PathBuf,
    pub state: DestinationState,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub release_tag: Option<String>,
    pub release_url: Option<String>,
    pub assets: Vec<PlannedAsset>,
    pub skipped: Vec<SkippedEntry>,
}

impl PlanReport {
    pub fn pending(&self) -> impl Iterator<Item = &PlannedAsset> {
        self.assets
            .iter()
            .filter(|asset| asset.state == DestinationState::Missing)
    }
}

/// Loads the configuration and reports what a fetch would do, without any network access.
pub async fn run_plan(params: PlanParams) -> Result<PlanReport, AssetPrepError> {
    let PlanParams {
        base_dir,
        reserved_keys,
        json,
    } = params;

    tracing::debug!(
        reserved_keys = %reserved_keys.iter().join(", "),
        "Planning assets for {}",
        base_dir.display()
    );
    let app_config = load_config(&base_dir)?;
    let plan = collect_asset_entries(&app_config, &reserved_keys);

    let mut assets = Vec::with_capacity(plan.len());
    for entry in plan.entries {
        let (destination, state) = match entry.destination(&base_dir) {
            Ok(destination) => {
                let state = inspect_destination(&destination).await?;
                (destination, state)
            }
            Err(_) => (
                PathBuf::from(&entry.relative_path),
                DestinationState::OutsideProject,
            ),
        };
        assets.push(PlannedAsset {
            relative_path: entry.relative_path,
            url: entry.url,
            destination,
            state,
        });
    }

    let report = PlanReport {
        release_tag: app_config.release_tag().map(str::to_string),
        release_url: app_config.release_url().map(str::to_string),
        assets,
        skipped: plan.skipped,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        log_report(&report);
    }

    Ok(report)
}

fn log_report(report: &PlanReport) {
    if let Some(release_tag) = &report.release_tag {
        tracing::info!("Release {}", release_tag);
    }

    for asset in &report.assets {
        match asset.state {
            DestinationState::Missing => {
                tracing::info!("Would download {} from {}", asset.relative_path, asset.url)
            }
            DestinationState::Present => {
                tracing::info!("Already present: {}", asset.relative_path)
            }
            DestinationState::Directory => tracing::warn!(
                "Destination is a directory, download would fail: {}",
                asset.relative_path
            ),
            DestinationState::OutsideProject => tracing::warn!(
                "Path points outside the project root, download would fail: {}",
                asset.relative_path
            ),
        }
    }

    tracing::info!(
        "{} of {} assets would be downloaded, {} configuration keys ignored",
        report.pending().count(),
        report.assets.len(),
        report.skipped.len()
    );
}
