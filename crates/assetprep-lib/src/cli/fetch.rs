use crate::assets::{AssetEntry, DestinationState, collect_asset_entries, inspect_destination};
use crate::cli::FetchParams;
use crate::config::load_config;
use crate::download::{FetchedFile, ProgressMode, build_http_client, fetch_asset};
use crate::error::AssetPrepError;
use crate::summary::{RunOutcome, RunSummary};
use reqwest::Client;
use std::path::Path;
use tracing;

#[derive(Debug)]
pub enum EntryOutcome {
    AlreadyPresent,
    Downloaded(FetchedFile),
}

/// Makes every asset in the project's `assets-config.yml` available on disk.
///
/// Configuration errors abort the run. Failures of individual assets are logged and
/// counted, and the remaining assets are still processed; whether the run as a whole
/// failed is decided by [`RunSummary::outcome`].
pub async fn run_fetch(params: FetchParams) -> Result<RunSummary, AssetPrepError> {
    let FetchParams {
        base_dir,
        reserved_keys,
        progress,
    } = params;

    tracing::info!("Loading configuration from {}", base_dir.display());
    let app_config = load_config(&base_dir)?;

    match app_config.release_tag() {
        Some(release_tag) => tracing::info!("Found release {}", release_tag),
        None => tracing::warn!("Configuration does not name a release"),
    }

    let plan = collect_asset_entries(&app_config, &reserved_keys);
    let client = build_http_client()?;
    let mut summary = RunSummary::new(plan.len(), plan.skipped.len());

    tracing::info!("Fetching {} assets...", plan.len());
    for entry in &plan.entries {
        match fetch_entry(&client, entry, &base_dir, progress).await {
            Ok(EntryOutcome::AlreadyPresent) => {
                summary.record_present();
                tracing::info!(path = %entry.relative_path, "Already present, skipping download");
            }
            Ok(EntryOutcome::Downloaded(file)) => {
                summary.record_downloaded();
                tracing::info!(
                    path = %entry.relative_path,
                    bytes = file.bytes_written,
                    "Downloaded"
                );
            }
            Err(err) => {
                summary.record_failure();
                tracing::error!(path = %entry.relative_path, url = %entry.url, "Download failed: {}", err);
            }
        }
    }

    report_summary(&summary);
    Ok(summary)
}

/// Downloads a single asset unless a file is already present at its destination.
pub async fn fetch_entry(
    client: &Client,
    entry: &AssetEntry,
    base_dir: &Path,
    progress: ProgressMode,
) -> Result<EntryOutcome, AssetPrepError> {
    let destination = entry.destination(base_dir)?;

    match inspect_destination(&destination).await? {
        DestinationState::Present => Ok(EntryOutcome::AlreadyPresent),
        DestinationState::Directory => {
            Err(AssetPrepError::DestinationIsDirectory { path: destination })
        }
        DestinationState::OutsideProject => Err(AssetPrepError::DestinationOutsideProject {
            path: entry.relative_path.clone(),
        }),
        DestinationState::Missing => {
            tracing::debug!(url = %entry.url, output = %destination.display(), "Downloading");
            let file = fetch_asset(client, &entry.url, &destination, progress).await?;
            Ok(EntryOutcome::Downloaded(file))
        }
    }
}

fn report_summary(summary: &RunSummary) {
    tracing::info!("==== Asset download summary ====");
    tracing::info!("Assets available or downloaded: {}", summary.available);
    if summary.errors > 0 {
        tracing::warn!("Failed assets: {}", summary.errors);
    }

    match summary.outcome() {
        RunOutcome::AllFailed => {
            tracing::error!("Every asset download failed! The application may not work correctly.")
        }
        RunOutcome::Completed => {
            tracing::info!("Done. The application is ready to be built.")
        }
    }
}
