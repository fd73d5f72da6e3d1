use serde::Serialize;
use std::process::ExitCode;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every asset is available, or only some of them failed.
    Completed,
    /// Every downloadable entry failed.
    AllFailed,
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        self == RunOutcome::Completed
    }
}

impl From<RunOutcome> for ExitCode {
    fn from(outcome: RunOutcome) -> Self {
        match outcome {
            RunOutcome::Completed => ExitCode::SUCCESS,
            RunOutcome::AllFailed => ExitCode::FAILURE,
        }
    }
}

/// Counters accumulated over one pass through the asset entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Assets that were already on disk or were downloaded in this run.
    pub available: usize,
    pub downloaded: usize,
    pub errors: usize,
    /// Downloadable entries found in the configuration.
    pub asset_entries: usize,
    /// Configuration keys that were not treated as assets.
    pub skipped: usize,
}

impl RunSummary {
    pub fn new(asset_entries: usize, skipped: usize) -> Self {
        Self {
            asset_entries,
            skipped,
            ..Self::default()
        }
    }

    pub fn record_present(&mut self) {
        self.available += 1;
    }

    pub fn record_downloaded(&mut self) {
        self.available += 1;
        self.downloaded += 1;
    }

    pub fn record_failure(&mut self) {
        self.errors += 1;
    }

    pub fn outcome(&self) -> RunOutcome {
        if self.errors > 0 && self.errors == self.asset_entries {
            RunOutcome::AllFailed
        } else {
            RunOutcome::Completed
        }
    }
}
