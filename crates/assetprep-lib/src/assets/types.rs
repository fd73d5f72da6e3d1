use crate::error::AssetPrepError;
use serde::Serialize;
use std::path::{Component, Path, PathBuf};

/// One file to fetch: where it goes, relative to the project root, and where it comes from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AssetEntry {
    pub relative_path: String,
    pub url: String,
}

impl AssetEntry {
    pub fn new(relative_path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            relative_path: relative_path.into(),
            url: url.into(),
        }
    }

    /// Resolves the entry under `base_dir`. Absolute paths and `..` components are
    /// rejected so that no asset lands outside the project root.
    pub fn destination(&self, base_dir: &Path) -> Result<PathBuf, AssetPrepError> {
        let relative = Path::new(&self.relative_path);
        let stays_inside = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if !stays_inside || relative.file_name().is_none() {
            return Err(AssetPrepError::DestinationOutsideProject {
                path: self.relative_path.clone(),
            });
        }
        Ok(base_dir.join(relative))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Reserved,
    NotAString,
    NotAUrl,
    Duplicate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    pub key: String,
    pub reason: SkipReason,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AssetPlan {
    pub entries: Vec<AssetEntry>,
    pub skipped: Vec<SkippedEntry>,
}

impl AssetPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
