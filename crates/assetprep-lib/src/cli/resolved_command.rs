use crate::cli::args::Command;
use crate::cli::params::{FetchParams, PlanParams};
use crate::config::ReservedKeys;
use crate::download::ProgressMode;
use crate::error::AssetPrepError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    Plan(PlanParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, AssetPrepError> {
    match command {
        Command::Fetch {
            project_root,
            reserved_keys,
            show_progress,
        } => Ok(ResolvedCommand::Fetch(FetchParams {
            base_dir: resolve_base_dir(project_root)?,
            reserved_keys: ReservedKeys::default().with_extra(reserved_keys),
            progress: if show_progress {
                ProgressMode::Bars
            } else {
                ProgressMode::Hidden
            },
        })),
        Command::Plan {
            project_root,
            reserved_keys,
            json,
        } => Ok(ResolvedCommand::Plan(PlanParams {
            base_dir: resolve_base_dir(project_root)?,
            reserved_keys: ReservedKeys::default().with_extra(reserved_keys),
            json,
        })),
    }
}

fn resolve_base_dir(project_root: Option<String>) -> Result<PathBuf, AssetPrepError> {
    let base_dir = project_root
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    // A missing directory is reported later as a missing configuration file.
    if base_dir.exists() && !base_dir.is_dir() {
        return Err(AssetPrepError::CliArgumentValidation {
            details: format!("Project root {} is not a directory.", base_dir.display()),
        });
    }

    Ok(base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_fetch_defaults() {
        let command = Command::Fetch {
            project_root: None,
            reserved_keys: vec![],
            show_progress: true,
        };

        match resolve_command(command).unwrap() {
            ResolvedCommand::Fetch(params) => {
                assert_eq!(params.base_dir, PathBuf::from("."));
                assert_eq!(params.reserved_keys, ReservedKeys::default());
                assert_eq!(params.progress, ProgressMode::Bars);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_plan_with_extra_reserved_keys() {
        let dir = tempfile::tempdir().unwrap();
        let command = Command::Plan {
            project_root: Some(dir.path().display().to_string()),
            reserved_keys: vec!["mirror".to_string()],
            json: true,
        };

        match resolve_command(command).unwrap() {
            ResolvedCommand::Plan(params) => {
                assert_eq!(params.base_dir, dir.path());
                assert!(params.reserved_keys.contains("mirror"));
                assert!(params.reserved_keys.contains("releaseTag"));
                assert!(params.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_rejects_file_as_project_root() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("assets-config.yml");
        std::fs::write(&file_path, "releaseTag: v1\n").unwrap();
        let command = Command::Fetch {
            project_root: Some(file_path.display().to_string()),
            reserved_keys: vec![],
            show_progress: false,
        };

        let err = resolve_command(command).unwrap_err();

        assert!(
            matches!(err, AssetPrepError::CliArgumentValidation { .. }),
            "unexpected error: {err:?}"
        );
    }
}
