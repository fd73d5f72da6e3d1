use super::{AssetsConfig, CONFIG_FILE_NAME, ConfigValue};
use crate::error::AssetPrepError;
use config::{FileFormat, Format};
use std::io::ErrorKind;
use std::path::Path;

pub fn load_config(base_dir: &Path) -> Result<AssetsConfig, AssetPrepError> {
    let config_path = base_dir.join(CONFIG_FILE_NAME);

    let text = std::fs::read_to_string(&config_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AssetPrepError::ConfigNotFound {
            path: config_path.clone(),
        },
        _ => AssetPrepError::ConfigRead {
            path: config_path.clone(),
            source: e,
        },
    })?;

    let uri = config_path.display().to_string();
    let table = Format::parse(&FileFormat::Yaml, Some(&uri), &text).map_err(|e| {
        AssetPrepError::ConfigParse {
            path: config_path.clone(),
            reason: e.to_string(),
        }
    })?;

    let entries = table
        .into_iter()
        .map(|(key, value)| (key, ConfigValue::from(value)))
        .collect::<Vec<_>>();
    tracing::debug!(
        path = %config_path.display(),
        entries = entries.len(),
        "Loaded configuration"
    );

    Ok(AssetsConfig::new(entries))
}
