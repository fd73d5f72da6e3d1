use serde::Serialize;
use std::io::ErrorKind;
use std::path::Path;

/// What is currently on disk where an asset would be written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationState {
    Missing,
    Present,
    Directory,
    /// The asset path escapes the project root; nothing was inspected.
    OutsideProject,
}

pub async fn inspect_destination(path: &Path) -> std::io::Result<DestinationState> {
    match tokio::fs::metadata(path).await {
        Ok(metadata) if metadata.is_dir() => Ok(DestinationState::Directory),
        Ok(_) => Ok(DestinationState::Present),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(DestinationState::Missing),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_inspect_destination() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("model.tflite");
        std::fs::write(&file_path, b"weights").unwrap();
        std::fs::create_dir(dir.path().join("folder.tflite")).unwrap();

        assert_eq!(
            inspect_destination(&file_path).await.unwrap(),
            DestinationState::Present
        );
        assert_eq!(
            inspect_destination(&dir.path().join("folder.tflite"))
                .await
                .unwrap(),
            DestinationState::Directory
        );
        assert_eq!(
            inspect_destination(&dir.path().join("missing/model.tflite"))
                .await
                .unwrap(),
            DestinationState::Missing
        );
    }

    #[tokio::test]
    async fn test_inspect_destination_empty_file_is_present() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("empty.bin");
        std::fs::write(&file_path, b"").unwrap();

        assert_eq!(
            inspect_destination(&file_path).await.unwrap(),
            DestinationState::Present
        );
    }
}
