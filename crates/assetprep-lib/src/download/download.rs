use super::progress::transfer_progress;
use super::types::{FetchedFile, ProgressMode, WRITE_CHUNK_SIZE};
use crate::error::AssetPrepError;
use futures::StreamExt;
use indicatif::ProgressBar;
use reqwest::{Client, Response, Url};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};

pub fn build_http_client() -> Result<Client, AssetPrepError> {
    // No explicit timeouts: an unresponsive server stalls the run until the process is stopped.
    let client = Client::builder()
        .user_agent(concat!("assetprep/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Streams `url` into `destination`, replacing whatever file is there.
///
/// Missing parent directories are created. A failed transfer leaves the partially
/// written file behind and is never retried.
pub async fn fetch_asset(
    client: &Client,
    url: &str,
    destination: &Path,
    progress: ProgressMode,
) -> Result<FetchedFile, AssetPrepError> {
    let parsed_url = Url::parse(url).map_err(|e| AssetPrepError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AssetPrepError::DownloadDirectoryCreation {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
    }

    tracing::debug!(url, output = %destination.display(), "Requesting");
    let response = client.get(parsed_url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AssetPrepError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let content_length = response.content_length();
    let bar = transfer_progress(progress, destination, content_length);
    let written = stream_to_file(response, url, destination, content_length, &bar).await;
    bar.finish_and_clear();
    let bytes_written = written?;

    tracing::debug!(url, output = %destination.display(), bytes_written, "Transfer finished");
    Ok(FetchedFile {
        path: destination.to_path_buf(),
        bytes_written,
        content_length,
    })
}

/// Writes the response body to `destination`.
///
/// A body that ends before the declared `Content-Length` surfaces from hyper as a body
/// read error; it is reported as [`AssetPrepError::IncompleteBody`] instead.
async fn stream_to_file(
    response: Response,
    url: &str,
    destination: &Path,
    content_length: Option<u64>,
    bar: &ProgressBar,
) -> Result<u64, AssetPrepError> {
    let write_error = |source| AssetPrepError::DestinationWrite {
        path: destination.to_path_buf(),
        source,
    };
    let incomplete = |expected, received| AssetPrepError::IncompleteBody {
        url: url.to_string(),
        expected,
        received,
    };

    let file = tokio::fs::File::create(destination)
        .await
        .map_err(write_error)?;
    let mut writer = BufWriter::with_capacity(WRITE_CHUNK_SIZE, file);
    let mut body = response.bytes_stream();
    let mut bytes_written = 0u64;

    while let Some(chunk) = body.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(err) => {
                // Keep what was received on disk; partial files are not cleaned up.
                writer.flush().await.map_err(write_error)?;
                return match content_length {
                    Some(expected) if bytes_written < expected => {
                        tracing::debug!(url, "Body ended early: {}", err);
                        Err(incomplete(expected, bytes_written))
                    }
                    _ => Err(err.into()),
                };
            }
        };
        writer.write_all(&chunk).await.map_err(write_error)?;
        bytes_written += chunk.len() as u64;
        bar.inc(chunk.len() as u64);
    }

    writer.flush().await.map_err(write_error)?;

    match content_length {
        Some(expected) if expected != bytes_written => Err(incomplete(expected, bytes_written)),
        _ => Ok(bytes_written),
    }
}
