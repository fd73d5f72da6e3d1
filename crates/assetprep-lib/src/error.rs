use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetPrepError {
    #[error("Configuration file not found at {path}. Make sure the tool is run from the right directory")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration file {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid download URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Server responded to {url} with {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Download directory creation failed at {path}: {reason}")]
    DownloadDirectoryCreation { path: PathBuf, reason: String },

    #[error("Asset path {path} points outside the project root")]
    DestinationOutsideProject { path: String },

    #[error("Destination {path} exists and is a directory")]
    DestinationIsDirectory { path: PathBuf },

    #[error("Failed to write {path}: {source}")]
    DestinationWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Download of {url} ended after {received} of {expected} bytes")]
    IncompleteBody {
        url: String,
        expected: u64,
        received: u64,
    },

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
