#[allow(clippy::module_inception)]
mod download;
mod progress;
mod types;

pub use download::{build_http_client, fetch_asset};
pub use progress::transfer_progress;
pub use types::{FetchedFile, ProgressMode, WRITE_CHUNK_SIZE};
