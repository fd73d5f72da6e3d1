pub mod assets;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod summary;

pub use config::AssetsConfig;
pub use error::AssetPrepError;
pub use summary::{RunOutcome, RunSummary};
