use std::path::PathBuf;

/// Size of the buffered writer the response body is streamed through.
pub const WRITE_CHUNK_SIZE: usize = 8192;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressMode {
    #[default]
    Bars,
    Hidden,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchedFile {
    pub path: PathBuf,
    pub bytes_written: u64,
    /// `Content-Length` reported by the server, if any.
    pub content_length: Option<u64>,
}
