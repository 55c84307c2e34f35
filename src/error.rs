use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid scene: {0}")]
    InvalidScene(String),
    #[error("pixel buffer of {len} bytes does not fit a {width}x{height} RGB image")]
    BufferSize { width: u32, height: u32, len: usize },
}
