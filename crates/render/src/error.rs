use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("viewport is empty: {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("resolution {width}x{height} does not fit in an image buffer")]
    BufferMismatch { width: u32, height: u32 },
    #[error("failed to write {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
