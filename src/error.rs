use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read image {path}: {source}")]
    ImageRead {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to write {path}: {source}")]
    ImageWrite {
        path: PathBuf,
        source: image::ImageError,
    },
}
