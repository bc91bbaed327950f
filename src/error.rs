//! Pipeline error taxonomy. Unreadable capture files are handled by skipping
//! at the extraction layer; everything surfaced here terminates the run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrepError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("capture parse error in {path}: {detail}")]
    Capture { path: PathBuf, detail: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("checkpoint error: {0}")]
    Checkpoint(#[from] serde_json::Error),

    #[error("invalid hex payload: {0}")]
    Payload(#[from] hex::FromHexError),

    #[error("array write error: {0}")]
    Npy(#[from] ndarray_npy::WriteNpyError),

    #[error("dataset is empty, nothing to convert")]
    EmptyDataset,
}
