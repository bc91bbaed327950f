//! Fixed-length padding and `.npy` persistence. Every payload becomes a row
//! of exactly `max_packet_len` bytes so the set stacks into a rectangular
//! `(N, L, 1, 1)` tensor matching the model's expected input rank.

use crate::dataset::{Dataset, Label};
use crate::error::PrepError;
use ndarray::{Array1, Array4};
use ndarray_npy::write_npy;
use std::path::Path;

/// Truncate to `len` bytes, or right-pad with `fill`. Idempotent on input
/// that is already exactly `len` bytes.
pub fn pad_payload(bytes: &[u8], len: usize, fill: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(len);
    let take = bytes.len().min(len);
    out.extend_from_slice(&bytes[..take]);
    out.resize(len, fill);
    out
}

/// Decode, pad, and stack every payload in record order.
pub fn to_tensor(dataset: &Dataset, len: usize, fill: u8) -> Result<Array4<u8>, PrepError> {
    if dataset.is_empty() {
        return Err(PrepError::EmptyDataset);
    }
    let n = dataset.len();
    let mut tensor = Array4::<u8>::zeros((n, len, 1, 1));
    for (i, record) in dataset.records().iter().enumerate() {
        let bytes = hex::decode(&record.raw)?;
        let padded = pad_payload(&bytes, len, fill);
        for (j, b) in padded.into_iter().enumerate() {
            tensor[[i, j, 0, 0]] = b;
        }
    }
    Ok(tensor)
}

pub fn write_tensor(path: &Path, tensor: &Array4<u8>) -> Result<(), PrepError> {
    write_npy(path, tensor)?;
    Ok(())
}

/// Persist the label column as a 1-D u8 array (normal = 0, attack = 1),
/// positionally aligned with the corresponding tensor.
pub fn write_labels(path: &Path, labels: &[Label]) -> Result<(), PrepError> {
    let arr = Array1::from_iter(labels.iter().map(|l| l.as_u8()));
    write_npy(path, &arr)?;
    Ok(())
}
