//! Capture file enumeration and raw-payload extraction.
//! Normal-condition captures live flat in their directory; attack captures
//! sit one level down, one file per attack-type subdirectory.

mod payload;

pub use payload::extract_file;

use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Enumerate capture files directly under `dir` whose name starts with
/// `prefix` and ends with `.{ext}`. Sorted for deterministic file order.
pub fn capture_files(dir: &Path, prefix: &str, ext: &str) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_string_lossy();
            name.starts_with(prefix) && name.ends_with(&format!(".{}", ext))
        })
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}

/// One capture per attack-type subdirectory of `dir`. A subdirectory with no
/// matching file is reported and skipped.
pub fn attack_captures(dir: &Path, prefix: &str, ext: &str) -> Vec<PathBuf> {
    let mut out = Vec::new();
    let mut subdirs: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir())
        .map(|e| e.into_path())
        .collect();
    subdirs.sort();
    for sub in subdirs {
        match capture_files(&sub, prefix, ext).into_iter().next() {
            Some(file) => out.push(file),
            None => warn!(dir = %sub.display(), "no matching capture file in attack folder"),
        }
    }
    out
}

/// Extract hex-encoded payloads from every capture in `paths`, in file order
/// then packet order. An unreadable or malformed file is logged and skipped;
/// the remaining files are still processed.
pub fn extract_dir(paths: &[PathBuf]) -> Vec<String> {
    let mut payloads = Vec::new();
    for path in paths {
        match extract_file(path) {
            Ok(mut p) => {
                tracing::info!(file = %path.display(), packets = p.len(), "extracted payloads");
                payloads.append(&mut p);
            }
            Err(e) => warn!(file = %path.display(), error = %e, "skipping capture file"),
        }
    }
    payloads
}
