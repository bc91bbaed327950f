//! On-disk forms of a dataset: two-column CSV (`raw`, `label`) and the JSON
//! payload checkpoint written before the Normal-2UE records are labeled.

use super::{Dataset, Record};
use crate::error::PrepError;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write `raw,label` CSV, overwriting any existing file at `path`.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<(), PrepError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in dataset.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a dataset back from its CSV form.
pub fn read_csv(path: &Path) -> Result<Dataset, PrepError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize::<Record>() {
        records.push(row?);
    }
    Ok(Dataset::new(records))
}

/// Checkpoint raw payloads to disk so an out-of-memory crash later in the
/// run does not lose the extraction work.
pub fn checkpoint_write(payloads: &[String], path: &Path) -> Result<(), PrepError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, payloads)?;
    writer.flush()?;
    Ok(())
}

/// Read payloads back from a checkpoint file.
pub fn checkpoint_read(path: &Path) -> Result<Vec<String>, PrepError> {
    let file = File::open(path)?;
    let payloads = serde_json::from_reader(BufReader::new(file))?;
    Ok(payloads)
}
