//! Labeled record sets: the in-memory tabular form of extracted payloads.

mod store;

pub use store::{checkpoint_read, checkpoint_write, read_csv, write_csv};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Traffic condition label. Constant within a single source directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Normal,
    Attack,
}

impl Label {
    /// Encoding used in the persisted label array
    pub fn as_u8(self) -> u8 {
        match self {
            Label::Normal => 0,
            Label::Attack => 1,
        }
    }
}

/// One (payload, label) row. `raw` is the hex-encoded payload bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub raw: String,
    pub label: Label,
}

/// Ordered collection of labeled records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Build from extracted payloads, labeling every record identically.
    pub fn from_payloads(payloads: Vec<String>, label: Label) -> Self {
        Self {
            records: payloads
                .into_iter()
                .map(|raw| Record { raw, label })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Full in-place permutation with a caller-supplied generator.
    pub fn shuffle<R: rand::Rng>(&mut self, rng: &mut R) {
        self.records.shuffle(rng);
    }

    /// Reproducible full permutation.
    pub fn seeded_shuffled(mut self, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        self.records.shuffle(&mut rng);
        self
    }

    /// Keep the first `n` records (no-op if the set is smaller).
    pub fn truncated(mut self, n: usize) -> Self {
        self.records.truncate(n);
        self
    }

    pub fn extend(&mut self, other: Dataset) {
        self.records.extend(other.records);
    }

    /// Label column in record order, positionally aligned with the payloads.
    /// Persisted separately so the tensor itself carries no labels.
    pub fn labels(&self) -> Vec<Label> {
        self.records.iter().map(|r| r.label).collect()
    }
}
