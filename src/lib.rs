//! pcap-dataprep — Capture-to-tensor dataset preparation.
//!
//! Converts raw packet captures from three traffic conditions (Normal-1UE,
//! Normal-2UE, Attacks) into labeled fixed-length byte tensors for training
//! an autoencoder anomaly detector.
//!
//! Modular structure:
//! - [`extract`] — Capture enumeration and raw-payload extraction
//! - [`dataset`] — Labeled record sets, CSV persistence, checkpointing
//! - [`mix`] — Balanced mixed and combined-normal set construction
//! - [`tensor`] — Fixed-length padding and `.npy` array persistence
//! - [`pipeline`] — One-shot run orchestration
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod extract;
pub mod dataset;
pub mod mix;
pub mod tensor;
pub mod pipeline;
pub mod logging;

pub use config::PrepConfig;
pub use error::PrepError;
pub use dataset::{Dataset, Label, Record};
pub use pipeline::{PrepPipeline, RunSummary};
pub use logging::StructuredLogger;
