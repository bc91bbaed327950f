//! Pipeline configuration. All paths, file names, seeds, and the packet
//! length are configurable but default to the values the datasets were
//! originally prepared with.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Capture source directories and filename patterns
    pub sources: SourcesConfig,
    /// Output directory and file names
    pub output: OutputConfig,
    /// Padding length and fill byte
    pub tensor: TensorConfig,
    /// Seeds for the balanced-set draws and reshuffles
    pub sampling: SamplingConfig,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Flat directory of Normal-1UE captures
    pub normal_1ue_dir: PathBuf,
    /// Flat directory of Normal-2UE captures
    pub normal_2ue_dir: PathBuf,
    /// Directory of attack-type subdirectories, one capture each
    pub attack_dir: PathBuf,
    /// Filename prefix for normal-condition captures
    pub normal_prefix: String,
    /// Filename prefix for attack captures
    pub attack_prefix: String,
    /// Capture file extension
    pub extension: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub normal_1ue_csv: String,
    pub normal_2ue_csv: String,
    pub attack_csv: String,
    /// Raw Normal-2UE payload checkpoint, written before labeling
    pub checkpoint: String,
    pub mixed_labels_npy: String,
    pub mixed_npy: String,
    pub normal_1ue_npy: String,
    pub normal_2ue_npy: String,
    pub total_normal_npy: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TensorConfig {
    /// Fixed row length in raw bytes; longer payloads are truncated
    pub max_packet_len: usize,
    /// Byte appended to payloads shorter than `max_packet_len`
    pub fill_byte: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Seed for the per-condition shuffles the balanced draws are taken from
    pub draw_seed: u64,
    /// Seed for the global mixed-set reshuffle
    pub mix_seed: u64,
    /// Seed for the combined-normal shuffles
    pub normal_seed: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            sources: SourcesConfig::default(),
            output: OutputConfig::default(),
            tensor: TensorConfig::default(),
            sampling: SamplingConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            normal_1ue_dir: PathBuf::from("Normal-1UE"),
            normal_2ue_dir: PathBuf::from("Normal-2UE"),
            attack_dir: PathBuf::from("Attacks"),
            normal_prefix: "allcap".to_string(),
            attack_prefix: "Attacks".to_string(),
            extension: "pcapng".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("prepped-data"),
            normal_1ue_csv: "normal_data.csv".to_string(),
            normal_2ue_csv: "normal_data_2ue.csv".to_string(),
            attack_csv: "malicious_data.csv".to_string(),
            checkpoint: "2ue_payloads.json".to_string(),
            mixed_labels_npy: "mixed_labels.npy".to_string(),
            mixed_npy: "mixed.npy".to_string(),
            normal_1ue_npy: "normal.npy".to_string(),
            normal_2ue_npy: "normal2UE.npy".to_string(),
            total_normal_npy: "total_normal.npy".to_string(),
        }
    }
}

impl Default for TensorConfig {
    fn default() -> Self {
        Self {
            max_packet_len: 1024,
            fill_byte: 0,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            draw_seed: 100,
            mix_seed: 1,
            normal_seed: 2022,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: true,
        }
    }
}

impl PrepConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<PrepConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
