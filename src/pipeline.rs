//! One-shot run orchestration: extraction → labeled CSVs → balanced sets →
//! padded tensors. Stages run sequentially; each stage's output lands on
//! disk before the next begins.

use crate::config::PrepConfig;
use crate::dataset::{self, Dataset, Label};
use crate::error::PrepError;
use crate::{extract, mix, tensor};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Record counts of every set produced by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub normal_1ue: usize,
    pub normal_2ue: usize,
    pub attack: usize,
    pub mixed: usize,
    pub total_normal: usize,
}

pub struct PrepPipeline {
    config: PrepConfig,
}

impl PrepPipeline {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    fn out_path(&self, name: &str) -> PathBuf {
        self.config.output.dir.join(name)
    }

    /// Extract one normal condition, label, shuffle, and write its CSV.
    fn prepare_normal(&self, dir: &std::path::Path, csv_name: &str) -> Result<usize, PrepError> {
        let sources = &self.config.sources;
        let files = extract::capture_files(dir, &sources.normal_prefix, &sources.extension);
        info!(dir = %dir.display(), files = files.len(), "processing normal captures");
        let payloads = extract::extract_dir(&files);
        let mut set = Dataset::from_payloads(payloads, Label::Normal);
        set.shuffle(&mut rand::thread_rng());
        dataset::write_csv(&set, &self.out_path(csv_name))?;
        Ok(set.len())
    }

    /// Normal-2UE additionally checkpoints its raw payloads to disk before
    /// labeling, so extraction work survives a crash later in the run.
    fn prepare_normal_2ue(&self) -> Result<usize, PrepError> {
        let sources = &self.config.sources;
        let files = extract::capture_files(
            &sources.normal_2ue_dir,
            &sources.normal_prefix,
            &sources.extension,
        );
        info!(dir = %sources.normal_2ue_dir.display(), files = files.len(), "processing normal-2ue captures");
        let payloads = extract::extract_dir(&files);

        let checkpoint = self.out_path(&self.config.output.checkpoint);
        dataset::checkpoint_write(&payloads, &checkpoint)?;
        let payloads = dataset::checkpoint_read(&checkpoint)?;

        let mut set = Dataset::from_payloads(payloads, Label::Normal);
        set.shuffle(&mut rand::thread_rng());
        dataset::write_csv(&set, &self.out_path(&self.config.output.normal_2ue_csv))?;
        Ok(set.len())
    }

    fn prepare_attack(&self) -> Result<usize, PrepError> {
        let sources = &self.config.sources;
        let files = extract::attack_captures(
            &sources.attack_dir,
            &sources.attack_prefix,
            &sources.extension,
        );
        info!(dir = %sources.attack_dir.display(), files = files.len(), "processing attack captures");
        let payloads = extract::extract_dir(&files);
        let mut set = Dataset::from_payloads(payloads, Label::Attack);
        set.shuffle(&mut rand::thread_rng());
        dataset::write_csv(&set, &self.out_path(&self.config.output.attack_csv))?;
        Ok(set.len())
    }

    /// Run the full pipeline once. Outputs are overwritten.
    pub fn run(&self) -> Result<RunSummary, PrepError> {
        let output = &self.config.output;
        std::fs::create_dir_all(&output.dir)?;

        let normal_1ue_count =
            self.prepare_normal(&self.config.sources.normal_1ue_dir, &output.normal_1ue_csv)?;
        info!(records = normal_1ue_count, "normal-1ue set written");

        let normal_2ue_count = self.prepare_normal_2ue()?;
        info!(records = normal_2ue_count, "normal-2ue set written");

        let attack_count = self.prepare_attack()?;
        info!(records = attack_count, "attack set written");

        // Re-read from the CSVs so the balanced sets are built from exactly
        // what was persisted, not what is still in memory.
        let normal_1ue = dataset::read_csv(&self.out_path(&output.normal_1ue_csv))?;
        let normal_2ue = dataset::read_csv(&self.out_path(&output.normal_2ue_csv))?;
        let attack = dataset::read_csv(&self.out_path(&output.attack_csv))?;

        let tensor_cfg = &self.config.tensor;
        let mixed = mix::build_mixed(
            attack,
            normal_1ue.clone(),
            normal_2ue.clone(),
            &self.config.sampling,
        );
        info!(
            records = mixed.len(),
            expected = 2 * attack_count,
            "mixed set assembled"
        );

        let labels = mixed.labels();
        tensor::write_labels(&self.out_path(&output.mixed_labels_npy), &labels)?;
        let mixed_tensor =
            tensor::to_tensor(&mixed, tensor_cfg.max_packet_len, tensor_cfg.fill_byte)?;
        tensor::write_tensor(&self.out_path(&output.mixed_npy), &mixed_tensor)?;
        let mixed_count = mixed.len();
        drop(mixed);

        let total_normal = mix::build_total_normal(
            normal_1ue.clone(),
            normal_2ue.clone(),
            &self.config.sampling,
        );
        info!(records = total_normal.len(), "combined-normal set assembled");

        for (set, name) in [
            (&normal_1ue, &output.normal_1ue_npy),
            (&normal_2ue, &output.normal_2ue_npy),
            (&total_normal, &output.total_normal_npy),
        ] {
            let t = tensor::to_tensor(set, tensor_cfg.max_packet_len, tensor_cfg.fill_byte)?;
            tensor::write_tensor(&self.out_path(name), &t)?;
        }

        Ok(RunSummary {
            normal_1ue: normal_1ue.len(),
            normal_2ue: normal_2ue.len(),
            attack: attack_count,
            mixed: mixed_count,
            total_normal: total_normal.len(),
        })
    }
}
