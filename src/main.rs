//! pcap-dataprep entrypoint: one-shot offline batch run. Reads the three
//! capture source directories, writes labeled CSVs and padded `.npy` tensors
//! to the output directory, overwriting previous outputs.

use pcap_dataprep::{
    config::PrepConfig, logging::StructuredLogger, pipeline::PrepPipeline,
};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("PREP_CONFIG_PATH")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| std::path::PathBuf::from("config.json"));
    let config = PrepConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(output_dir = ?config.output.dir, "dataset preparation starting");

    let pipeline = PrepPipeline::new(config);
    let summary = pipeline.run()?;

    info!(
        normal_1ue = summary.normal_1ue,
        normal_2ue = summary.normal_2ue,
        attack = summary.attack,
        mixed = summary.mixed,
        total_normal = summary.total_normal,
        "dataset preparation complete"
    );
    StructuredLogger::emit_json(&summary, &mut std::io::stdout());

    Ok(())
}
