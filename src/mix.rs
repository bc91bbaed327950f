//! Balanced set construction: the mixed evaluation set (equal parts attack
//! and normal) and the combined-normal training set (equal parts 1-UE and
//! 2-UE traffic).

use crate::config::SamplingConfig;
use crate::dataset::Dataset;

/// Every attack record plus `len(attack)/2` records drawn from each normal
/// condition, globally reshuffled. Total size is `2 * len(attack)` for even
/// attack counts; an odd count loses one record to the integer halving.
pub fn build_mixed(
    attack: Dataset,
    normal_1ue: Dataset,
    normal_2ue: Dataset,
    sampling: &SamplingConfig,
) -> Dataset {
    let half = attack.len() / 2;
    let mut mixed = attack.seeded_shuffled(sampling.draw_seed);
    mixed.extend(normal_1ue.seeded_shuffled(sampling.draw_seed).truncated(half));
    mixed.extend(normal_2ue.seeded_shuffled(sampling.draw_seed).truncated(half));
    mixed.seeded_shuffled(sampling.mix_seed)
}

/// All of Normal-1UE plus a draw from Normal-2UE capped at the 1-UE count,
/// concatenated and reshuffled. The 2-UE condition produces more traffic, so
/// the cap keeps the two conditions in equal parts.
pub fn build_total_normal(
    normal_1ue: Dataset,
    normal_2ue: Dataset,
    sampling: &SamplingConfig,
) -> Dataset {
    let cap = normal_1ue.len();
    let mut combined = normal_1ue.seeded_shuffled(sampling.normal_seed);
    combined.extend(normal_2ue.seeded_shuffled(sampling.draw_seed).truncated(cap));
    combined.seeded_shuffled(sampling.normal_seed)
}
