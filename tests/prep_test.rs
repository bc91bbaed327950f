//! Unit-level tests: padding, shuffling, balanced-set sizes, CSV and
//! checkpoint round-trips, config defaults.

use pcap_dataprep::config::{PrepConfig, SamplingConfig};
use pcap_dataprep::dataset::{self, Dataset, Label, Record};
use pcap_dataprep::{mix, tensor};
use std::collections::HashMap;
use std::path::Path;

fn payload_set(n: usize, label: Label) -> Dataset {
    let payloads = (0..n).map(|i| hex::encode(format!("pkt{}", i))).collect();
    Dataset::from_payloads(payloads, label)
}

#[test]
fn config_load_default() {
    let c = PrepConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.tensor.max_packet_len, 1024);
    assert_eq!(c.tensor.fill_byte, 0);
    assert_eq!(c.sampling.draw_seed, 100);
    assert_eq!(c.sources.normal_prefix, "allcap");
}

#[test]
fn pad_truncates_long_payload() {
    let long = vec![0xabu8; 2000];
    let out = tensor::pad_payload(&long, 1024, 0);
    assert_eq!(out.len(), 1024);
    assert_eq!(out, &long[..1024]);
}

#[test]
fn pad_fills_short_payload() {
    let short = vec![0x11u8; 10];
    let out = tensor::pad_payload(&short, 1024, 0);
    assert_eq!(out.len(), 1024);
    assert_eq!(&out[..10], &short[..]);
    assert!(out[10..].iter().all(|&b| b == 0));
    assert_eq!(out[10..].len(), 1014);
}

#[test]
fn pad_is_idempotent() {
    let exact = vec![0x42u8; 1024];
    let once = tensor::pad_payload(&exact, 1024, 0);
    let twice = tensor::pad_payload(&once, 1024, 0);
    assert_eq!(once, exact);
    assert_eq!(twice, once);
}

#[test]
fn tensor_shape_and_order() {
    let set = Dataset::new(vec![
        Record {
            raw: hex::encode([1u8, 2, 3]),
            label: Label::Normal,
        },
        Record {
            raw: hex::encode(vec![9u8; 40]),
            label: Label::Attack,
        },
    ]);
    let t = tensor::to_tensor(&set, 32, 0xff).unwrap();
    assert_eq!(t.shape(), &[2, 32, 1, 1]);
    // first row: payload then fill
    assert_eq!(t[[0, 0, 0, 0]], 1);
    assert_eq!(t[[0, 2, 0, 0]], 3);
    assert_eq!(t[[0, 3, 0, 0]], 0xff);
    // second row: truncated to 32
    assert_eq!(t[[1, 31, 0, 0]], 9);
}

#[test]
fn tensor_rejects_empty_set() {
    let set = Dataset::default();
    assert!(tensor::to_tensor(&set, 32, 0).is_err());
}

#[test]
fn shuffle_is_a_permutation() {
    let mut set = payload_set(500, Label::Normal);
    let count = |s: &Dataset| {
        let mut m = HashMap::new();
        for r in s.records() {
            *m.entry(r.raw.clone()).or_insert(0u32) += 1;
        }
        m
    };
    let before = count(&set);
    set.shuffle(&mut rand::thread_rng());
    assert_eq!(count(&set), before);
    assert_eq!(set.len(), 500);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let a = payload_set(100, Label::Normal).seeded_shuffled(7);
    let b = payload_set(100, Label::Normal).seeded_shuffled(7);
    assert_eq!(a.records(), b.records());
}

#[test]
fn mixed_set_is_twice_attack_size() {
    let sampling = SamplingConfig {
        draw_seed: 100,
        mix_seed: 1,
        normal_seed: 2022,
    };
    let mixed = mix::build_mixed(
        payload_set(100, Label::Attack),
        payload_set(1000, Label::Normal),
        payload_set(1000, Label::Normal),
        &sampling,
    );
    assert_eq!(mixed.len(), 200);
    let attacks = mixed
        .records()
        .iter()
        .filter(|r| r.label == Label::Attack)
        .count();
    assert_eq!(attacks, 100);
}

#[test]
fn mixed_set_odd_attack_count_rounds_down() {
    let sampling = SamplingConfig {
        draw_seed: 100,
        mix_seed: 1,
        normal_seed: 2022,
    };
    let mixed = mix::build_mixed(
        payload_set(101, Label::Attack),
        payload_set(400, Label::Normal),
        payload_set(400, Label::Normal),
        &sampling,
    );
    // 101 attack + 2 * (101 / 2) normal
    assert_eq!(mixed.len(), 201);
}

#[test]
fn labels_align_with_records() {
    let sampling = SamplingConfig {
        draw_seed: 100,
        mix_seed: 1,
        normal_seed: 2022,
    };
    let mixed = mix::build_mixed(
        payload_set(50, Label::Attack),
        payload_set(200, Label::Normal),
        payload_set(200, Label::Normal),
        &sampling,
    );
    let labels = mixed.labels();
    assert_eq!(labels.len(), mixed.len());
    for (label, record) in labels.iter().zip(mixed.records()) {
        assert_eq!(*label, record.label);
    }
}

#[test]
fn total_normal_caps_2ue_draw() {
    let sampling = SamplingConfig {
        draw_seed: 100,
        mix_seed: 1,
        normal_seed: 2022,
    };
    let combined = mix::build_total_normal(
        payload_set(300, Label::Normal),
        payload_set(1000, Label::Normal),
        &sampling,
    );
    assert_eq!(combined.len(), 600);
}

#[test]
fn csv_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("set.csv");
    let set = Dataset::new(vec![
        Record {
            raw: "deadbeef".to_string(),
            label: Label::Attack,
        },
        Record {
            raw: "0001".to_string(),
            label: Label::Normal,
        },
    ]);
    dataset::write_csv(&set, &path).unwrap();
    let back = dataset::read_csv(&path).unwrap();
    assert_eq!(back.records(), set.records());

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("raw,label"));
    assert!(text.contains("deadbeef,attack"));
    assert!(text.contains("0001,normal"));
}

#[test]
fn checkpoint_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("2ue.json");
    let payloads = vec!["aa".to_string(), "bbcc".to_string()];
    dataset::checkpoint_write(&payloads, &path).unwrap();
    assert_eq!(dataset::checkpoint_read(&path).unwrap(), payloads);
}

#[test]
fn label_encoding() {
    assert_eq!(Label::Normal.as_u8(), 0);
    assert_eq!(Label::Attack.as_u8(), 1);
}
