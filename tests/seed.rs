use std::{fs, path::Path};

use compte_seed::{config::SeedConfig, errors::Error, run, types::ArticleKind};
use serde_json::{json, Value};
use tempfile::TempDir;

fn base_dir_with(depense: Option<&str>, recette: Option<&str>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    if let Some(contents) = depense {
        fs::write(dir.path().join("data/article_depense.json"), contents).unwrap();
    }
    if let Some(contents) = recette {
        fs::write(dir.path().join("data/article_recette.json"), contents).unwrap();
    }
    dir
}

fn read_output(base_dir: &Path) -> Value {
    let contents = fs::read_to_string(base_dir.join("prisma_seed.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn test_end_to_end() {
    let dir = base_dir_with(
        Some(r#"{"datas":[{"Mnem":"Loyer","Compte":{"Oid":601,"Case":"CA"}}]}"#),
        Some(r#"{"datas":[{"Mnem":"Ventes","Compte":{"Oid":701}}]}"#),
    );
    let summary = run(&SeedConfig::from_base_dir(dir.path())).unwrap();
    assert_eq!(summary.records, 2);
    assert_eq!(
        summary.per_kind,
        vec![(ArticleKind::Depense, 1), (ArticleKind::Recette, 1)]
    );
    assert!(summary.missing.is_empty());
    assert_eq!(summary.output_file, dir.path().join("prisma_seed.json"));
    assert_eq!(
        read_output(dir.path()),
        json!([
            {"compteid": 601, "mnem": "Loyer", "caseCerfa": "CA"},
            {"compteid": 701, "mnem": "Ventes", "caseCerfa": ""}
        ])
    );
}

#[test]
fn test_count_and_order_across_files() {
    let dir = base_dir_with(
        Some(r#"{"datas":[{"Mnem":"A"},{"Mnem":"B"},{}]}"#),
        Some(r#"{"datas":[{"Mnem":"C"},{"Mnem":"A"}]}"#),
    );
    let summary = run(&SeedConfig::from_base_dir(dir.path())).unwrap();
    assert_eq!(summary.records, 5);
    let labels: Vec<_> = read_output(dir.path())
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["mnem"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(labels, vec!["A", "B", "", "C", "A"]);
}

#[test]
fn test_missing_revenue_file() {
    let dir = base_dir_with(Some(r#"{"datas":[{"Mnem":"Loyer"}]}"#), None);
    let config = SeedConfig::from_base_dir(dir.path());
    let summary = run(&config).unwrap();
    assert_eq!(summary.missing, vec![config.input_file(ArticleKind::Recette)]);
    assert_eq!(summary.per_kind, vec![(ArticleKind::Depense, 1)]);
    assert_eq!(
        read_output(dir.path()),
        json!([{"compteid": 0, "mnem": "Loyer", "caseCerfa": ""}])
    );
}

#[test]
fn test_both_files_missing() {
    let dir = base_dir_with(None, None);
    let config = SeedConfig::from_base_dir(dir.path());
    let summary = run(&config).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(summary.missing.len(), 2);
    let contents = fs::read_to_string(config.output_file()).unwrap();
    assert_eq!(contents, "[]");
}

#[test]
fn test_malformed_input_aborts_before_writing() {
    let dir = base_dir_with(
        Some(r#"{"datas":[{"Mnem":"Loyer"}]}"#),
        Some(r#"{"datas":[{"Mnem":"#),
    );
    let config = SeedConfig::from_base_dir(dir.path());
    match run(&config) {
        Err(Error::Parse { path, .. }) => {
            assert_eq!(path, config.input_file(ArticleKind::Recette))
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
    assert!(!config.output_file().exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = base_dir_with(None, None);
    fs::create_dir(dir.path().join("prisma_seed.json")).unwrap();
    let config = SeedConfig::from_base_dir(dir.path());
    assert!(matches!(run(&config), Err(Error::Write { .. })));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = base_dir_with(
        Some(r#"{"datas":[{"Mnem":"Électricité","Compte":{"Oid":606,"Case":"2042"}}]}"#),
        Some(r#"{"datas":[{"Mnem":"Ventes","Compte":{"Oid":701,"Case":""}}]}"#),
    );
    let config = SeedConfig::from_base_dir(dir.path());
    run(&config).unwrap();
    let first = fs::read(config.output_file()).unwrap();
    run(&config).unwrap();
    let second = fs::read(config.output_file()).unwrap();
    assert_eq!(first, second);
    let text = String::from_utf8(first).unwrap();
    assert!(text.contains("Électricité"));
    assert!(text.contains("\"caseCerfa\": \"2042\""));
}

#[test]
fn test_overwrites_existing_output() {
    let dir = base_dir_with(Some(r#"{"datas":[]}"#), None);
    let config = SeedConfig::from_base_dir(dir.path());
    fs::write(config.output_file(), "stale contents that are longer than the new ones").unwrap();
    run(&config).unwrap();
    assert_eq!(fs::read_to_string(config.output_file()).unwrap(), "[]");
}
