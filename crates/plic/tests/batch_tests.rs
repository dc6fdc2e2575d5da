use std::fs;
use std::path::Path;

use plic::analyze::SitePolicy;
use plic::batch::{run_batch, run_batch_records, BatchConfig, FailurePolicy, RecordOutcome};
use plic::error::PlicError;
use plic::manifest::ManifestRecord;
use plic::report::{results_path, write_results};
use plic::streaming::StreamEmitter;

mod common;
use common::{temp_dir, write_ligand, write_protein, write_text, WATER_PDB};

fn config(manifest: &Path, data_dir: &Path, temp_dir: &Path) -> BatchConfig {
    BatchConfig {
        manifest: manifest.to_path_buf(),
        data_dir: data_dir.to_path_buf(),
        temp_dir: temp_dir.to_path_buf(),
        site_policy: SitePolicy::First,
        failure_policy: FailurePolicy::FailFast,
    }
}

fn temp_files_left(dir: &Path) -> usize {
    fs::read_dir(dir).map(|d| d.count()).unwrap_or(0)
}

#[test]
fn single_row_scenario_end_to_end() {
    let data = temp_dir("data_single");
    let temp = temp_dir("tmp_single");
    let results = temp_dir("res_single");
    write_protein(&data, "p.pdb");
    write_ligand(&data, "l.pdb");
    let manifest = data.join("val.csv");
    write_text(&manifest, "protein,ligand,key,pk\np.pdb,l.pdb,complex1,7.4\n");

    let table = run_batch(&config(&manifest, &data, &temp), &StreamEmitter::disabled(), |_| {})
        .expect("batch");
    assert_eq!(table.len(), 1);
    match table.get("complex1") {
        Some(RecordOutcome::Summary(s)) => {
            assert_eq!(s.total, 2);
            assert_eq!(s.hbonds, 1);
            assert_eq!(s.hydrophobic, 1);
            assert!((s.pk - 7.4).abs() < 1e-9);
        }
        other => panic!("expected summary for complex1, got {other:?}"),
    }
    // Temp complex removed after processing.
    assert_eq!(temp_files_left(&temp), 0);

    let output = results_path(&results, &manifest);
    assert_eq!(
        output.file_name().and_then(|s| s.to_str()),
        Some("val_count_interactions.csv")
    );
    write_results(&table, &output).expect("write results");
    let text = fs::read_to_string(&output).expect("read results");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("key,total,hbonds,hydrophobic,pk"));
    assert_eq!(lines.next(), Some("complex1,2,1,1,7.4"));
    assert_eq!(lines.next(), None);

    for dir in [&data, &temp, &results] {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn rows_follow_manifest_order() {
    let data = temp_dir("data_order");
    let temp = temp_dir("tmp_order");
    write_protein(&data, "p.pdb");
    write_ligand(&data, "l.pdb");
    let manifest = data.join("val.csv");
    write_text(
        &manifest,
        "protein,ligand,key,pk\np.pdb,l.pdb,zeta,1.0\np.pdb,l.pdb,alpha,2.0\n",
    );

    let table = run_batch(&config(&manifest, &data, &temp), &StreamEmitter::disabled(), |_| {})
        .expect("batch");
    let keys: Vec<&str> = table.rows().iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    let _ = fs::remove_dir_all(&data);
    let _ = fs::remove_dir_all(&temp);
}

#[test]
fn missing_protein_fails_fast_by_default() {
    let data = temp_dir("data_failfast");
    let temp = temp_dir("tmp_failfast");
    write_ligand(&data, "l.pdb");
    let manifest = data.join("val.csv");
    write_text(&manifest, "protein,ligand,key,pk\nnope.pdb,l.pdb,c1,7.4\n");

    let err = run_batch(&config(&manifest, &data, &temp), &StreamEmitter::disabled(), |_| {})
        .unwrap_err();
    assert!(matches!(err, PlicError::StructureLoad(_)));
    assert_eq!(temp_files_left(&temp), 0);
    let _ = fs::remove_dir_all(&data);
    let _ = fs::remove_dir_all(&temp);
}

#[test]
fn skip_policy_records_failure_and_continues() {
    let data = temp_dir("data_skip");
    let temp = temp_dir("tmp_skip");
    let results = temp_dir("res_skip");
    write_protein(&data, "p.pdb");
    write_ligand(&data, "l.pdb");
    let manifest = data.join("val.csv");
    write_text(
        &manifest,
        "protein,ligand,key,pk\nnope.pdb,l.pdb,bad,5.5\np.pdb,l.pdb,good,7.4\n",
    );

    let mut cfg = config(&manifest, &data, &temp);
    cfg.failure_policy = FailurePolicy::SkipAndRecord;
    let table = run_batch(&cfg, &StreamEmitter::disabled(), |_| {}).expect("batch");
    assert_eq!(table.len(), 2);
    assert_eq!(table.failures(), 1);
    assert!(matches!(
        table.get("bad"),
        Some(RecordOutcome::Failed { .. })
    ));
    assert!(matches!(
        table.get("good"),
        Some(RecordOutcome::Summary(_))
    ));

    // Failure marker row keeps the key and the pass-through label.
    let output = results_path(&results, &manifest);
    write_results(&table, &output).expect("write results");
    let text = fs::read_to_string(&output).expect("read results");
    let mut lines = text.lines().skip(1);
    assert_eq!(lines.next(), Some("bad,,,,5.5"));
    assert_eq!(lines.next(), Some("good,2,1,1,7.4"));

    for dir in [&data, &temp, &results] {
        let _ = fs::remove_dir_all(dir);
    }
}

#[test]
fn water_only_ligand_cleans_temp_file_on_failure() {
    let data = temp_dir("data_water");
    let temp = temp_dir("tmp_water");
    write_protein(&data, "p.pdb");
    let water = data.join("w.pdb");
    write_text(&water, WATER_PDB);
    let manifest = data.join("val.csv");
    write_text(&manifest, "protein,ligand,key,pk\np.pdb,w.pdb,wet,3.3\n");

    // The combine and write steps succeed; analysis fails because water is
    // never a binding site. The temp file must still be removed.
    let err = run_batch(&config(&manifest, &data, &temp), &StreamEmitter::disabled(), |_| {})
        .unwrap_err();
    assert!(matches!(err, PlicError::NoInteractionSite(_)));
    assert_eq!(temp_files_left(&temp), 0);
    let _ = fs::remove_dir_all(&data);
    let _ = fs::remove_dir_all(&temp);
}

#[test]
fn tick_reports_each_record_key() {
    let data = temp_dir("data_tick");
    let temp = temp_dir("tmp_tick");
    write_protein(&data, "p.pdb");
    write_ligand(&data, "l.pdb");
    let manifest = data.join("val.csv");
    write_text(
        &manifest,
        "protein,ligand,key,pk\np.pdb,l.pdb,c1,1.0\np.pdb,l.pdb,c2,2.0\n",
    );

    let mut seen = Vec::new();
    run_batch(&config(&manifest, &data, &temp), &StreamEmitter::disabled(), |key| {
        seen.push(key.to_string());
    })
    .expect("batch");
    assert_eq!(seen, vec!["c1", "c2"]);
    let _ = fs::remove_dir_all(&data);
    let _ = fs::remove_dir_all(&temp);
}

#[test]
fn preloaded_records_are_processed_without_rereading_the_manifest() {
    let data = temp_dir("data_preloaded");
    let temp = temp_dir("tmp_preloaded");
    let protein = write_protein(&data, "p.pdb");
    let ligand = write_ligand(&data, "l.pdb");

    // The manifest named in the config does not exist; only the records
    // passed in are used.
    let cfg = config(Path::new("/nonexistent/val.csv"), &data, &temp);
    let records = vec![ManifestRecord {
        key: "complex1".into(),
        protein_path: protein,
        ligand_path: ligand,
        pk: 7.4,
    }];
    let table = run_batch_records(&cfg, &records, &StreamEmitter::disabled(), |_| {})
        .expect("batch");
    assert_eq!(table.len(), 1);
    assert!(matches!(
        table.get("complex1"),
        Some(RecordOutcome::Summary(_))
    ));
    let _ = fs::remove_dir_all(&data);
    let _ = fs::remove_dir_all(&temp);
}

#[test]
fn missing_manifest_is_an_io_error() {
    let temp = temp_dir("tmp_nomanifest");
    let err = run_batch(
        &config(Path::new("/nonexistent/val.csv"), Path::new("data"), &temp),
        &StreamEmitter::disabled(),
        |_| {},
    )
    .unwrap_err();
    assert!(matches!(err, PlicError::ManifestIo(_)));
    let _ = fs::remove_dir_all(&temp);
}
