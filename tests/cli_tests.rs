//! End-to-end tests of the rna-search binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const TARGET: &str = ">rec1\nAAAAA\n>rec2\nAAAAT\n>rec3\nCCAAAACC\n";

fn rna_search(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rna-search").expect("binary should build");
    cmd.current_dir(dir.path());
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) {
    std::fs::write(dir.path().join(name), content).expect("failed to write fixture");
}

#[test]
fn test_legacy_flags_write_report() {
    let dir = TempDir::new().unwrap();
    write(&dir, "target.fna", TARGET);
    write(
        &dir,
        "sonuclar_5_run1.txt",
        "Found in pair 1\nScore: 10\nRefer: aaaaG\nQuery: TTTTT\n",
    );

    rna_search(&dir)
        .args([
            "-min", "4", "-max", "6", "-ord", "1", "-rid", "0", "-tol", "0", "-target",
            "target.fna",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed processing!"))
        .stdout(predicate::str::contains("Elapsed time: "));

    let report = std::fs::read_to_string(dir.path().join("RNA_5.txt")).unwrap();
    assert_eq!(
        report,
        "> AAAA\n    Line:3, Src: sonuclar_5_run1.txt: 3\n    Line:5, Src: sonuclar_5_run1.txt: 3\n    Line:7, Src: sonuclar_5_run1.txt: 3\n"
    );
    assert!(!dir.path().join("RNA_4.txt").exists());
    assert!(!dir.path().join("RNA_6.txt").exists());
}

#[test]
fn test_query_field_and_json_output() {
    let dir = TempDir::new().unwrap();
    write(&dir, "target.fna", TARGET);
    write(
        &dir,
        "sonuclar_5.txt",
        "Found in pair 1\nRefer: GGGGG\nQuery: CCAAX\n",
    );
    std::fs::create_dir(dir.path().join("out")).unwrap();

    rna_search(&dir)
        .args([
            "--min", "5", "--max", "5", "--ord", "2", "--rid", "0", "--tol", "0", "--target",
            "target.fna", "--out-dir", "out", "--format", "json",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join("out/RNA_5.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["length"], 5);
    assert_eq!(value["queries"][0]["query"], "CCAA");
    assert_eq!(value["queries"][0]["matches"][0]["reference_line"], 7);
    assert_eq!(value["queries"][0]["matches"][0]["source_line"], 3);
}

#[test]
fn test_no_sources_no_report() {
    let dir = TempDir::new().unwrap();
    write(&dir, "target.fna", TARGET);

    rna_search(&dir)
        .args([
            "-min", "20", "-max", "24", "-ord", "1", "-rid", "0", "-tol", "0", "-target",
            "target.fna",
        ])
        .assert()
        .success();

    let reports: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("RNA_"))
        .collect();
    assert!(reports.is_empty());
}

#[test]
fn test_missing_argument_exits_with_one() {
    let dir = TempDir::new().unwrap();

    rna_search(&dir)
        .args(["-min", "20", "-max", "24", "-ord", "1", "-rid", "0", "-tol", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--target"));
}

#[test]
fn test_invalid_ord_exits_with_one() {
    let dir = TempDir::new().unwrap();

    rna_search(&dir)
        .args([
            "-min", "20", "-max", "24", "-ord", "3", "-rid", "0", "-tol", "0", "-target",
            "target.fna",
        ])
        .assert()
        .code(1);
}

#[test]
fn test_missing_target_fails() {
    let dir = TempDir::new().unwrap();

    rna_search(&dir)
        .args([
            "-min", "5", "-max", "5", "-ord", "1", "-rid", "0", "-tol", "0", "-target",
            "missing.fna",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.fna"));
}
