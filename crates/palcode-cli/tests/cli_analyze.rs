// crates/palcode-cli/tests/cli_analyze.rs

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_palcode-cli"))
        .args(args)
        .output()
        .expect("run palcode-cli")
}

fn stdout_ok(args: &[&str]) -> String {
    let out = run_cli(args);
    assert!(
        out.status.success(),
        "{:?} failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        args,
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).expect("utf8 stdout")
}

#[test]
fn analyze_prints_summary() {
    let s = stdout_ok(&["analyze"]);
    assert!(s.contains("mae             = 0.2206"), "{s}");
    assert!(s.contains("max_error       = 1"), "{s}");
    assert!(s.contains("min_error       = -48"), "{s}");
    assert!(s.contains("non_zero        = 26 (out of 399 values)"), "{s}");
    assert!(s.contains("percent_correct = 93.48%"), "{s}");
    assert!(s.contains("reference       = embedded"), "{s}");
}

#[test]
fn analyze_json_with_bands_and_worst() {
    let s = stdout_ok(&["analyze", "--fmt", "json", "--bands", "--top", "2"]);
    let v: serde_json::Value = serde_json::from_str(&s).expect("json");
    assert_eq!(v["summary"]["non_zero"], 26);
    assert_eq!(v["summary"]["min_error"], -48);
    assert_eq!(v["bands"].as_array().map(Vec::len), Some(7));
    assert_eq!(v["bands"][3]["non_zero"], 9);
    assert_eq!(v["worst"][0]["index"], 40);
    assert_eq!(v["worst"][0]["error"], serde_json::json!([0, -16, -48]));
}

#[test]
fn analyze_is_repeatable() {
    assert_eq!(stdout_ok(&["analyze", "--bands"]), stdout_ok(&["analyze", "--bands"]));
}

#[test]
fn short_reference_file_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("short.txt");
    let mut text = String::from("# only two entries\n");
    text.push_str("#FFFFFF\n#FFD4BF\n");
    std::fs::write(&path, text).expect("write reference");

    let out = run_cli(&["analyze", "--reference", path.to_str().unwrap()]);
    assert!(!out.status.success());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("reference has 2 entries, expected 133"), "{err}");
}

#[test]
fn reference_file_equal_to_formula_is_exact() {
    let encoded = stdout_ok(&["encode", "--fmt", "jsonl"]);
    let mut text = String::new();
    for line in encoded.lines() {
        let v: serde_json::Value = serde_json::from_str(line).expect("jsonl");
        text.push_str(v["hex"].as_str().expect("hex"));
        text.push('\n');
    }

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("self.txt");
    std::fs::write(&path, text).expect("write reference");

    let s = stdout_ok(&["analyze", "--reference", path.to_str().unwrap()]);
    assert!(s.contains("mae             = 0.0000"), "{s}");
    assert!(s.contains("non_zero        = 0 (out of 399 values)"), "{s}");
    assert!(s.contains("percent_correct = 100.00%"), "{s}");
}

#[test]
fn series_csv_to_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("series.csv");
    stdout_ok(&["series", "--out", path.to_str().unwrap()]);

    let csv = std::fs::read_to_string(&path).expect("read series");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 134);
    assert_eq!(lines[0], "index,band,slot,red,green,blue");
    assert_eq!(lines[1], "0,0,0,0,0,0");
    assert_eq!(lines[41], "40,2,2,0,-16,-48");
}

#[test]
fn series_jsonl_to_stdout() {
    let s = stdout_ok(&["series", "--fmt", "jsonl"]);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 133);
    assert_eq!(lines[19], r#"{"index":19,"red":1,"green":1,"blue":1}"#);
}
