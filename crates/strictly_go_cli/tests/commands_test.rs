//! Tests for CLI subcommands driven through argument parsing.

use clap::Parser;
use std::path::Path;
use strictly_go_cli::{Cli, EngineConfig, run};
use tempfile::TempDir;

fn write_sgf(dir: &TempDir, text: &str) -> String {
    let path = dir.path().join("game.sgf");
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

fn run_args(args: &[&str]) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    run(&cli, &EngineConfig::default())
}

#[test]
fn test_score_finished_game() {
    let dir = tempfile::tempdir().unwrap();
    let sgf = write_sgf(&dir, "(;FF[4]SZ[5]RU[NZ]KM[0.5]\n;B[cc];W[];B[])");
    let out = run_args(&["strictly_go", "score", &sgf]).unwrap();
    assert_eq!(out, "B 25\nW 0.5\nResult: B+24.5");
}

#[test]
fn test_score_unfinished_game() {
    let dir = tempfile::tempdir().unwrap();
    let sgf = write_sgf(&dir, "(;FF[4]SZ[5]\n;B[cc])");
    let out = run_args(&["strictly_go", "score", &sgf]).unwrap();
    assert!(out.ends_with("Result: in progress (not finished)"));
}

#[test]
fn test_legal_lists_gtp_vertices() {
    let dir = tempfile::tempdir().unwrap();
    let sgf = write_sgf(&dir, "(;FF[4]SZ[2]\n;B[aa])");
    let out = run_args(&["strictly_go", "legal", &sgf]).unwrap();
    assert_eq!(out, "A2 B1 B2 pass");

    let out = run_args(&["strictly_go", "legal", &sgf, "--no-pass"]).unwrap();
    assert_eq!(out, "A2 B1 B2");
}

#[test]
fn test_show_earlier_turn() {
    let dir = tempfile::tempdir().unwrap();
    let sgf = write_sgf(&dir, "(;FF[4]SZ[3]\n;B[aa];W[bb])");
    let out = run_args(&["strictly_go", "show", &sgf, "--turn", "1"]).unwrap();
    assert!(out.starts_with("Turn 1, W to move"));
    assert!(out.contains('X'));
    assert!(!out.contains('O'));

    assert!(run_args(&["strictly_go", "show", &sgf, "--turn", "9"]).is_err());
}

#[test]
fn test_unchecked_flag_loads_illegal_record() {
    let dir = tempfile::tempdir().unwrap();
    let sgf = write_sgf(&dir, "(;FF[4]SZ[3]\n;B[aa];W[aa])");
    assert!(run_args(&["strictly_go", "score", &sgf]).is_err());
    assert!(run_args(&["strictly_go", "--unchecked", "score", &sgf]).is_ok());
}

#[test]
fn test_analysis_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let sgf = write_sgf(&dir, "(;FF[4]SZ[9]KM[7.5]\n;B[dd];W[])");
    let output = dir.path().join("query.json");
    let output_arg = output.display().to_string();
    run_args(&[
        "strictly_go",
        "analysis",
        &sgf,
        "--id",
        "g1",
        "--max-visits",
        "100",
        "--output",
        &output_arg,
    ])
    .unwrap();

    let text = std::fs::read_to_string(Path::new(&output)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["id"], "g1");
    assert_eq!(value["moves"][0][1], "D4");
    assert_eq!(value["moves"][1][1], "pass");
    assert_eq!(value["maxVisits"], 100);
    assert_eq!(value["analyzeTurns"][0], 2);
}

#[test]
fn test_mirror_reply() {
    assert_eq!(run_args(&["strictly_go", "mirror", "D4"]).unwrap(), "Q16");
    assert_eq!(
        run_args(&["strictly_go", "mirror", "a1", "--size", "9"]).unwrap(),
        "J9"
    );
    assert!(run_args(&["strictly_go", "mirror", "T19", "--size", "9"]).is_err());
}
