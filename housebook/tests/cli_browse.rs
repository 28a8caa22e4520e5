//! CLI tests for the housebook binary.
//!
//! Spawns the real binary with a piped menu script and verifies exit
//! codes, record output, and skip diagnostics.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use housebook::exit_codes;

const MIXED_INPUT: &str = "\
\"Иванов Иван Иванович\" 15.06.2020 500000
John123\" 01.01.2020 100
\"Петров Олег\" 01.01.2019 250000
\"Сидоров Антон\" 29.02.2021 100
\"Smith John\" 29.02.2020 0
";

fn run_housebook(dir: &Path, args: &[&str], script: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_housebook"))
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn housebook");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(script.as_bytes())
        .expect("write menu script");

    child.wait_with_output().expect("wait for housebook")
}

#[test]
fn missing_file_exits_with_open_failed() {
    let temp = tempfile::tempdir().expect("tempdir");

    let output = run_housebook(temp.path(), &["missing.txt"], "");

    assert_eq!(output.status.code(), Some(exit_codes::OPEN_FAILED));
    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("open input file"));
}

#[test]
fn mixed_input_shows_valid_records_and_diagnoses_skips() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("records.txt"), MIXED_INPUT).expect("write input");

    let output = run_housebook(temp.path(), &["records.txt"], "1\n5\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let first = stdout.find("Owner: Иванов Иван Иванович").expect("first record");
    let second = stdout.find("Owner: Петров Олег").expect("second record");
    let third = stdout.find("Owner: Smith John").expect("third record");
    assert!(first < second && second < third);
    assert!(stdout.contains("Date: 15.6.2020"));
    assert!(stdout.contains("Cost: 0 rub."));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert_eq!(stderr.matches("skipping line").count(), 2);
    assert!(stderr.contains("skipping line 2: invalid line format"));
    assert!(stderr.contains("skipping line 4: no such calendar date"));
}

#[test]
fn date_sort_choice_prints_records_chronologically() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(temp.path().join("records.txt"), MIXED_INPUT).expect("write input");

    let output = run_housebook(temp.path(), &["records.txt"], "4\n5\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let first = stdout.find("Date: 1.1.2019").expect("earliest date");
    let second = stdout.find("Date: 29.2.2020").expect("middle date");
    let third = stdout.find("Date: 15.6.2020").expect("latest date");
    assert!(first < second && second < third);
}

#[test]
fn no_args_reads_default_input_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("1.txt"),
        "\"Иванов Иван\" 15.06.2020 500000\n",
    )
    .expect("write input");

    let output = run_housebook(temp.path(), &[], "1\n5\n");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    assert!(stdout.contains("Owner: Иванов Иван"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let temp = tempfile::tempdir().expect("tempdir");
    fs::write(
        temp.path().join("1.txt"),
        "\"Иванов Иван\" 15.06.2020 500000\n",
    )
    .expect("write input");

    let output = run_housebook(temp.path(), &[], "");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
}
