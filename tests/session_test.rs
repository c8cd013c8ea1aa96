use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

// The session is driven end-to-end through the binary with scripted stdin;
// the --log-locally flag keeps the log file inside the temporary directory.

#[test]
fn test_full_session_creates_files() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("fmint")
        .unwrap()
        .current_dir(dir.path())
        .arg("--log-locally")
        .write_stdin("Notes\n4\n2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total files created: 2"));

    assert!(dir.path().join("Created-Files/csv/Notes_1.csv").is_file());
    assert!(dir.path().join("Created-Files/csv/Notes_2.csv").is_file());
}

#[test]
fn test_invalid_count_is_reprompted() {
    let dir = tempdir().unwrap();

    // Count "-3" is rejected; the retry with "1" succeeds
    Command::cargo_bin("fmint")
        .unwrap()
        .current_dir(dir.path())
        .arg("--log-locally")
        .write_stdin("Report_0\n5\n-3\n1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("positive integer"))
        .stdout(predicate::str::contains("Total files created: 1"));

    assert!(dir.path().join("Created-Files/md/Report_1.md").is_file());
}

#[test]
fn test_invalid_selection_is_reprompted() {
    let dir = tempdir().unwrap();

    // Selection "9" is out of menu range; the retry with "6" succeeds
    Command::cargo_bin("fmint")
        .unwrap()
        .current_dir(dir.path())
        .arg("--log-locally")
        .write_stdin("Config_0\n9\n6\n1\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("between 1 and 6"));

    assert!(dir.path().join("Created-Files/yaml/Config_1.yaml").is_file());
}

#[test]
fn test_dry_run_creates_nothing() {
    let dir = tempdir().unwrap();

    Command::cargo_bin("fmint")
        .unwrap()
        .current_dir(dir.path())
        .args(["--log-locally", "--dry"])
        .write_stdin("Notes\n4\n2\nn\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files that would be created: 2"));

    assert!(
        !dir.path().join("Created-Files").exists(),
        "Dry run must not touch the filesystem"
    );
}

#[test]
fn test_output_option_overrides_root() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("minted");

    Command::cargo_bin("fmint")
        .unwrap()
        .current_dir(dir.path())
        .args(["--log-locally", "--output", out.to_str().unwrap()])
        .write_stdin("Notes\n4\n1\nn\n")
        .assert()
        .success();

    assert!(out.join("csv/Notes_1.csv").is_file());
    assert!(!dir.path().join("Created-Files").exists());
}
