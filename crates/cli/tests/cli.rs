use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fast_run_args() -> Vec<&'static str> {
    vec![
        "run",
        "--carrying-capacity",
        "50",
        "--wildtype",
        "50",
        "--mutation-rate",
        "0.05",
        "--migration-rate",
        "5",
        "--max-generations",
        "50",
        "--seed",
        "7",
    ]
}

#[test]
fn test_run_reports_outcome() {
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args(fast_run_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Trajectory complete!"))
        .stdout(predicate::str::contains("Generations:"))
        .stdout(predicate::str::contains("Stop Reason:"));
}

#[test]
fn test_run_is_reproducible_under_seed() {
    let first = Command::cargo_bin("rescuevo")
        .unwrap()
        .args(fast_run_args())
        .output()
        .unwrap();
    let second = Command::cargo_bin("rescuevo")
        .unwrap()
        .args(fast_run_args())
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_run_trace_prints_generation_table() {
    let mut args = fast_run_args();
    args.push("--trace");
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args(args)
        .assert()
        .success()
        .stdout(predicate::str::contains("generation"))
        .stdout(predicate::str::contains("wildtype"));
}

#[test]
fn test_run_rejects_invalid_decay_rate() {
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args(["run", "--decay-rate", "1.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decay rate"));
}

#[test]
fn test_sweep_prints_table() {
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args([
        "sweep",
        "--param",
        "migration-rate",
        "--values",
        "1,5",
        "--reps",
        "3",
        "--carrying-capacity",
        "50",
        "--wildtype",
        "50",
        "--mutation-rate",
        "0.05",
        "--max-generations",
        "50",
        "--no-progress",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("Sweep Results"))
    .stdout(predicate::str::contains("migration-rate"));
}

#[test]
fn test_sweep_writes_csv() {
    let temp = tempdir().unwrap();
    let out_path = temp.path().join("sweep.csv");

    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args([
        "sweep",
        "--param",
        "migration-rate",
        "--values",
        "1,5",
        "--reps",
        "3",
        "--carrying-capacity",
        "50",
        "--wildtype",
        "50",
        "--mutation-rate",
        "0.05",
        "--max-generations",
        "50",
        "--format",
        "csv",
        "--no-progress",
        "--output",
    ])
    .arg(&out_path)
    .assert()
    .success()
    .stdout(predicate::str::contains("Results written to"));

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("parameter_value,summary,replicates"));
    assert_eq!(lines.clone().count(), 2);
    for line in lines {
        assert!(line.ends_with(",3"), "unexpected row: {line}");
    }
}

#[test]
fn test_sweep_linear_grid() {
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args([
        "sweep",
        "--param",
        "migration-rate",
        "--from",
        "1",
        "--to",
        "9",
        "--steps",
        "3",
        "--reps",
        "2",
        "--carrying-capacity",
        "50",
        "--wildtype",
        "50",
        "--mutation-rate",
        "0.05",
        "--max-generations",
        "50",
        "--format",
        "csv",
        "--no-progress",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("1,"))
    .stdout(predicate::str::contains("5,"))
    .stdout(predicate::str::contains("9,"));
}

#[test]
fn test_sweep_unknown_parameter_fails() {
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args(["sweep", "--param", "bogus", "--values", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown parameter"));
}

#[test]
fn test_sweep_requires_a_grid() {
    let mut cmd = Command::cargo_bin("rescuevo").unwrap();
    cmd.args(["sweep", "--param", "migration-rate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--values or --from/--to/--steps"));
}
