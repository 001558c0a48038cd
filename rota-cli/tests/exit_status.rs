use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const TEMPLATE: &str = "Dorm tasks\n\n\n,Task,Ann,Bo\n,Kitchen\n";

fn rota(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rota"))
        .current_dir(dir)
        .env("RUST_LOG", "off")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_plan_success_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("DormTasks.csv"), TEMPLATE).unwrap();

    let out = rota(dir.path(), &["plan", "--due", "2026-10-19", "--seed", "1"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Plan created"), "stdout: {stdout}");
    assert!(stdout.contains("Kitchen -> "));
    assert!(dir.path().join("WeeklyPlans/Tasks_2026-10-19.csv").exists());
    assert!(dir.path().join("docs/WeeklyPlans/Tasks_latest.csv").exists());
}

#[test]
fn test_everyone_absent_exits_one_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("DormTasks.csv"), TEMPLATE).unwrap();

    let out = rota(
        dir.path(),
        &["plan", "--due", "2026-10-19", "--absent", "Ann,Bo"],
    );
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no eligible person left for task 'Kitchen'"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
    assert!(!dir.path().join("WeeklyPlans/Tasks_2026-10-19.csv").exists());
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_tally_prints_counts_in_roster_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("DormTasks.csv"), TEMPLATE).unwrap();

    let out = rota(dir.path(), &["tally"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let ann = stdout.find("Ann").unwrap();
    let bo = stdout.find("Bo").unwrap();
    assert!(ann < bo);
    assert!(!dir.path().join("WeeklyPlans").exists());
}
