use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "allowance";
const AS_OF: &str = "2025-06-01";

fn allowance(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DAILY_ALLOWANCE_DATA_DIR", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("DAILY_ALLOWANCE_AS_OF")
        .args(["--as-of", AS_OF]);
    cmd
}

fn init(dir: &TempDir) {
    allowance(dir)
        .args(["init", "--salary", "60000", "--mandatory", "20000"])
        .assert()
        .success();
}

fn exported_state(dir: &TempDir) -> serde_json::Value {
    let output = allowance(dir)
        .args(["export", "--format", "json"])
        .output()
        .expect("export runs");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn init_prints_allocation() {
    let dir = TempDir::new().unwrap();
    allowance(&dir)
        .args(["init", "--salary", "60000", "--mandatory", "20000"])
        .assert()
        .success()
        .stdout(contains("days 1-30 (30 days)"))
        .stdout(contains("Clean income:"))
        .stdout(contains("40000.00 ₽"))
        .stdout(contains("9000.00 ₽"))
        .stdout(contains("31000.00 ₽"))
        .stdout(contains("1033.33 ₽"))
        .stdout(contains("No expenses"));

    assert!(dir.path().join("data").join("budget.json").exists());
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn init_after_month_end_is_rejected() {
    let dir = TempDir::new().unwrap();
    allowance(&dir)
        .args(["init", "--salary", "1000", "--start-date", "2025-01-31"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn commands_require_a_budget() {
    let dir = TempDir::new().unwrap();
    for args in [vec!["today"], vec!["month"], vec!["add", "10"]] {
        allowance(&dir)
            .args(&args)
            .assert()
            .failure()
            .stderr(contains("No budget has been initialized"));
    }
}

#[test]
fn add_expense_carries_into_next_day() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    allowance(&dir)
        .args(["add", "300", "groceries"])
        .assert()
        .success()
        .stdout(contains("Logged 300.00 ₽ on day 1"))
        .stdout(contains("733.33 ₽"));

    allowance(&dir)
        .args(["today", "--day", "2"])
        .assert()
        .success()
        .stdout(contains("Day 2"))
        .stdout(contains("1766.67 ₽"));

    let state = exported_state(&dir);
    let day1 = &state["budget"]["daysData"][0];
    assert_eq!(day1["expenses"][0]["desc"], "groceries");
    assert_eq!(day1["expenses"][0]["amount"], 300.0);
}

#[test]
fn invalid_amounts_leave_budget_unchanged() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let before = exported_state(&dir)["budget"].clone();

    for raw in ["abc", "0", "-5"] {
        allowance(&dir)
            .args(["add", raw])
            .assert()
            .failure()
            .stderr(contains("Invalid amount"));
    }

    assert_eq!(exported_state(&dir)["budget"], before);
}

#[test]
fn overspending_shows_negative_remainder() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    allowance(&dir)
        .args(["add", "1500", "--day", "1"])
        .assert()
        .success()
        .stdout(contains("-466.67 ₽"))
        .stdout(contains("over limit"));

    allowance(&dir)
        .arg("month")
        .assert()
        .success()
        .stdout(contains(">1"))
        .stdout(contains("-466.67 !"))
        .stdout(contains("Days over limit: 1"));
}

#[test]
fn remove_restores_previous_state() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let before = exported_state(&dir)["budget"].clone();

    allowance(&dir)
        .args(["add", "250", "taxi", "--day", "5"])
        .assert()
        .success();

    let state = exported_state(&dir);
    let id = state["budget"]["daysData"][4]["expenses"][0]["id"]
        .as_u64()
        .expect("numeric id");

    allowance(&dir)
        .args(["remove", &id.to_string(), "--day", "5"])
        .assert()
        .success()
        .stdout(contains(format!("Removed expense #{}", id)));

    assert_eq!(exported_state(&dir)["budget"], before);

    allowance(&dir)
        .args(["remove", &id.to_string(), "--day", "5"])
        .assert()
        .success()
        .stdout(contains("nothing changed"));
}

#[test]
fn unknown_day_is_rejected() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    allowance(&dir)
        .args(["today", "--day", "31"])
        .assert()
        .failure()
        .stderr(contains("Day 31 is not part of the budget"));
}

#[test]
fn export_csv_writes_one_row_per_day() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let out = dir.path().join("june.csv");

    allowance(&dir)
        .args(["export", "--format", "csv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Budget exported to"));

    let text = std::fs::read_to_string(out).unwrap();
    assert_eq!(text.lines().count(), 31);
    assert!(text.starts_with("Day,Base Daily,Available,Spent,Remaining"));
}

#[test]
fn export_yaml_to_stdout() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    allowance(&dir)
        .args(["export", "--format", "yaml"])
        .assert()
        .success()
        .stdout(contains("daysData:").and(contains("mandatoryExpenses:")));
}

#[test]
fn reset_needs_confirmation() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    allowance(&dir)
        .arg("reset")
        .assert()
        .failure()
        .stderr(contains("--yes"));

    allowance(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Budget deleted"));

    allowance(&dir)
        .arg("today")
        .assert()
        .failure()
        .stderr(contains("allowance init"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    allowance(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Budget file:"))
        .stdout(contains("Currency symbol:     ₽"))
        .stdout(contains("Budget initialized:  no"));
}

#[test]
fn month_heading_does_not_follow_the_clock() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DAILY_ALLOWANCE_DATA_DIR", dir.path())
        .env_remove("DAILY_ALLOWANCE_AS_OF")
        .args(["--as-of", "2025-07-03", "month"])
        .assert()
        .success()
        .stdout(contains("Budget: days 1-30"))
        .stdout(contains("July").not());
}

#[test]
fn huge_amounts_are_refused_before_they_corrupt_the_budget() {
    let dir = TempDir::new().unwrap();
    init(&dir);

    allowance(&dir).args(["add", "1e308"]).assert().success();
    allowance(&dir)
        .args(["add", "1e308"])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));

    allowance(&dir).arg("today").assert().success();
    let state = exported_state(&dir);
    assert_eq!(state["budget"]["daysData"][0]["expenses"].as_array().unwrap().len(), 1);
    assert!(state["budget"]["daysData"][29]["calculated"].is_number());
}

#[test]
fn reset_recovers_from_an_unreadable_budget_file() {
    let dir = TempDir::new().unwrap();
    init(&dir);
    let budget_file = dir.path().join("data").join("budget.json");
    std::fs::write(&budget_file, r#"{"salary":1,"mandatoryExpenses":0,"daysData":[{"day":1,"baseDaily":null}]}"#)
        .unwrap();

    allowance(&dir).arg("today").assert().failure();

    allowance(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("Budget deleted"));
    assert!(!budget_file.exists());

    allowance(&dir)
        .arg("today")
        .assert()
        .failure()
        .stderr(contains("No budget has been initialized"));
}
