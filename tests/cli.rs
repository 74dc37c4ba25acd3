use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

mod common;

#[test]
fn test_quote_monthly_scenario() {
    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.args([
        "quote",
        "--plan",
        "quality",
        "--dependents",
        "1",
        "--cycle",
        "monthly",
        "--date",
        "2025-09-20",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 people"))
        .stdout(predicate::str::contains("44.0"))
        .stdout(predicate::str::contains("76.0"));
}

#[test]
fn test_quote_yearly_scenario() {
    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.args([
        "quote",
        "--plan",
        "quality",
        "--dependents",
        "1",
        "--cycle",
        "yearly",
        "--date",
        "2025-09-20",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1346.40"))
        .stdout(predicate::str::contains("1378.40"));
}

#[test]
fn test_quote_json_output() {
    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.args([
        "quote",
        "--plan",
        "quality",
        "--dependents",
        "1",
        "--date",
        "2025-09-20",
        "--json",
    ]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let quote: serde_json::Value = serde_json::from_slice(&output).unwrap();

    assert_eq!(quote["people_count"], 2);
    assert!(quote["total_due_now"].as_str().unwrap().starts_with("76"));
}

#[test]
fn test_quote_unknown_plan_prices_at_zero() {
    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.args(["quote", "--plan", "platinum", "--date", "2025-09-20"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total due now").and(predicate::str::contains("0")));
}

#[test]
fn test_quote_rejects_unknown_cycle() {
    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.args(["quote", "--plan", "quality", "--cycle", "weekly"]);

    cmd.assert().failure();
}

#[test]
fn test_plans_lists_catalog() {
    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.arg("plans");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("quality"))
        .stdout(predicate::str::contains("kids"))
        .stdout(predicate::str::contains("light-plus"));
}

#[test]
fn test_batch_quotes_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("requests.csv");
    common::generate_requests_csv(&input, 4).unwrap();

    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.arg("batch").arg(&input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "plan,people,base_fee,enrollment_fee,pro_rata,monthly_total,annual_total,total_due_now",
        ))
        // Row for one dependent on the 20th of a 30-day month.
        .stdout(predicate::str::contains("quality,2,66,16,44.0"));
}

#[test]
fn test_batch_skips_malformed_rows_and_continues() {
    let mut input = tempfile::NamedTempFile::new().unwrap();
    writeln!(input, "plan, dependents, cycle, date").unwrap();
    writeln!(input, "quality, not-a-number, monthly, 2025-09-20").unwrap();
    writeln!(input, "smart, 0, monthly, 2025-09-20").unwrap();

    let mut cmd = Command::new(cargo_bin!("dental-checkout"));
    cmd.arg("batch").arg(input.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("smart,1,30,14"))
        .stderr(predicate::str::contains("Error reading quote request"));
}
