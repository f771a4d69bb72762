//! End-to-end tests for the teller binary
//!
//! Each test gets its own data directory via the TELLER_DATA_DIR override,
//! so sessions are isolated and the real config directory is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn teller(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    cmd.env("TELLER_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn create_assigns_first_account_number() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["create", "Alice", "--type", "Savings", "--balance", "100.00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Account created successfully!"))
        .stdout(predicate::str::contains("Number:  1001"))
        .stdout(predicate::str::contains("Balance: $100.00"));
}

#[test]
fn ledger_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["create", "Alice", "--balance", "100"])
        .assert()
        .success();

    teller(&dir)
        .args(["deposit", "1001", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("New balance: $150.00"));

    teller(&dir)
        .args(["balance", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $150.00"));
}

#[test]
fn second_account_gets_next_number() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["create", "Alice", "--balance", "100"])
        .assert()
        .success();

    teller(&dir)
        .args(["create", "Bob", "--type", "Current", "--balance", "25.50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Number:  1002"));

    teller(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total accounts: 2"))
        .stdout(predicate::str::contains("Total balance: $125.50"));
}

#[test]
fn withdraw_rejects_overdraw() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["create", "Alice", "--balance", "150"])
        .assert()
        .success();

    teller(&dir)
        .args(["withdraw", "1001", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient funds"));

    // Balance is unchanged after the rejected withdrawal
    teller(&dir)
        .args(["balance", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $150.00"));
}

#[test]
fn operations_on_unknown_account_fail() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["deposit", "1001", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: 1001"));
}

#[test]
fn negative_amounts_are_rejected() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["create", "Alice", "--balance=-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    teller(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));
}

#[test]
fn empty_ledger_lists_nothing() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts found."));
}

#[test]
fn calc_operations() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .args(["calc", "add", "2", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 2.00 + 3.00 = 5.00"));

    teller(&dir)
        .args(["calc", "div", "1", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn interactive_menu_session() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .arg("menu")
        .write_stdin("1\nAlice\nSavings\n100.00\n2\n1001\n50\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No existing accounts found."))
        .stdout(predicate::str::contains("Account created successfully!"))
        .stdout(predicate::str::contains("New balance: $150.00"))
        .stdout(predicate::str::contains("Goodbye!"));

    // The session saved; a fresh invocation sees the account
    teller(&dir)
        .args(["balance", "1001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance: $150.00"));
}

#[test]
fn menu_reports_errors_and_continues() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .arg("menu")
        .write_stdin("4\n1001\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Account not found: 1001"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    teller(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ledger.json"))
        .stdout(predicate::str::contains("Accounts: 0"));
}
