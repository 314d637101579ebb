use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A temporary database shared by the commands of one test
struct TestEnv {
    _temp_dir: TempDir,
    db_path: String,
}

impl TestEnv {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let db_path = temp_dir
            .path()
            .join("cli_test.db")
            .to_str()
            .expect("Temporary path is not UTF-8")
            .to_string();
        Self {
            _temp_dir: temp_dir,
            db_path,
        }
    }

    /// Command with --no-color and the test database already set
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("garage").expect("Failed to find garage binary");
        cmd.args(["--no-color", "--database-file", &self.db_path]);
        cmd
    }

    fn create_garage(&self, name: &str, capacity: u32) {
        self.cmd()
            .args([
                "garage",
                "create",
                name,
                "--location",
                "1 Main St",
                "--city",
                "Leeds",
                "--capacity",
                &capacity.to_string(),
            ])
            .assert()
            .success();
    }
}

#[test]
fn test_cli_default_lists_garages() {
    let env = TestEnv::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("No garages found."));
}

#[test]
fn test_cli_create_and_show_garage() {
    let env = TestEnv::new();

    env.cmd()
        .args([
            "garage", "create", "North", "--location", "1 Main St", "--city", "Leeds", "--capacity", "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created garage with ID: 1"))
        .stdout(predicate::str::contains("## North (ID: 1)"));

    env.cmd()
        .args(["garage", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **Capacity**: 5 per day"));
}

#[test]
fn test_cli_update_garage_merges_flags() {
    let env = TestEnv::new();
    env.create_garage("North", 5);

    env.cmd()
        .args(["garage", "update", "1", "--capacity", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed capacity"))
        .stdout(predicate::str::contains("## North (ID: 1)"))
        .stdout(predicate::str::contains("8 per day"));
}

#[test]
fn test_cli_show_missing_garage_fails() {
    let env = TestEnv::new();

    env.cmd()
        .args(["garage", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Garage with ID 42 not found"));
}

#[test]
fn test_cli_car_lifecycle() {
    let env = TestEnv::new();
    env.create_garage("North", 5);

    env.cmd()
        .args(["car", "create", "Toyota", "Corolla", "--year", "2018", "--plate", "AB12", "--garages", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created car with ID: 1"))
        .stdout(predicate::str::contains("- **Garages**: North (ID: 1)"));

    env.cmd()
        .args(["car", "create", "Honda", "Civic", "--year", "2020", "--plate", "AB12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("License plate already exists"));

    env.cmd()
        .args(["car", "list", "--make", "toy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Toyota Corolla"));

    env.cmd()
        .args(["car", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted car 'Toyota Corolla' (ID: 1)"));
}

#[test]
fn test_cli_reports() {
    let env = TestEnv::new();
    env.create_garage("North", 5);

    env.cmd()
        .args(["car", "create", "Ford", "Focus", "--year", "2015"])
        .assert()
        .success();

    env.cmd()
        .args(["maintenance", "create", "Oil change", "2024-03-02", "--car-id", "1", "--garage-id", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created maintenance with ID: 1"));

    env.cmd()
        .args(["report", "daily", "1", "2024-03-01", "2024-03-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 2024-03-01 | 0 | 5 |"))
        .stdout(predicate::str::contains("| 2024-03-02 | 1 | 4 |"))
        .stdout(predicate::str::contains("| 2024-03-03 | 0 | 5 |"));

    env.cmd()
        .args(["report", "monthly", "1", "2024-02", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| 2024-02 | 0 | yes |"))
        .stdout(predicate::str::contains("| 2024-03 | 1 | yes |"));
}

#[test]
fn test_cli_report_invalid_range() {
    let env = TestEnv::new();
    env.create_garage("North", 5);

    env.cmd()
        .args(["report", "daily", "1", "2024-03-10", "2024-03-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));

    env.cmd()
        .args(["report", "monthly", "1", "March", "2024-03"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("startMonth"));
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("garage")
        .expect("Failed to find garage binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("report"));
}
