//! Integration tests for ifgroup

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn groups_file() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/groups.json")
    }

    /// Command isolated from any user configuration
    fn ifgroup(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("ifgroup");
        cmd.env_remove("IFGROUP_GROUPS_FILE")
            .arg("--config")
            .arg(temp.path().join("config.toml"));
        cmd
    }

    fn offline(temp: &TempDir) -> Command {
        let mut cmd = ifgroup(temp);
        cmd.arg("--groups-file").arg(groups_file());
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        ifgroup(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("interface group"));
    }

    #[test]
    fn version_displays() {
        let temp = TempDir::new().unwrap();
        ifgroup(&temp)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("ifgroup"));
    }

    #[test]
    fn mount_ip_default_group() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["mount-ip", "--host", "node-7"])
            .assert()
            .success()
            .stdout("10.0.0.3\n");
    }

    #[test]
    fn mount_ip_named_group() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["mount-ip", "--group", "teamB", "--host", "node-7"])
            .assert()
            .success()
            .stdout("10.0.1.1\n");
    }

    #[test]
    fn mount_ip_missing_group() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["mount-ip", "--group", "teamC"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Interface group not found: teamC"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn mount_ip_group_without_addresses() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["mount-ip", "--group", "hollow"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No IP addresses found"));
    }

    #[test]
    fn mount_ip_uses_configured_group() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("config.toml"),
            "[mount]\ngroup = \"teamB\"\nhost_identifier = \"node-7\"\n",
        )
        .unwrap();

        offline(&temp)
            .arg("mount-ip")
            .assert()
            .success()
            .stdout("10.0.1.1\n");
    }

    #[test]
    fn mount_ip_without_endpoint() {
        let temp = TempDir::new().unwrap();
        ifgroup(&temp)
            .arg("mount-ip")
            .assert()
            .failure()
            .stderr(predicate::str::contains("API endpoint not configured"));
    }

    #[test]
    fn list_filters_by_type() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["list", "--type", "nfs", "--format", "plain"])
            .assert()
            .success()
            .stdout("teamA\nteamB\nhollow\n");
    }

    #[test]
    fn list_json() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["list", "--type", "smb", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"type\": \"SMB\""))
            .stdout(predicate::str::contains("teamA").not());
    }

    #[test]
    fn show_by_uid() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["show", "9a8b7c6d-5e4f-4a3b-8c2d-1e0f9a8b7c6d", "--format", "plain"])
            .assert()
            .success()
            .stdout(predicate::str::contains("InterfaceGroup teamB"));
    }

    #[test]
    fn show_unknown_uid() {
        let temp = TempDir::new().unwrap();
        offline(&temp)
            .args(["show", "00000000-0000-0000-0000-000000000000"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Interface group not found"));
    }

    #[test]
    fn config_path() {
        let temp = TempDir::new().unwrap();
        ifgroup(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_init_then_show() {
        let temp = TempDir::new().unwrap();
        ifgroup(&temp)
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Configuration initialized"));
        assert!(temp.path().join("config.toml").exists());

        ifgroup(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[api]"));
    }
}
