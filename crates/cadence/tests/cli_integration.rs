//! End-to-end CLI integration tests.
//!
//! Each test runs the `cadence` binary in a temporary directory so no
//! configuration file from the surrounding checkout is picked up.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cadence(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cadence").expect("binary should build");
    cmd.current_dir(dir.path()).env_remove("CADENCE_CONFIG").env_remove("RUST_LOG");
    cmd
}

/// Joins messages the way `git log -z --format=%B` does.
fn git_log(messages: &[&str]) -> String {
    messages
        .iter()
        .map(|m| format!("{m}\n"))
        .collect::<Vec<_>>()
        .join("\0")
}

#[test]
fn test_lint_valid_message() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .arg("lint")
        .write_stdin("feat(api): add route\n\nBody text.\n")
        .assert()
        .success()
        .stdout("feat(api): add route\n");
}

#[test]
fn test_lint_breaking_message() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .arg("lint")
        .write_stdin("fix: drop v1\n\nBREAKING CHANGE: v1 endpoints are gone\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("breaking: v1 endpoints are gone"));
}

#[test]
fn test_lint_reads_file_and_strips_comments() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("COMMIT_EDITMSG");
    fs::write(
        &file,
        "docs: update readme\n# Please enter the commit message for your changes.\n",
    )
    .unwrap();

    cadence(&dir)
        .arg("lint")
        .arg(&file)
        .assert()
        .success()
        .stdout("docs: update readme\n");
}

#[test]
fn test_lint_unknown_type() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .arg("lint")
        .write_stdin("wip: stuff\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("`wip` is not an enabled commit type"));
}

#[test]
fn test_lint_malformed_header() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .arg("lint")
        .write_stdin("Update stuff\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid commit message `Update stuff`"));
}

#[test]
fn test_bump_minor() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "1.2.3"])
        .write_stdin(git_log(&["feat: add login", "fix: typo", "chore: deps"]))
        .assert()
        .success()
        .stdout("1.3.0\n");
}

#[test]
fn test_bump_strips_tag_prefix() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "v1.2.3", "--tag"])
        .write_stdin(git_log(&["fix: typo"]))
        .assert()
        .success()
        .stdout("v1.2.4\n");
}

#[test]
fn test_bump_pre_one_zero_breaking() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "0.4.2"])
        .write_stdin(git_log(&["feat!: new config format"]))
        .assert()
        .success()
        .stdout("0.5.0\n");
}

#[test]
fn test_bump_no_impact_keeps_version() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "2.0.0"])
        .write_stdin(git_log(&["docs: readme", "ci: cache"]))
        .assert()
        .success()
        .stdout("2.0.0\n");
}

#[test]
fn test_bump_skips_unparseable_messages() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "1.0.0"])
        .write_stdin(git_log(&["Merge branch 'main'", "fix: typo"]))
        .assert()
        .success()
        .stdout("1.0.1\n")
        .stderr(predicate::str::contains("skipping unparseable commit"));
}

#[test]
fn test_bump_strict_fails_on_unparseable() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "1.0.0", "--strict"])
        .write_stdin(git_log(&["Merge branch 'main'", "fix: typo"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("1 of 2 commit messages could not be parsed"));
}

#[test]
fn test_bump_invalid_current_version() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["bump", "--current", "latest"])
        .write_stdin(git_log(&["fix: typo"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid current version `latest`"));
}

#[test]
fn test_bump_json_plan() {
    let dir = TempDir::new().unwrap();
    let output = cadence(&dir)
        .args(["bump", "--current", "1.0.0", "--json"])
        .write_stdin(git_log(&["feat: a", "bad"]))
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["next"], "1.1.0");
    assert_eq!(plan["impact"], "minor");
    assert_eq!(plan["failures"][0]["index"], 1);
}

#[test]
fn test_bump_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("log.bin");
    fs::write(&file, git_log(&["perf: faster startup"])).unwrap();

    cadence(&dir)
        .args(["bump", "--current", "1.0.0", "--input"])
        .arg(&file)
        .assert()
        .success()
        .stdout("1.0.1\n");
}

#[test]
fn test_changelog_json() {
    let dir = TempDir::new().unwrap();
    let output = cadence(&dir)
        .arg("changelog")
        .write_stdin(git_log(&["fix: a", "feat!: b", "docs: c", "feat: d"]))
        .output()
        .unwrap();
    assert!(output.status.success());

    let model: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> = model["sections"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Breaking Changes", "Bug Fixes", "Features"]);
    assert_eq!(model["sections"][2]["commits"][1]["description"], "d");
}

#[test]
fn test_branch_valid() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["branch", "feature/add-login"])
        .assert()
        .success()
        .stdout("category: feature\nslug: add-login\n");
}

#[test]
fn test_branch_invalid_slug() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["branch", "feature/Add_Login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid branch name `feature/Add_Login`"));
}

#[test]
fn test_branch_unknown_category() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["branch", "spike/try-it"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`spike` is not an accepted branch category"));
}

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();
    cadence(&dir).arg("init").assert().success();

    let content = fs::read_to_string(dir.path().join("cadence.toml")).unwrap();
    assert!(content.contains("[version]"), "config should have version section");
    assert!(content.contains("[changelog]"), "config should have changelog section");
    assert!(content.contains("[branch]"), "config should have branch section");
}

#[test]
fn test_init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cadence.toml"), "# old config\n").unwrap();

    cadence(&dir).arg("init").assert().failure();

    cadence(&dir).args(["init", "--force"]).assert().success();
    let content = fs::read_to_string(dir.path().join("cadence.toml")).unwrap();
    assert!(!content.contains("# old config"), "config should be overwritten");
}

#[test]
fn test_config_file_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("cadence.toml"),
        "[types]\nsecurity = true\n\n[type_impact]\nsecurity = \"minor\"\n\n[branch]\ncategories = [\"feature\", \"spike\"]\n",
    )
    .unwrap();

    cadence(&dir)
        .args(["bump", "--current", "1.0.0"])
        .write_stdin(git_log(&["security: rotate keys"]))
        .assert()
        .success()
        .stdout("1.1.0\n");

    cadence(&dir)
        .args(["branch", "spike/try-it"])
        .assert()
        .success();
}

#[test]
fn test_explicit_config_path() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("release.toml");
    fs::write(&config, "[version]\npre_one_zero_major_bumps_minor = false\n").unwrap();

    cadence(&dir)
        .args(["bump", "--current", "0.3.0", "--config"])
        .arg(&config)
        .write_stdin(git_log(&["feat!: new api"]))
        .assert()
        .success()
        .stdout("1.0.0\n");
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();
    cadence(&dir)
        .args(["branch", "feature/x", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}
