// Rust guideline compliant 2026-10-16

//! End-to-end tests for the `bgate` binary.

use git2::Repository;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn setup_repo(config: &str) -> TempDir {
    let temp_dir = TempDir::new().expect("temp dir");
    Repository::init(temp_dir.path()).expect("init repo");
    fs::write(temp_dir.path().join("VERSION"), "BUILD = 9\n").expect("write version");
    fs::write(
        temp_dir.path().join("buildgate.toml"),
        format!("version_file = \"VERSION\"\n{}", config),
    )
    .expect("write config");
    temp_dir
}

fn bgate(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bgate"))
        .arg("--root")
        .arg(root)
        .arg("--no-color")
        .args(args)
        .env_remove("BUILDGATE_TEST_COMMAND")
        .env_remove("BUILDGATE_BUMP_COMMAND")
        .env_remove("BUILDGATE_VERSION_FILE")
        .env_remove("BUILDGATE_BUILD_KEY")
        .output()
        .expect("run bgate")
}

#[test]
fn bgate_show_json_reports_build() {
    let temp_dir = setup_repo("");
    let output = bgate(temp_dir.path(), &["show", "--json"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("JSON output");
    assert_eq!(value["build"], 9);
    assert_eq!(value["version_file"], "VERSION");
}

#[test]
fn bgate_bump_increments_build() {
    let temp_dir = setup_repo("");
    let output = bgate(temp_dir.path(), &["bump"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Build number incremented from 9 to 10"), "{}", stdout);
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("VERSION")).expect("read version"),
        "BUILD = 10\n"
    );
}

#[cfg(unix)]
#[test]
fn bgate_pre_commit_succeeds() {
    let temp_dir = setup_repo("test_command = [\"sh\", \"-c\", \"exit 0\"]\n");
    let output = bgate(temp_dir.path(), &["pre-commit"]);

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("Pre-commit checks passed."));

    let repo = Repository::open(temp_dir.path()).expect("open repo");
    let index = repo.index().expect("index");
    assert!(index.get_path(Path::new("VERSION"), 0).is_some());
}

#[cfg(unix)]
#[test]
fn bgate_pre_commit_test_failure_exits_one() {
    let temp_dir = setup_repo("test_command = [\"sh\", \"-c\", \"exit 7\"]\n");
    let output = bgate(temp_dir.path(), &["pre-commit"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Unit tests FAILED."));
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("VERSION")).expect("read version"),
        "BUILD = 9\n"
    );
}

#[test]
fn bgate_outside_repository_exits_one() {
    let temp_dir = TempDir::new().expect("temp dir");
    let output = bgate(temp_dir.path(), &["show"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Repository root not found"));
}

/// Runs `git` in `root` with an isolated identity and configuration.
///
/// `PATH` starts with the directory holding `bgate`, so an installed hook
/// finds the binary under test.
#[cfg(unix)]
fn git(root: &Path, args: &[&str]) -> Output {
    let bin_dir = Path::new(env!("CARGO_BIN_EXE_bgate"))
        .parent()
        .expect("bgate parent dir")
        .to_path_buf();
    let mut paths = vec![bin_dir];
    if let Some(path) = std::env::var_os("PATH") {
        paths.extend(std::env::split_paths(&path));
    }
    let path = std::env::join_paths(paths).expect("join PATH");

    Command::new("git")
        .current_dir(root)
        .args(args)
        .env("PATH", path)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", "Buildgate Tester")
        .env("GIT_AUTHOR_EMAIL", "tester@example.com")
        .env("GIT_COMMITTER_NAME", "Buildgate Tester")
        .env("GIT_COMMITTER_EMAIL", "tester@example.com")
        .env_remove("GIT_INDEX_FILE")
        .env_remove("GIT_DIR")
        .env_remove("BUILDGATE_TEST_COMMAND")
        .env_remove("BUILDGATE_BUMP_COMMAND")
        .env_remove("BUILDGATE_VERSION_FILE")
        .env_remove("BUILDGATE_BUILD_KEY")
        .env_remove("BUILDGATE_ROOT")
        .output()
        .expect("run git")
}

#[cfg(unix)]
fn git_stdout(root: &Path, args: &[&str]) -> String {
    let output = git(root, args);
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Commits a tracked file, installs the hook and modifies that file again.
#[cfg(unix)]
fn setup_hooked_repo(test_script: &str) -> TempDir {
    let temp_dir = setup_repo(&format!(
        "test_command = [\"sh\", \"-c\", {:?}]\n",
        test_script
    ));
    let root = temp_dir.path();
    fs::write(root.join("notes.txt"), "a\n").expect("write notes");
    git_stdout(root, &["add", "-A"]);
    git_stdout(root, &["commit", "--no-verify", "-m", "initial"]);

    let output = bgate(root, &["init"]);
    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    fs::write(root.join("notes.txt"), "b\n").expect("modify notes");
    temp_dir
}

#[cfg(unix)]
#[test]
fn bgate_hook_stages_bump_during_commit_all() {
    let temp_dir = setup_hooked_repo("exit 0");
    let root = temp_dir.path();

    let output = git(root, &["commit", "-a", "-m", "change"]);
    assert!(
        output.status.success(),
        "commit failed:\nstdout: {}\nstderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    assert_eq!(git_stdout(root, &["show", "HEAD:VERSION"]), "BUILD = 10\n");
    assert_eq!(git_stdout(root, &["show", "HEAD:notes.txt"]), "b\n");
    assert_eq!(git_stdout(root, &["status", "--porcelain"]), "");
}

#[cfg(unix)]
#[test]
fn bgate_hook_failure_aborts_commit() {
    let temp_dir = setup_hooked_repo("exit 1");
    let root = temp_dir.path();
    let head_before = git_stdout(root, &["rev-parse", "HEAD"]);

    let output = git(root, &["commit", "-a", "-m", "change"]);
    assert!(!output.status.success());
    // Git redirects hook stdout to its own stderr.
    let hook_output = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(hook_output.contains("Unit tests FAILED."), "{}", hook_output);

    assert_eq!(git_stdout(root, &["rev-parse", "HEAD"]), head_before);
    assert_eq!(
        fs::read_to_string(root.join("VERSION")).expect("read version"),
        "BUILD = 9\n"
    );
}
