use crate::common::file::{FileSpec, write_file};
use crate::common::twig_path;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

/// Every commit made by the tests carries this timestamp
pub const COMMIT_DATE: &str = "2024-03-09 14:05:00 +0200";
pub const READABLE_COMMIT_DATE: &str = "Sat Mar 9 14:05:00 2024 +0200";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository on `master` with one commit tracking `1.txt`, `a/2.txt` and `a/b/3.txt`
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_twig_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();
    twig_commit(repository_dir.path(), "First commit")
        .assert()
        .success();

    repository_dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    cmd.current_dir(dir)
        .envs(vec![("NO_COLOR", "1"), ("TWIG_COMMIT_DATE", COMMIT_DATE)])
        .env_remove("TWIG_LOG")
        .args(args);

    cmd
}

pub fn twig_commit(dir: &Path, message: &str) -> Command {
    run_twig_command(dir, &["commit", "-m", message])
}

/// Stage everything, then commit
pub fn commit_all(dir: &Path, message: &str) {
    run_twig_command(dir, &["add", "."]).assert().success();
    twig_commit(dir, message).assert().success();
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout is not UTF-8")
}

pub fn branch_oid(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(twig_path(dir, &format!("refs/heads/{branch}")))
        .expect("Failed to read branch ref")
        .trim()
        .to_string()
}

/// The commit HEAD resolves to, following the branch it points at
pub fn head_oid(dir: &Path) -> String {
    let head = std::fs::read_to_string(twig_path(dir, "HEAD")).expect("Failed to read HEAD");
    let head = head.trim();

    match head.strip_prefix("ref: refs/heads/") {
        Some(branch) => branch_oid(dir, branch),
        None => head.to_string(),
    }
}
