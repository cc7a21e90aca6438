use crate::common::command::{
    READABLE_COMMIT_DATE, branch_oid, commit_all, init_repository_dir, run_twig_command,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn log_lists_first_parent_history_newest_first(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = branch_oid(dir, "master");
    write_file(FileSpec::new(dir.join("1.txt"), "one, take two".to_string()));
    commit_all(dir, "Second commit");
    let second = branch_oid(dir, "master");

    let root = {
        let output = run_twig_command(dir, &["cat-file", "-p", &first])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .find_map(|line| line.strip_prefix("parent ").map(str::to_string))
            .unwrap()
    };

    let expected = format!(
        "===\ncommit {second}\nDate: {READABLE_COMMIT_DATE}\nSecond commit\n\n\
         ===\ncommit {first}\nDate: {READABLE_COMMIT_DATE}\nFirst commit\n\n\
         ===\ncommit {root}\nDate: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n"
    );

    run_twig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(expected);
}

#[rstest]
fn log_follows_head_onto_other_branches(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "side"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "master only".to_string()));
    commit_all(dir, "Master only");

    run_twig_command(dir, &["checkout", "side"])
        .assert()
        .success();

    let output = run_twig_command(dir, &["log"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let output = String::from_utf8(output).unwrap();
    assert!(!output.contains("Master only"));
    assert_eq!(output.matches("===\ncommit ").count(), 2);
}
