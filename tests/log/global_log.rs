use crate::common::command::{
    branch_oid, commit_all, init_repository_dir, run_twig_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn global_log_includes_commits_no_branch_reaches(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = branch_oid(dir, "master");
    write_file(FileSpec::new(dir.join("1.txt"), "soon unreachable".to_string()));
    commit_all(dir, "Soon unreachable");
    let dropped = branch_oid(dir, "master");

    run_twig_command(dir, &["reset", &first]).assert().success();

    let output = stdout_of(&mut run_twig_command(dir, &["global-log"]));
    assert!(output.contains(&format!("commit {dropped}\n")));
    assert!(output.contains(&format!("commit {first}\n")));
    assert!(output.contains("\ninitial commit\n"));
    assert_eq!(output.matches("===\ncommit ").count(), 3);
}
