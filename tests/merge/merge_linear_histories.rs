use crate::common::command::{
    branch_oid, commit_all, init_repository_dir, run_twig_command,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merging_a_descendant_fast_forwards(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();
    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("ahead.txt"), "ahead".to_string()));
    commit_all(dir, "Topic moves ahead");
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_twig_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(branch_oid(dir, "master"), branch_oid(dir, "topic"));
    assert_eq!(read_file(&dir.join("ahead.txt")), "ahead");
}

#[rstest]
fn merging_an_ancestor_changes_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "old"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "newer".to_string()));
    commit_all(dir, "Master moves ahead");
    let master = branch_oid(dir, "master");

    run_twig_command(dir, &["merge", "old"])
        .assert()
        .success()
        .stdout("Given branch is an ancestor of the current branch.\n");

    assert_eq!(branch_oid(dir, "master"), master);
    assert_eq!(read_file(&dir.join("1.txt")), "newer");
}
