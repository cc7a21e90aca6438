use crate::common::command::{
    branch_oid, commit_all, init_repository_dir, run_twig_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};

/// `topic` branches off the first commit, then both sides commit once
///
/// - master rewrites `a/b/3.txt`
/// - topic adds `topic.txt` and deletes `a/2.txt`
#[fixture]
fn diverged_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir.path();
    run_twig_command(dir, &["branch", "create", "topic"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.join("a/b/3.txt"), "three on master".to_string()));
    commit_all(dir, "Master edits three");

    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("topic.txt"), "from topic".to_string()));
    run_twig_command(dir, &["rm", "a/2.txt"]).assert().success();
    commit_all(dir, "Topic adds a file, drops two");

    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    init_repository_dir
}

#[rstest]
fn clean_merge_combines_both_sides(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    let master_before = branch_oid(dir, "master");
    let topic = branch_oid(dir, "topic");

    let output = stdout_of(&mut run_twig_command(dir, &["merge", "topic"]));
    let merged = branch_oid(dir, "master");
    assert_eq!(output, format!("Merged as {}.\n", &merged[..7]));

    assert_eq!(read_file(&dir.join("a/b/3.txt")), "three on master");
    assert_eq!(read_file(&dir.join("topic.txt")), "from topic");
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    diverged_repository_dir
        .child("a/2.txt")
        .assert(predicate::path::missing());

    let body = stdout_of(&mut run_twig_command(dir, &["cat-file", "-p", &merged]));
    assert!(body.contains(&format!("\nparent {master_before}\nparent {topic}\n")));
    assert!(body.ends_with("\n\nMerged topic into master.\n"));

    run_twig_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n\
             === Untracked Files ===\n",
        ));
}

#[rstest]
fn log_shows_both_parents_of_a_merge(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    let master_before = branch_oid(dir, "master");
    let topic = branch_oid(dir, "topic");
    run_twig_command(dir, &["merge", "topic"]).assert().success();

    run_twig_command(dir, &["log"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Merge: {} {}\n",
            &master_before[..7],
            &topic[..7]
        )))
        // first parents only: the topic commit is not listed
        .stdout(predicate::str::contains("Topic adds a file, drops two").not());
}

#[rstest]
fn conflicting_edits_are_committed_with_markers(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "2\n".to_string()));
    commit_all(dir, "Master says two");
    run_twig_command(dir, &["checkout", "topic"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.join("1.txt"), "3\n".to_string()));
    commit_all(dir, "Topic says three");
    run_twig_command(dir, &["checkout", "master"])
        .assert()
        .success();

    run_twig_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("1.txt")),
        "<<<<<<< HEAD\n2\n=======\n3\n>>>>>>>\n"
    );
    // the merge commit exists even with a conflict
    let head = branch_oid(dir, "master");
    let body = stdout_of(&mut run_twig_command(dir, &["cat-file", "-p", &head]));
    assert_eq!(body.lines().filter(|line| line.starts_with("parent ")).count(), 2);
}

#[rstest]
fn modified_against_deleted_is_a_conflict(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    write_file(FileSpec::new(dir.join("a/2.txt"), "two on master\n".to_string()));
    commit_all(dir, "Master edits two");

    run_twig_command(dir, &["merge", "topic"])
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("a/2.txt")),
        "<<<<<<< HEAD\ntwo on master\n=======\n>>>>>>>\n"
    );
}

#[rstest]
fn untracked_file_in_the_way_aborts_the_merge(diverged_repository_dir: TempDir) {
    let dir = diverged_repository_dir.path();
    let master_before = branch_oid(dir, "master");
    write_file(FileSpec::new(dir.join("topic.txt"), "mine".to_string()));

    run_twig_command(dir, &["merge", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\ttopic.txt"));

    assert_eq!(branch_oid(dir, "master"), master_before);
    assert_eq!(read_file(&dir.join("topic.txt")), "mine");
    assert_eq!(read_file(&dir.join("a/2.txt")), "two");
}
