use crate::common::command::{init_repository_dir, repository_dir, run_twig_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::rstest;

const HELLO_BLOB_ID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

#[rstest]
fn hashing_does_not_need_a_repository(repository_dir: TempDir) {
    let dir = repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));

    run_twig_command(dir, &["hash-object", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_BLOB_ID}\n"));

    repository_dir
        .child(".twig")
        .assert(predicate::path::missing());
}

#[rstest]
fn hashing_with_write_stores_the_blob(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));

    run_twig_command(dir, &["hash-object", "-w", "hello.txt"])
        .assert()
        .success()
        .stdout(format!("{HELLO_BLOB_ID}\n"));

    init_repository_dir
        .child(format!(".twig/objects/{}/{}", &HELLO_BLOB_ID[..2], &HELLO_BLOB_ID[2..]))
        .assert(predicate::path::is_file());
    run_twig_command(dir, &["cat-file", "-p", HELLO_BLOB_ID])
        .assert()
        .success()
        .stdout("hello\n");
}

#[rstest]
fn hashing_a_missing_file_fails(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &["hash-object", "missing.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read file missing.txt"));
}
