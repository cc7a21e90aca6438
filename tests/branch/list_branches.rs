use crate::common::command::{init_repository_dir, run_twig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn branches_are_listed_sorted_with_the_current_one_marked(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    for name in ["zeta", "alpha", "feature/nested"] {
        run_twig_command(dir, &["branch", "create", name])
            .assert()
            .success();
    }

    run_twig_command(dir, &["branch", "list"])
        .assert()
        .success()
        .stdout("  alpha\n  feature/nested\n* master\n  zeta\n");
}
