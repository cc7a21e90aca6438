mod reinitializing_fails;
mod root_commit_is_shared_by_all_repositories;
