mod commit_preconditions;
