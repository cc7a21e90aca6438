mod merge_diverged_branches;
mod merge_linear_histories;
mod merge_preconditions;
