mod commit_staged_files_successfully;
mod commit_preconditions;
