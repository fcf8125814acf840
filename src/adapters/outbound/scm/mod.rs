/// Source control adapters producing working copies
mod git_repository;
mod local_working_copy;

pub use git_repository::GitSourceRepository;
pub use local_working_copy::LocalWorkingCopy;
