//! External tools invoked after generation
//!
//! Only git is used: the generated project gets `git init` when requested.

pub mod git;

pub use git::{check_git, init_repository, GitInfo};
