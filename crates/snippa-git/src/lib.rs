//! Git layer for Snippa
//!
//! The snippets directory is a clone of the operator's snippet repository.
//! This crate covers the three operations the sync triggers need: clone at
//! setup, fetch + fast-forward pull, and the changed-path diff between the
//! pre-pull and post-pull heads.

pub mod error;
pub mod setup;
pub mod sync;

pub use error::{Error, Result};
pub use setup::{clone_repository, is_repository};
pub use sync::{PullOutcome, changed_paths, head_commit, pull};
