//! Filesystem layer for Snippa
//!
//! Normalized path handling, atomic writes with advisory locking, and the
//! persisted JSON state store the sync engine commits to.

pub mod error;
pub mod io;
pub mod path;
pub mod store;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use store::StateStore;
