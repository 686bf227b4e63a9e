//! Filesystem primitives for the ralph workspace installer
//!
//! Provides atomic writes, JSON document persistence, and whole-tree
//! copy/remove operations used by the mirror and config layers.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;
pub mod json;
pub mod tree;

pub use constants::WorkspacePath;
pub use error::{Error, Result};
