//! projtree - render a project's directory structure as a plain-text tree

pub mod error;
pub mod structure;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::StructureError;
pub use structure::{IgnoreSet, StructureBuilder, sort_names};
