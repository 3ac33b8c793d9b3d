//! Directory structure rendering
//!
//! - `ignore`: name-based exclusion applied at every depth
//! - `listing`: reads one directory, drops non-regular entries, orders the rest
//! - `builder`: `StructureBuilder`, the recursive renderer

mod builder;
mod ignore;
mod listing;

pub use builder::{BRANCH, INDENT, StructureBuilder};
pub use ignore::IgnoreSet;
pub use listing::{Entry, read_sorted_entries, sort_key, sort_names};
