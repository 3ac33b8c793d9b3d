//! Reading, classifying and ordering the entries of one directory.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StructureError;

/// An immediate child of a directory that survived classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: OsString,
    pub path: PathBuf,
    pub is_dir: bool,
}

impl Entry {
    /// Name as shown in the rendered tree.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Sort key for the case-insensitive ordering rule.
pub fn sort_key(name: &str) -> String {
    name.to_lowercase()
}

/// Sort names case-insensitively. Equal keys keep their original order.
pub fn sort_names<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| sort_key(name.as_ref()));
}

/// Read, classify and sort the entries of `dir`.
///
/// Returns directories (sorted) followed by regular files (sorted). Symlinks
/// and special files are dropped without being followed.
pub fn read_sorted_entries(dir: &Path) -> Result<Vec<Entry>, StructureError> {
    let read_dir = fs::read_dir(dir).map_err(|e| StructureError::listing(dir, e))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in read_dir {
        let entry = entry.map_err(|e| StructureError::listing(dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| StructureError::listing(&entry.path(), e))?;

        let classified = Entry {
            name: entry.file_name(),
            path: entry.path(),
            is_dir: file_type.is_dir(),
        };

        if file_type.is_dir() {
            dirs.push(classified);
        } else if file_type.is_file() {
            files.push(classified);
        } else {
            log::trace!("omitting non-regular entry {}", classified.path.display());
        }
    }

    dirs.sort_by_cached_key(|e| sort_key(&e.name.to_string_lossy()));
    files.sort_by_cached_key(|e| sort_key(&e.name.to_string_lossy()));

    dirs.extend(files);
    Ok(dirs)
}
