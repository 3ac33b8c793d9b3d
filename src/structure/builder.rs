//! StructureBuilder - renders a directory as an indented plain-text tree

use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::StructureError;

use super::ignore::IgnoreSet;
use super::listing::read_sorted_entries;

/// Indent unit repeated once per nesting level.
pub const INDENT: &str = "│   ";

/// Marker placed before every entry name.
pub const BRANCH: &str = "├── ";

/// Builds the textual structure of a directory tree.
///
/// The builder holds only its configuration. Every call to [`render`] reads
/// the filesystem again, so two renders of an unchanged tree are identical.
///
/// [`render`]: StructureBuilder::render
#[derive(Debug, Clone)]
pub struct StructureBuilder {
    root: PathBuf,
    ignore: IgnoreSet,
}

impl StructureBuilder {
    /// Create a builder for `root`, skipping entries named in `ignore`.
    ///
    /// The root is not checked until [`render`](Self::render) runs.
    pub fn new<P, I, S>(root: P, ignore: I) -> Self
    where
        P: Into<PathBuf>,
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            root: root.into(),
            ignore: IgnoreSet::new(ignore),
        }
    }

    /// Root directory this builder renders.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names pruned from the tree at every depth.
    pub fn ignore_set(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Render the tree: a `<root-name>/` header followed by one line per
    /// surviving entry, directories before files at each level.
    pub fn render(&self) -> Result<String, StructureError> {
        let mut output = format!("{}/\n", root_name(&self.root));
        self.render_dir(&self.root, 0, &mut output)?;
        Ok(output)
    }

    /// Render the tree and write it to `path` as UTF-8, replacing any
    /// existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), StructureError> {
        let path = path.as_ref();
        let structure = self.render()?;
        fs::write(path, structure.as_bytes()).map_err(|e| StructureError::write(path, e))?;
        log::debug!("wrote {} bytes to {}", structure.len(), path.display());
        Ok(())
    }

    fn render_dir(
        &self,
        dir: &Path,
        depth: usize,
        output: &mut String,
    ) -> Result<(), StructureError> {
        log::debug!("listing {} at depth {}", dir.display(), depth);
        let entries = read_sorted_entries(dir)?;
        let indent = INDENT.repeat(depth);

        for entry in entries {
            if self.ignore.is_ignored(&entry.path) {
                log::trace!("pruning ignored entry {}", entry.path.display());
                continue;
            }

            output.push_str(&indent);
            output.push_str(BRANCH);
            output.push_str(&entry.display_name());
            if entry.is_dir {
                output.push_str("/\n");
                self.render_dir(&entry.path, depth + 1, output)?;
            } else {
                output.push('\n');
            }
        }

        Ok(())
    }
}

/// Base name of the root: its final component. `..` and `.` keep their
/// spelling; a bare root or prefix has an empty name, giving a `/` header.
fn root_name(root: &Path) -> String {
    if let Some(name) = root.file_name() {
        return name.to_string_lossy().into_owned();
    }
    match root.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::CurDir) => ".".to_string(),
        Some(Component::RootDir) | Some(Component::Prefix(_)) | None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTree;

    fn sample_project() -> TestTree {
        let tree = TestTree::new();
        tree.add_file("folder1/file1.py");
        tree.add_file("folder1/README.md");
        tree.add_file("folder2/file2.txt");
        tree.add_dir("ignore_me");
        tree.add_file("script.py");
        tree.add_file("README.md");
        tree
    }

    #[test]
    fn test_render_full_layout() {
        let tree = sample_project();
        let builder = StructureBuilder::new(tree.path(), ["ignore_me"]);
        let output = builder.render().unwrap();

        let expected = format!(
            "{}/\n\
             ├── folder1/\n\
             │   ├── file1.py\n\
             │   ├── README.md\n\
             ├── folder2/\n\
             │   ├── file2.txt\n\
             ├── README.md\n\
             ├── script.py\n",
            tree.name()
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_ignore_prunes_subtrees_and_files() {
        let tree = sample_project();
        let builder = StructureBuilder::new(tree.path(), ["folder1", "file2.txt", "README.md"]);
        let output = builder.render().unwrap();

        assert!(!output.contains("folder1/"));
        assert!(!output.contains("file1.py"));
        assert!(output.contains("folder2/"));
        assert!(!output.contains("file2.txt"));
        assert!(!output.contains("README.md"));
        assert!(output.contains("ignore_me/"));
    }

    #[test]
    fn test_empty_directory() {
        let tree = TestTree::new();
        let output = StructureBuilder::new(tree.path(), Vec::<String>::new())
            .render()
            .unwrap();
        assert_eq!(output, format!("{}/\n", tree.name()));
    }

    #[test]
    fn test_empty_subdirectory_has_only_its_line() {
        let tree = TestTree::new();
        tree.add_dir("empty");
        let output = StructureBuilder::new(tree.path(), Vec::<String>::new())
            .render()
            .unwrap();
        assert_eq!(output, format!("{}/\n├── empty/\n", tree.name()));
    }

    #[test]
    fn test_depth_encoding() {
        let tree = TestTree::new();
        tree.add_file("top.txt");
        tree.add_file("a/b/c/deep.txt");
        let output = StructureBuilder::new(tree.path(), Vec::<String>::new())
            .render()
            .unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "├── a/");
        assert_eq!(lines[2], "│   ├── b/");
        assert_eq!(lines[3], "│   │   ├── c/");
        assert_eq!(lines[4], "│   │   │   ├── deep.txt");
        assert_eq!(lines[5], "├── top.txt");
    }

    #[test]
    fn test_ignore_applies_at_every_depth() {
        let tree = TestTree::new();
        tree.add_file("node_modules/pkg/index.js");
        tree.add_file("app/node_modules/dep/lib.js");
        tree.add_file("app/main.js");
        let output = StructureBuilder::new(tree.path(), ["node_modules"])
            .render()
            .unwrap();

        assert!(!output.contains("node_modules"));
        assert!(!output.contains("index.js"));
        assert!(!output.contains("lib.js"));
        assert!(output.contains("│   ├── main.js"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let tree = sample_project();
        let builder = StructureBuilder::new(tree.path(), ["ignore_me"]);
        assert_eq!(builder.render().unwrap(), builder.render().unwrap());
    }

    #[test]
    fn test_save_to_file_matches_render() {
        let tree = sample_project();
        let out = TestTree::new();
        let output_file = out.path().join("output.txt");

        let builder = StructureBuilder::new(tree.path(), ["ignore_me"]);
        builder.save_to_file(&output_file).unwrap();

        let content = fs::read_to_string(&output_file).unwrap();
        assert_eq!(content, builder.render().unwrap());
        assert!(!content.contains("ignore_me/"));
    }

    #[test]
    fn test_save_to_file_overwrites() {
        let tree = sample_project();
        let out = TestTree::new();
        let output_file = out.add_file("output.txt");
        fs::write(&output_file, "stale content that is much longer than the tree".repeat(50))
            .unwrap();

        let builder = StructureBuilder::new(tree.path(), Vec::<String>::new());
        builder.save_to_file(&output_file).unwrap();
        assert_eq!(
            fs::read_to_string(&output_file).unwrap(),
            builder.render().unwrap()
        );
    }

    #[test]
    fn test_missing_root_propagates() {
        let tree = TestTree::new();
        let builder = StructureBuilder::new(tree.path().join("missing"), Vec::<String>::new());
        let err = builder.render().unwrap_err();
        assert!(matches!(err, StructureError::NotFound { .. }));
    }

    #[test]
    fn test_save_to_unwritable_path_fails() {
        let tree = sample_project();
        let builder = StructureBuilder::new(tree.path(), Vec::<String>::new());
        let err = builder
            .save_to_file(tree.path().join("no_such_dir").join("out.txt"))
            .unwrap_err();
        assert!(matches!(err, StructureError::Write { .. }));
    }

    #[test]
    fn test_root_name() {
        assert_eq!(root_name(Path::new("/tmp/project")), "project");
        assert_eq!(root_name(Path::new("project/")), "project");
        assert_eq!(root_name(Path::new(".")), ".");
        assert_eq!(root_name(Path::new("..")), "..");
        assert_eq!(root_name(Path::new("../..")), "..");
        assert_eq!(root_name(Path::new("x/..")), "..");
        assert_eq!(root_name(Path::new("/abs/x/..")), "..");
        assert_eq!(root_name(Path::new("/")), "");
    }

    #[test]
    fn test_parent_dir_root_header_is_not_the_full_path() {
        let tree = TestTree::new();
        tree.add_file("x/inner.txt");
        let output = StructureBuilder::new(tree.path().join("x/.."), Vec::<String>::new())
            .render()
            .unwrap();
        assert_eq!(output, "../\n├── x/\n│   ├── inner.txt\n");
    }
}
