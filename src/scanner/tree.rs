//! Directory traversal abstraction.
//!
//! The aggregator and report builder only see a [`FileTree`], so the real
//! filesystem ([`FsTree`]) and an in-memory tree ([`MemoryTree`]) are
//! interchangeable.

use coursetime_common::{Error, Result};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Read-only view of a directory tree.
pub trait FileTree {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Whether `path` is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate subdirectories of `path`, sorted by path.
    ///
    /// Files directly inside `path` are not returned.
    fn child_dirs(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Every regular file beneath `path`, at any depth.
    fn files_under<'a>(&'a self, path: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a>;
}

/// The real filesystem.
///
/// Symbolic links are followed. `walkdir` refuses to descend into a link that
/// points back at one of its own ancestors, so link loops end the branch with
/// a warning instead of recursing forever.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTree;

impl FsTree {
    pub fn new() -> Self {
        Self
    }
}

impl FileTree for FsTree {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn child_dirs(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let mut dirs = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", path.display(), e);
                    continue;
                }
            };
            let entry_path = entry.path();
            if entry_path.is_dir() {
                dirs.push(entry_path);
            }
        }
        dirs.sort();
        Ok(dirs)
    }

    fn files_under<'a>(&'a self, path: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let iter = WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping entry during walk: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path);
        Box::new(iter)
    }
}

/// In-memory directory tree for tests and benchmarks.
///
/// Adding a file or directory implicitly creates all of its ancestors.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeSet<PathBuf>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its ancestors).
    pub fn add_dir<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.dirs.insert(path);
        self
    }

    /// Add a file (and its ancestor directories).
    pub fn add_file<P: Into<PathBuf>>(&mut self, path: P) -> &mut Self {
        let path = path.into();
        self.add_ancestors(&path);
        self.files.insert(path);
        self
    }

    /// Builder-style [`add_dir`](Self::add_dir).
    pub fn with_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.add_dir(path);
        self
    }

    /// Builder-style [`add_file`](Self::add_file).
    pub fn with_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.add_file(path);
        self
    }

    fn add_ancestors(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileTree for MemoryTree {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.contains(path) || self.files.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn child_dirs(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !self.is_dir(path) {
            return Err(Error::not_a_directory(path));
        }
        Ok(self
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn files_under<'a>(&'a self, path: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        let root = path.to_path_buf();
        Box::new(
            self.files
                .iter()
                .filter(move |file| file.starts_with(&root) && **file != root)
                .cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn course_tree() -> MemoryTree {
        MemoryTree::new()
            .with_file("/course/01 - Intro/a.mp4")
            .with_file("/course/01 - Intro/deep/er/b.mkv")
            .with_file("/course/02 - Setup/c.avi")
            .with_file("/course/notes.txt")
            .with_dir("/course/Extras")
    }

    #[test]
    fn test_memory_tree_ancestors() {
        let tree = course_tree();
        assert!(tree.is_dir(Path::new("/course")));
        assert!(tree.is_dir(Path::new("/course/01 - Intro/deep/er")));
        assert!(tree.exists(Path::new("/course/notes.txt")));
        assert!(!tree.is_dir(Path::new("/course/notes.txt")));
        assert!(!tree.exists(Path::new("/elsewhere")));
    }

    #[test]
    fn test_memory_tree_child_dirs() {
        let tree = course_tree();
        let dirs = tree.child_dirs(Path::new("/course")).unwrap();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/course/01 - Intro"),
                PathBuf::from("/course/02 - Setup"),
                PathBuf::from("/course/Extras"),
            ]
        );
    }

    #[test]
    fn test_memory_tree_child_dirs_of_file() {
        let tree = course_tree();
        let result = tree.child_dirs(Path::new("/course/notes.txt"));
        assert!(matches!(result, Err(Error::NotADirectory(_))));
    }

    #[test]
    fn test_memory_tree_files_under() {
        let tree = course_tree();
        let files: Vec<_> = tree.files_under(Path::new("/course/01 - Intro")).collect();
        assert_eq!(files.len(), 2);

        // Component-wise prefix, not string prefix
        let tree = tree.with_file("/course/01 - Intro extra/x.mp4");
        let files: Vec<_> = tree.files_under(Path::new("/course/01 - Intro")).collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_fs_tree_child_dirs_skip_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("02 - B")).unwrap();
        fs::create_dir(dir.path().join("01 - A")).unwrap();
        fs::write(dir.path().join("readme.md"), "").unwrap();

        let dirs = FsTree::new().child_dirs(dir.path()).unwrap();
        assert_eq!(
            dirs,
            vec![dir.path().join("01 - A"), dir.path().join("02 - B")]
        );
    }

    #[test]
    fn test_fs_tree_files_under_recurses() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.mp4"), "").unwrap();
        fs::write(nested.join("deep.mkv"), "").unwrap();

        let mut files: Vec<_> = FsTree::new().files_under(dir.path()).collect();
        files.sort();
        assert_eq!(files, vec![nested.join("deep.mkv"), dir.path().join("top.mp4")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_fs_tree_survives_symlink_loop() {
        let dir = tempdir().unwrap();
        let section = dir.path().join("01 - Loop");
        fs::create_dir(&section).unwrap();
        fs::write(section.join("a.mp4"), "").unwrap();
        std::os::unix::fs::symlink(&section, section.join("again")).unwrap();

        let files: Vec<_> = FsTree::new().files_under(&section).collect();
        assert_eq!(files, vec![section.join("a.mp4")]);
    }

    #[test]
    fn test_fs_tree_missing_dir() {
        let result = FsTree::new().child_dirs(Path::new("/nonexistent/course"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
