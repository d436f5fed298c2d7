//! Locating a named venv by walking up the directory tree.
//!
//! Resolution happens in two steps. [`Resolver::search_roots`] builds the
//! ordered list of candidate roots without touching the filesystem:
//!
//! 1. The starting directory
//! 2. Each ancestor, nearest first, up to the filesystem root (when traversing)
//! 3. The home directory, unless it was already visited
//!
//! [`Resolver::find`] then probes `root/.venv/<name>` in that order and
//! returns the first directory it finds.

use std::path::{Path, PathBuf};

use crate::error::{Result, VupError};

use super::repository::container_path;

/// Finds venvs across the ordered search roots.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    home: Option<PathBuf>,
}

impl Resolver {
    /// Create a resolver with the given home-directory fallback.
    pub fn new(home: Option<PathBuf>) -> Self {
        Self { home }
    }

    /// The home-directory fallback, if any.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Candidate roots in search order.
    ///
    /// The walk ends when a directory has no parent, so it always
    /// terminates at the filesystem root.
    pub fn search_roots(&self, start: &Path, traverse: bool) -> Vec<PathBuf> {
        let mut roots = Vec::new();

        let mut current = Some(start);
        while let Some(dir) = current {
            roots.push(dir.to_path_buf());
            if !traverse {
                break;
            }
            current = dir.parent().filter(|p| !p.as_os_str().is_empty());
        }

        if let Some(home) = &self.home {
            if !roots.iter().any(|r| r == home) {
                roots.push(home.clone());
            }
        }

        roots
    }

    /// Find the venv called `name`, searching from `start`.
    ///
    /// A directory at `root/.venv/<name>` is enough to count as found; it is
    /// not validated here.
    pub fn find(&self, name: &str, start: &Path, traverse: bool) -> Result<PathBuf> {
        for root in self.search_roots(start, traverse) {
            let candidate = container_path(&root).join(name);
            if candidate.is_dir() {
                tracing::debug!(name, path = %candidate.display(), "found venv");
                return Ok(candidate);
            }
            tracing::debug!(name, root = %root.display(), "no match");
        }

        Err(VupError::VenvNotFound {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    fn make_venv(root: &Path, name: &str) -> PathBuf {
        let path = root.join(".venv").join(name);
        fs::create_dir_all(path.join("bin")).unwrap();
        fs::write(path.join("bin/activate"), "").unwrap();
        path
    }

    #[test]
    fn roots_walk_to_filesystem_root_then_home() {
        let resolver = Resolver::new(Some(PathBuf::from("/home/dev")));
        let roots = resolver.search_roots(Path::new("/srv/app/sub"), true);
        assert_eq!(roots, paths(&["/srv/app/sub", "/srv/app", "/srv", "/", "/home/dev"]));
    }

    #[test]
    fn home_is_not_repeated_when_already_visited() {
        let resolver = Resolver::new(Some(PathBuf::from("/home/dev")));
        let roots = resolver.search_roots(Path::new("/home/dev/project"), true);
        assert_eq!(roots, paths(&["/home/dev/project", "/home/dev", "/home", "/"]));
    }

    #[test]
    fn no_traverse_keeps_start_and_home() {
        let resolver = Resolver::new(Some(PathBuf::from("/home/dev")));
        let roots = resolver.search_roots(Path::new("/home/dev/project"), false);
        assert_eq!(roots, paths(&["/home/dev/project", "/home/dev"]));
    }

    #[test]
    fn no_traverse_from_home_is_just_home() {
        let resolver = Resolver::new(Some(PathBuf::from("/home/dev")));
        let roots = resolver.search_roots(Path::new("/home/dev"), false);
        assert_eq!(roots, paths(&["/home/dev"]));
    }

    #[test]
    fn starting_at_filesystem_root() {
        let resolver = Resolver::new(None);
        assert_eq!(resolver.search_roots(Path::new("/"), true), paths(&["/"]));
    }

    #[test]
    fn relative_start_stops_before_empty_path() {
        let resolver = Resolver::new(None);
        let roots = resolver.search_roots(Path::new("a/b"), true);
        assert_eq!(roots, paths(&["a/b", "a"]));
    }

    #[test]
    fn find_in_start_directory() {
        let temp = TempDir::new().unwrap();
        let expected = make_venv(temp.path(), "myvenv");
        let resolver = Resolver::new(None);

        let found = resolver.find("myvenv", temp.path(), true).unwrap();

        assert_eq!(found, expected);
    }

    #[test]
    fn find_from_descendant_traverses_up() {
        let temp = TempDir::new().unwrap();
        let expected = make_venv(temp.path(), "parentvenv");
        let deep = temp.path().join("sub/deep");
        fs::create_dir_all(&deep).unwrap();
        let resolver = Resolver::new(None);

        assert_eq!(resolver.find("parentvenv", &deep, true).unwrap(), expected);
    }

    #[test]
    fn no_traverse_does_not_see_parent() {
        let temp = TempDir::new().unwrap();
        make_venv(temp.path(), "parentvenv");
        let sub = temp.path().join("sub");
        fs::create_dir(&sub).unwrap();
        let resolver = Resolver::new(None);

        let err = resolver.find("parentvenv", &sub, false).unwrap_err();

        assert!(matches!(err, VupError::VenvNotFound { .. }));
    }

    #[test]
    fn nearest_root_wins() {
        let temp = TempDir::new().unwrap();
        make_venv(temp.path(), "dev");
        let project = temp.path().join("project");
        let nearer = make_venv(&project, "dev");
        let resolver = Resolver::new(None);

        assert_eq!(resolver.find("dev", &project, true).unwrap(), nearer);
    }

    #[test]
    fn home_fallback_applies_without_traversal() {
        let home = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let expected = make_venv(home.path(), "global");
        let resolver = Resolver::new(Some(home.path().to_path_buf()));

        assert_eq!(resolver.find("global", work.path(), false).unwrap(), expected);
    }

    #[test]
    fn broken_venv_is_still_found() {
        let temp = TempDir::new().unwrap();
        let broken = temp.path().join(".venv/broken");
        fs::create_dir_all(&broken).unwrap();
        let resolver = Resolver::new(None);

        assert_eq!(resolver.find("broken", temp.path(), true).unwrap(), broken);
    }

    #[test]
    fn plain_file_does_not_match() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".venv")).unwrap();
        fs::write(temp.path().join(".venv/notadir"), "").unwrap();
        let resolver = Resolver::new(None);

        assert!(resolver.find("notadir", temp.path(), false).is_err());
    }

    #[test]
    fn missing_everywhere_is_not_found() {
        let temp = TempDir::new().unwrap();
        let resolver = Resolver::new(Some(temp.path().to_path_buf()));

        let err = resolver.find("nonexistent", temp.path(), true).unwrap_err();

        assert!(err.to_string().contains("not found"));
    }
}
