//! Listing venvs across every search root.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::label::label;
use super::repository::VenvRepository;
use super::validator::Validation;

/// One listed venv, annotated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    pub path: PathBuf,
    /// Prompt-style label, e.g. `~/tools` or `myproject/dev`.
    pub label: String,
    /// The root whose `.venv` holds this entry.
    pub root: PathBuf,
    pub status: Validation,
    /// Path equals the active venv (`VIRTUAL_ENV`).
    pub active: bool,
    /// An earlier root has a venv with the same name, so `find` never
    /// returns this one.
    pub shadowed: bool,
}

/// All venvs reachable from a list of search roots, in search order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Collect entries from `roots` in order.
    ///
    /// Roots without a container are skipped. A container that cannot be
    /// read is logged and skipped rather than failing the whole listing.
    pub fn collect(roots: &[PathBuf], home: Option<&Path>, active: Option<&Path>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for root in roots {
            let repo = VenvRepository::new(root);
            let listed = match repo.list_entries() {
                Ok(listed) => listed,
                Err(e) => {
                    tracing::warn!(root = %root.display(), error = %e, "skipping unreadable container");
                    continue;
                }
            };

            entries.extend(listed.into_iter().map(|entry| {
                let shadowed = !seen.insert(entry.name.clone());
                CatalogEntry {
                    label: label(&entry.path, home),
                    active: active == Some(entry.path.as_path()),
                    root: root.clone(),
                    name: entry.name,
                    path: entry.path,
                    status: entry.status,
                    shadowed,
                }
            }));
        }

        Self { entries }
    }

    /// Every entry, grouped by root in search order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    /// Whether no root held any venv.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries marked active.
    pub fn active_count(&self) -> usize {
        self.entries().filter(|e| e.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn make_venv(root: &Path, name: &str) -> PathBuf {
        let path = root.join(".venv").join(name);
        fs::create_dir_all(path.join("bin")).unwrap();
        fs::write(path.join("bin/activate"), "").unwrap();
        path
    }

    #[test]
    fn empty_roots_give_empty_catalog() {
        let temp = TempDir::new().unwrap();
        let catalog = Catalog::collect(&[temp.path().to_path_buf()], None, None);
        assert!(catalog.is_empty());
        assert_eq!(catalog.entries().count(), 0);
    }

    #[test]
    fn entries_follow_root_order() {
        let project = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        make_venv(project.path(), "one");
        make_venv(project.path(), "two");
        make_venv(home.path(), "tools");
        let roots = vec![project.path().to_path_buf(), home.path().to_path_buf()];

        let catalog = Catalog::collect(&roots, Some(home.path()), None);

        let listed: Vec<(&str, &Path)> = catalog
            .entries()
            .map(|e| (e.name.as_str(), e.root.as_path()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("one", project.path()),
                ("two", project.path()),
                ("tools", home.path()),
            ]
        );
        assert_eq!(catalog.entries().last().unwrap().label, "~/tools");
    }

    #[test]
    fn marks_exactly_the_active_venv() {
        let temp = TempDir::new().unwrap();
        let active = make_venv(temp.path(), "activevenv");
        make_venv(temp.path(), "other");

        let catalog = Catalog::collect(&[temp.path().to_path_buf()], None, Some(&active));

        assert_eq!(catalog.active_count(), 1);
        let marked: Vec<&str> = catalog
            .entries()
            .filter(|e| e.active)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(marked, vec!["activevenv"]);
    }

    #[test]
    fn unrelated_active_path_marks_nothing() {
        let temp = TempDir::new().unwrap();
        make_venv(temp.path(), "one");
        let elsewhere = PathBuf::from("/opt/other/.venv/one");

        let catalog = Catalog::collect(&[temp.path().to_path_buf()], None, Some(&elsewhere));

        assert_eq!(catalog.active_count(), 0);
    }

    #[test]
    fn later_duplicates_are_shadowed() {
        let parent = TempDir::new().unwrap();
        let child = parent.path().join("child");
        make_venv(&child, "dev");
        make_venv(parent.path(), "dev");
        let roots = vec![child.clone(), parent.path().to_path_buf()];

        let catalog = Catalog::collect(&roots, None, None);

        let flags: Vec<(PathBuf, bool)> = catalog
            .entries()
            .map(|e| (e.root.clone(), e.shadowed))
            .collect();
        assert_eq!(
            flags,
            vec![(child, false), (parent.path().to_path_buf(), true)]
        );
    }

    #[test]
    fn broken_entries_keep_their_status() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".venv/broken")).unwrap();

        let catalog = Catalog::collect(&[temp.path().to_path_buf()], None, None);

        let entry = catalog.entries().next().unwrap();
        assert_eq!(entry.status, Validation::MissingActivateScript);
    }
}
