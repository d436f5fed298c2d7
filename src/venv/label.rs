//! Short venv labels for shell prompts.
//!
//! A venv at `<root>/.venv/<name>` is labelled `~/<name>` when `<root>` is the
//! home directory and `<project>/<name>` otherwise, where `<project>` is the
//! last segment of `<root>`. Labels come from path components; the disk is
//! only consulted to recognise a home directory reached through a symlink.

use std::ffi::OsStr;
use std::path::Path;

use super::repository::CONTAINER_DIR;

/// Format the prompt label for a venv path.
///
/// Paths that do not have the `<root>/.venv/<name>` shape fall back to their
/// final segment, or to the path itself when it has none.
pub fn label(venv_path: &Path, home: Option<&Path>) -> String {
    let Some(name) = venv_path.file_name() else {
        return venv_path.display().to_string();
    };
    let name = name.to_string_lossy();

    let root = match venv_path.parent() {
        Some(container) if container.file_name() == Some(OsStr::new(CONTAINER_DIR)) => {
            container.parent()
        }
        _ => None,
    };

    let Some(root) = root.filter(|r| !r.as_os_str().is_empty()) else {
        return name.into_owned();
    };

    if home.is_some_and(|home| is_home(root, home)) {
        return format!("~/{}", name);
    }

    match root.file_name() {
        Some(project) => format!("{}/{}", project.to_string_lossy(), name),
        // Only the filesystem root has no final segment.
        None => format!("/{}", name),
    }
}

/// Whether `root` is the home directory, either as written or physically.
fn is_home(root: &Path, home: &Path) -> bool {
    if root == home {
        return true;
    }
    match (root.canonicalize(), home.canonicalize()) {
        (Ok(root), Ok(home)) => root == home,
        _ => false,
    }
}
