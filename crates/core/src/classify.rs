//! Recognition of LWC component folders and stylesheet path derivation.
//!
//! Classification is lexical: a directory is a component folder when its
//! immediate parent segment is literally `lwc` and its own name is not the
//! reserved `__tests__`. The only filesystem access is a single probe that
//! decides whether the supplied path is a directory or a file inside one.
//! Symbolic links are not resolved; the caller's path string is what gets
//! split.

use std::fs;
use std::path::{Component, Path, PathBuf};

/// Directory name that holds component folders.
pub const LWC_DIR: &str = "lwc";

/// Reserved folder name under `lwc/` used for Jest tests.
pub const TESTS_DIR: &str = "__tests__";

/// A directory directly under an `lwc` directory, other than `__tests__`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFolder {
    path: PathBuf,
    name: String,
}

impl ComponentFolder {
    /// Directory path, exactly as supplied to the classifier.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Component name (last path segment).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Segment directly above the folder. Always `lwc`.
    pub fn parent_name(&self) -> &str {
        LWC_DIR
    }

    /// Canonical stylesheet location: `<folder>/<name>.css`.
    pub fn stylesheet_path(&self) -> PathBuf {
        self.path.join(format!("{}.css", self.name))
    }
}

/// Classify any path (file or directory) as a component folder.
///
/// Files are replaced by their containing directory. A path that cannot be
/// probed (missing, permission denied) yields `None` rather than an error.
pub fn classify(path: &Path) -> Option<ComponentFolder> {
    let metadata = fs::metadata(path).ok()?;
    let dir = if metadata.is_dir() {
        path
    } else {
        path.parent()?
    };
    classify_lexical(dir)
}

/// Apply the folder rule to a path already known to be a directory.
///
/// No filesystem access. Fewer than two segments yields `None`.
pub fn classify_lexical(dir: &Path) -> Option<ComponentFolder> {
    let mut segments = dir.components().rev();
    let name = normal_segment(segments.next()?)?;
    let parent_name = normal_segment(segments.next()?)?;

    if parent_name != LWC_DIR || name.is_empty() || name == TESTS_DIR {
        return None;
    }

    Some(ComponentFolder {
        path: dir.to_path_buf(),
        name: name.to_owned(),
    })
}

/// Free-function form of [`ComponentFolder::stylesheet_path`].
pub fn stylesheet_path_for(folder: &ComponentFolder) -> PathBuf {
    folder.stylesheet_path()
}

fn normal_segment(component: Component<'_>) -> Option<&str> {
    match component {
        Component::Normal(segment) => segment.to_str(),
        _ => None,
    }
}
