//! Document focus: which file the editor is showing.

use std::path::PathBuf;

/// Tracks the focused document by URI.
///
/// Only the focused document is kept; a focus change replaces it, so nothing
/// accumulates for documents the editor merely passed through.
#[derive(Debug, Default)]
pub struct DocumentState {
    active: Option<(String, PathBuf)>,
}

impl DocumentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening a document focuses it.
    pub fn open(&mut self, uri: &str, path: PathBuf) {
        self.active = Some((uri.to_owned(), path));
    }

    /// Closing the focused document leaves nothing focused.
    pub fn close(&mut self, uri: &str) {
        if self.active_uri() == Some(uri) {
            self.active = None;
        }
    }

    /// Record an explicit focus change.
    pub fn set_active(&mut self, focused: Option<(&str, PathBuf)>) {
        self.active = focused.map(|(uri, path)| (uri.to_owned(), path));
    }

    pub fn active_uri(&self) -> Option<&str> {
        self.active.as_ref().map(|(uri, _)| uri.as_str())
    }

    pub fn active_path(&self) -> Option<PathBuf> {
        self.active.as_ref().map(|(_, path)| path.clone())
    }
}
