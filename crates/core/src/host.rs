//! The editor as seen from the core logic.
//!
//! Everything the tracker and creator need from the outside world goes
//! through this trait, so the same code runs under the language server and
//! under the terminal CLI.

use std::path::{Path, PathBuf};

use crate::error::HostError;

pub trait Host {
    /// Path of the document currently focused in the editor, if any.
    fn active_document(&self) -> Option<PathBuf>;

    /// Publish a boolean UI-context flag.
    fn set_context(&mut self, key: &str, value: bool) -> Result<(), HostError>;

    fn show_info(&mut self, message: &str);

    fn show_error(&mut self, message: &str);

    /// Ask whether to open `path`. The host opens it when the user accepts.
    ///
    /// Hosts with an asynchronous transport may return before the user
    /// answers.
    fn prompt_open(&mut self, message: &str, path: &Path) -> Result<(), HostError>;

    /// Open `path` as a document and focus it.
    fn open_document(&mut self, path: &Path) -> Result<(), HostError>;
}
