//! [`Host`] for running the stylesheet command outside an editor.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use lwc_css_core::{Host, HostError};

/// How to answer the "open existing stylesheet?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenPolicy {
    Ask,
    Always,
    Never,
}

pub(crate) struct TerminalHost {
    /// Stands in for the focused document: the working directory.
    active: Option<PathBuf>,
    open_policy: OpenPolicy,
    /// Suppress informational output (quiet or JSON mode).
    silent: bool,
}

impl TerminalHost {
    pub(crate) fn new(open_policy: OpenPolicy, silent: bool) -> Self {
        Self {
            active: std::env::current_dir().ok(),
            open_policy,
            silent,
        }
    }

    fn ask(&self, message: &str) -> bool {
        eprint!("{} [Open/Cancel]: ", message);
        let _ = std::io::stderr().flush();
        let mut input = String::new();
        if std::io::stdin().lock().read_line(&mut input).is_err() {
            return false;
        }
        matches!(input.trim().to_ascii_lowercase().as_str(), "open" | "o" | "y" | "yes")
    }
}

impl Host for TerminalHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn set_context(&mut self, key: &str, value: bool) -> Result<(), HostError> {
        tracing::debug!(key, value, "context flag (no editor attached)");
        Ok(())
    }

    fn show_info(&mut self, message: &str) {
        if !self.silent {
            eprintln!("{}", message);
        }
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn prompt_open(&mut self, message: &str, path: &Path) -> Result<(), HostError> {
        let open = match self.open_policy {
            OpenPolicy::Always => true,
            OpenPolicy::Never => false,
            OpenPolicy::Ask => self.ask(message),
        };
        if open {
            self.open_document(path)?;
        }
        Ok(())
    }

    /// Launch `$VISUAL` or `$EDITOR` (may carry flags, e.g. `code --wait`)
    /// on `path`; without either, do nothing.
    fn open_document(&mut self, path: &Path) -> Result<(), HostError> {
        let editor = std::env::var("VISUAL")
            .or_else(|_| std::env::var("EDITOR"))
            .ok()
            .filter(|e| !e.trim().is_empty());
        let Some(editor) = editor else {
            tracing::debug!(path = %path.display(), "no editor configured; not opening");
            return Ok(());
        };

        let mut words = editor.split_whitespace();
        let program = words.next().unwrap_or_default();
        let status = Command::new(program).args(words).arg(path).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(HostError::Rejected(format!("{} exited with {}", editor, status)))
        }
    }
}
