//! Shared fixtures: an in-memory host that records every call, and helpers
//! to lay out LWC component trees in a temp dir.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use lwc_css_core::{Host, HostError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    SetContext(String, bool),
    Info(String),
    Error(String),
    PromptOpen(String, PathBuf),
    Open(PathBuf),
}

/// Host double. `accept_open` decides how the simulated user answers
/// open prompts.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub active: Option<PathBuf>,
    pub accept_open: bool,
    pub reject_set_context: bool,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn with_active(path: impl Into<PathBuf>) -> Self {
        Self {
            active: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn published(&self) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::SetContext(_, value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Open(path) => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Error(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Host for RecordingHost {
    fn active_document(&self) -> Option<PathBuf> {
        self.active.clone()
    }

    fn set_context(&mut self, key: &str, value: bool) -> Result<(), HostError> {
        if self.reject_set_context {
            return Err(HostError::Rejected("setContext unavailable".into()));
        }
        self.calls.push(HostCall::SetContext(key.to_owned(), value));
        Ok(())
    }

    fn show_info(&mut self, message: &str) {
        self.calls.push(HostCall::Info(message.to_owned()));
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(HostCall::Error(message.to_owned()));
    }

    fn prompt_open(&mut self, message: &str, path: &Path) -> Result<(), HostError> {
        self.calls
            .push(HostCall::PromptOpen(message.to_owned(), path.to_path_buf()));
        if self.accept_open {
            self.open_document(path)?;
        }
        Ok(())
    }

    fn open_document(&mut self, path: &Path) -> Result<(), HostError> {
        self.calls.push(HostCall::Open(path.to_path_buf()));
        Ok(())
    }
}

/// Create `<root>/force-app/main/default/lwc/<name>/<name>.js` and return
/// the component folder.
pub fn make_component(root: &Path, name: &str) -> PathBuf {
    let folder = root
        .join("force-app")
        .join("main")
        .join("default")
        .join("lwc")
        .join(name);
    fs::create_dir_all(&folder).expect("create component folder");
    fs::write(folder.join(format!("{name}.js")), "export default class {}\n")
        .expect("write component js");
    folder
}
