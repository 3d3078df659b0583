//! Custom notifications exchanged with the editor-side client.

use lsp_types::notification::Notification;
use lsp_types::Uri;
use serde::{Deserialize, Serialize};

/// Server → client: set a boolean UI-context key (VS Code `setContext`).
pub enum SetContext {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetContextParams {
    pub key: String,
    pub value: bool,
}

impl Notification for SetContext {
    type Params = SetContextParams;
    const METHOD: &'static str = "lwcCss/setContext";
}

/// Client → server: the focused editor changed. `uri` is null when no
/// text editor has focus.
pub enum DidChangeActiveEditor {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeActiveEditorParams {
    pub uri: Option<Uri>,
}

impl Notification for DidChangeActiveEditor {
    type Params = DidChangeActiveEditorParams;
    const METHOD: &'static str = "lwcCss/didChangeActiveEditor";
}
