//! [`Host`] implementation that speaks LSP to the editor.
//!
//! Requests the server sends (`window/showMessageRequest`,
//! `window/showDocument`, `client/registerCapability`) are answered
//! asynchronously; their ids are kept in `pending` until the response
//! arrives through [`LspHost::handle_response`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use lsp_server::{Connection, Message, Notification, Request, RequestId, Response};
use lsp_types::notification::{Notification as _, ShowMessage};
use lsp_types::request::{Request as _, ShowDocument, ShowMessageRequest};
use lsp_types::{
    MessageActionItem, MessageType, ShowDocumentParams, ShowMessageParams,
    ShowMessageRequestParams,
};
use lwc_css_core::{Host, HostError};
use serde::Serialize;

use crate::document::DocumentState;
use crate::protocol::{SetContext, SetContextParams};
use crate::uri::path_to_uri;

const OPEN_ACTION: &str = "Open";
const CANCEL_ACTION: &str = "Cancel";

/// What to do when the response to a server-initiated request arrives.
#[derive(Debug)]
pub enum Pending {
    RegisterWatchers,
    OpenPrompt(PathBuf),
    ShowDocument(PathBuf),
}

pub struct LspHost<'a> {
    connection: &'a Connection,
    pub documents: DocumentState,
    next_id: i32,
    pending: HashMap<RequestId, Pending>,
}

impl<'a> LspHost<'a> {
    pub fn new(connection: &'a Connection) -> Self {
        Self {
            connection,
            documents: DocumentState::new(),
            next_id: 0,
            pending: HashMap::new(),
        }
    }

    /// Send a request to the client and remember what its response means.
    pub fn send_request(
        &mut self,
        method: &str,
        params: impl Serialize,
        pending: Pending,
    ) -> Result<(), HostError> {
        self.next_id += 1;
        let id = RequestId::from(self.next_id);
        let req = Request::new(id.clone(), method.to_string(), params);
        self.send(Message::Request(req))?;
        self.pending.insert(id, pending);
        Ok(())
    }

    fn send_notification(&self, method: &str, params: impl Serialize) -> Result<(), HostError> {
        let not = Notification::new(method.to_string(), params);
        self.send(Message::Notification(not))
    }

    fn send(&self, msg: Message) -> Result<(), HostError> {
        self.connection
            .sender
            .send(msg)
            .map_err(|_| HostError::Disconnected)
    }

    fn show_message(&mut self, typ: MessageType, message: &str) {
        let params = ShowMessageParams {
            typ,
            message: message.to_owned(),
        };
        if let Err(e) = self.send_notification(ShowMessage::METHOD, params) {
            tracing::warn!(error = %e, "failed to show message");
        }
    }

    /// Resolve a client response against the pending request table.
    pub fn handle_response(&mut self, resp: Response) {
        let Some(pending) = self.pending.remove(&resp.id) else {
            tracing::debug!(id = ?resp.id, "response to unknown request");
            return;
        };

        if let Some(err) = resp.error {
            tracing::warn!(?pending, code = err.code, reason = %err.message, "client rejected request");
            return;
        }

        match pending {
            Pending::RegisterWatchers => tracing::debug!("stylesheet watcher registered"),
            Pending::OpenPrompt(path) => {
                let chosen = resp
                    .result
                    .as_ref()
                    .and_then(|r| r.get("title"))
                    .and_then(|t| t.as_str());
                if chosen == Some(OPEN_ACTION) {
                    if let Err(e) = self.open_document(&path) {
                        tracing::warn!(error = %e, "failed to open stylesheet");
                    }
                }
            }
            Pending::ShowDocument(path) => {
                let success = resp
                    .result
                    .as_ref()
                    .and_then(|r| r.get("success"))
                    .and_then(|s| s.as_bool())
                    .unwrap_or(false);
                if !success {
                    tracing::warn!(path = %path.display(), "editor did not open document");
                }
            }
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl Host for LspHost<'_> {
    fn active_document(&self) -> Option<PathBuf> {
        self.documents.active_path()
    }

    fn set_context(&mut self, key: &str, value: bool) -> Result<(), HostError> {
        let params = SetContextParams {
            key: key.to_owned(),
            value,
        };
        self.send_notification(SetContext::METHOD, params)
    }

    fn show_info(&mut self, message: &str) {
        self.show_message(MessageType::INFO, message);
    }

    fn show_error(&mut self, message: &str) {
        self.show_message(MessageType::ERROR, message);
    }

    fn prompt_open(&mut self, message: &str, path: &Path) -> Result<(), HostError> {
        let action = |title: &str| MessageActionItem {
            title: title.to_owned(),
            properties: HashMap::new(),
        };
        let params = ShowMessageRequestParams {
            typ: MessageType::INFO,
            message: message.to_owned(),
            actions: Some(vec![action(OPEN_ACTION), action(CANCEL_ACTION)]),
        };
        self.send_request(
            ShowMessageRequest::METHOD,
            params,
            Pending::OpenPrompt(path.to_path_buf()),
        )
    }

    fn open_document(&mut self, path: &Path) -> Result<(), HostError> {
        let uri = path_to_uri(path).map_err(HostError::Rejected)?;
        let params = ShowDocumentParams {
            uri,
            external: Some(false),
            take_focus: Some(true),
            selection: None,
        };
        self.send_request(
            ShowDocument::METHOD,
            params,
            Pending::ShowDocument(path.to_path_buf()),
        )
    }
}
