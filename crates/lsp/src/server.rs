//! LSP server main loop with request/notification dispatch.
//!
//! Uses `lsp-server` (synchronous, crossbeam-based) for the transport.
//! The editor-switch debounce is driven by the loop itself: while a
//! recomputation is pending, the receiver is polled with a timeout equal to
//! the time left on the debouncer.

use crossbeam_channel::RecvTimeoutError;
use lsp_server::{Connection, ErrorCode, Message, Notification, Request, RequestId, Response};
use lsp_types::notification::{
    DidChangeWatchedFiles, DidCloseTextDocument, DidOpenTextDocument, DidSaveTextDocument, Exit,
    Notification as _,
};
use lsp_types::request::{ExecuteCommand, RegisterCapability, Request as _};
use lsp_types::{
    DidChangeWatchedFilesRegistrationOptions, ExecuteCommandOptions, ExecuteCommandParams,
    FileChangeType, FileSystemWatcher, GlobPattern, InitializeParams, Registration,
    RegistrationParams, ServerCapabilities, TextDocumentSyncCapability, TextDocumentSyncKind,
    TextDocumentSyncOptions, TextDocumentSyncSaveOptions, WatchKind,
};
use lwc_css_core::{run_command, AvailabilityTracker, Debouncer, Settings, SystemClock, COMMANDS};
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use crate::host::{LspHost, Pending};
use crate::protocol::{DidChangeActiveEditor, DidChangeActiveEditorParams};
use crate::uri::{uri_str_to_path, uri_to_path};

const WATCHER_REGISTRATION_ID: &str = "lwc-css/stylesheet-watcher";

/// Options supplied by the command line; they win over the editor's
/// initialization options.
#[derive(Debug, Clone, Default)]
pub struct ServeOptions {
    pub debounce_ms: Option<u64>,
}

/// Run the LSP server over stdio until shutdown.
pub fn run(options: ServeOptions) -> Result<(), Box<dyn std::error::Error>> {
    let (connection, io_threads) = Connection::stdio();
    serve(connection, options)?;
    io_threads.join()?;
    Ok(())
}

/// Run the server on an established connection (stdio or in-memory).
pub fn serve(
    connection: Connection,
    options: ServeOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    // ── Initialize handshake ──────────────────────────────────────────
    let init_json = serde_json::to_value(build_capabilities())?;
    let init_params: InitializeParams =
        serde_json::from_value(connection.initialize(init_json)?)?;

    let mut settings = Settings::from_options(init_params.initialization_options.as_ref());
    if let Some(ms) = options.debounce_ms {
        settings.debounce_ms = ms;
    }
    tracing::info!(?settings, "lwc-css language server initialized");

    let mut server = Server::new(&connection, settings);

    if supports_watcher_registration(&init_params) {
        server.register_watchers()?;
    } else {
        tracing::info!("client cannot register file watchers; stylesheet events unavailable");
    }

    // Startup recomputation: nothing is focused yet, so this publishes false.
    server.recompute(None);

    server.main_loop()
}

fn build_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: Some(TextDocumentSyncCapability::Options(
            TextDocumentSyncOptions {
                open_close: Some(true),
                change: Some(TextDocumentSyncKind::NONE),
                save: Some(TextDocumentSyncSaveOptions::Supported(true)),
                ..Default::default()
            },
        )),
        execute_command_provider: Some(ExecuteCommandOptions {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
            work_done_progress_options: Default::default(),
        }),
        ..Default::default()
    }
}

fn supports_watcher_registration(params: &InitializeParams) -> bool {
    params
        .capabilities
        .workspace
        .as_ref()
        .and_then(|w| w.did_change_watched_files.as_ref())
        .and_then(|d| d.dynamic_registration)
        .unwrap_or(false)
}

struct Server<'a> {
    connection: &'a Connection,
    host: LspHost<'a>,
    tracker: AvailabilityTracker,
    debouncer: Debouncer<SystemClock>,
    settings: Settings,
}

impl<'a> Server<'a> {
    fn new(connection: &'a Connection, settings: Settings) -> Self {
        Self {
            connection,
            host: LspHost::new(connection),
            tracker: AvailabilityTracker::new(settings.context_key.clone()),
            debouncer: Debouncer::new(SystemClock, settings.debounce()),
            settings,
        }
    }

    fn register_watchers(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let options = DidChangeWatchedFilesRegistrationOptions {
            watchers: vec![FileSystemWatcher {
                glob_pattern: GlobPattern::String(self.settings.watch_glob.clone()),
                kind: Some(WatchKind::Create | WatchKind::Delete),
            }],
        };
        let params = RegistrationParams {
            registrations: vec![Registration {
                id: WATCHER_REGISTRATION_ID.to_string(),
                method: DidChangeWatchedFiles::METHOD.to_string(),
                register_options: Some(serde_json::to_value(options)?),
            }],
        };
        self.host
            .send_request(RegisterCapability::METHOD, params, Pending::RegisterWatchers)?;
        Ok(())
    }

    // ── Main loop ─────────────────────────────────────────────────────
    fn main_loop(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        loop {
            let msg = match self.debouncer.remaining() {
                Some(timeout) => match self.connection.receiver.recv_timeout(timeout) {
                    Ok(msg) => msg,
                    Err(RecvTimeoutError::Timeout) => {
                        self.fire_debounced();
                        continue;
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                },
                None => match self.connection.receiver.recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                },
            };

            match msg {
                Message::Request(req) => {
                    if self.connection.handle_shutdown(&req)? {
                        break;
                    }
                    self.handle_request(req)?;
                }
                Message::Notification(not) => {
                    if not.method == Exit::METHOD {
                        break;
                    }
                    self.handle_notification(not);
                }
                Message::Response(resp) => self.host.handle_response(resp),
            }

            self.fire_debounced();
        }
        Ok(())
    }

    fn fire_debounced(&mut self) {
        if self.debouncer.fire_if_due() {
            self.recompute(None);
        }
    }

    fn recompute(&mut self, trigger: Option<PathBuf>) {
        self.tracker.recompute(&mut self.host, trigger.as_deref());
    }

    fn handle_request(&mut self, req: Request) -> Result<(), Box<dyn std::error::Error>> {
        let resp = if req.method == ExecuteCommand::METHOD {
            match serde_json::from_value::<ExecuteCommandParams>(req.params) {
                Ok(params) => self.execute_command(req.id, params),
                Err(e) => {
                    tracing::warn!(error = %e, "malformed executeCommand params");
                    Response::new_err(
                        req.id,
                        ErrorCode::InvalidParams as i32,
                        format!("invalid params: {e}"),
                    )
                }
            }
        } else {
            // Unknown request -- method not found
            Response::new_err(
                req.id,
                ErrorCode::MethodNotFound as i32,
                format!("method not found: {}", req.method),
            )
        };
        self.connection.sender.send(Message::Response(resp))?;
        Ok(())
    }

    fn execute_command(&mut self, id: RequestId, params: ExecuteCommandParams) -> Response {
        if !COMMANDS.contains(&params.command.as_str()) {
            return Response::new_err(
                id,
                ErrorCode::InvalidParams as i32,
                format!("unknown command: {}", params.command),
            );
        }
        let path = params.arguments.first().and_then(command_path_argument);
        let outcome = run_command(
            &mut self.host,
            &mut self.tracker,
            path.as_deref(),
            &self.settings.placeholder,
        );
        match serde_json::to_value(outcome) {
            Ok(value) => Response::new_ok(id, value),
            Err(e) => Response::new_err(id, ErrorCode::InternalError as i32, e.to_string()),
        }
    }

    fn handle_notification(&mut self, not: Notification) {
        match not.method.as_str() {
            m if m == DidOpenTextDocument::METHOD => {
                let Some(params) =
                    parse_params::<lsp_types::DidOpenTextDocumentParams>(&not.method, not.params)
                else {
                    return;
                };
                let uri = params.text_document.uri;
                self.host.documents.open(uri.as_str(), uri_to_path(&uri));
                self.debouncer.trigger();
            }
            m if m == DidChangeActiveEditor::METHOD => {
                let Some(params) =
                    parse_params::<DidChangeActiveEditorParams>(&not.method, not.params)
                else {
                    return;
                };
                match params.uri {
                    Some(uri) => {
                        let path = uri_to_path(&uri);
                        self.host.documents.set_active(Some((uri.as_str(), path)));
                    }
                    None => self.host.documents.set_active(None),
                }
                self.debouncer.trigger();
            }
            m if m == DidCloseTextDocument::METHOD => {
                let Some(params) =
                    parse_params::<lsp_types::DidCloseTextDocumentParams>(&not.method, not.params)
                else {
                    return;
                };
                self.host.documents.close(params.text_document.uri.as_str());
                self.debouncer.trigger();
            }
            m if m == DidSaveTextDocument::METHOD => {
                // Saves do not move focus; re-check the focused document.
                self.recompute(None);
            }
            m if m == DidChangeWatchedFiles::METHOD => {
                let Some(params) = parse_params::<lsp_types::DidChangeWatchedFilesParams>(
                    &not.method,
                    not.params,
                ) else {
                    return;
                };
                for change in params.changes {
                    let path = uri_to_path(&change.uri);
                    let trigger = if change.typ == FileChangeType::CREATED {
                        path
                    } else if change.typ == FileChangeType::DELETED {
                        // The file is gone; its folder is still there to classify.
                        match path.parent() {
                            Some(parent) => parent.to_path_buf(),
                            None => continue,
                        }
                    } else {
                        continue;
                    };
                    self.recompute(Some(trigger));
                }
            }
            _ => {
                // Unknown notification -- ignore
            }
        }
    }
}

/// Decode notification params; malformed ones are logged and dropped.
fn parse_params<T: DeserializeOwned>(method: &str, params: serde_json::Value) -> Option<T> {
    match serde_json::from_value(params) {
        Ok(params) => Some(params),
        Err(e) => {
            tracing::warn!(method, error = %e, "ignoring malformed notification");
            None
        }
    }
}

/// Interpret the first command argument as a path.
///
/// Accepts a `file://` URI string, a plain path string, or an object with
/// `fsPath`, `uri`, or `path` (the shapes editors pass for explorer
/// selections).
fn command_path_argument(arg: &serde_json::Value) -> Option<PathBuf> {
    match arg {
        serde_json::Value::String(s) if !s.is_empty() => Some(uri_str_to_path(s)),
        serde_json::Value::Object(map) => ["fsPath", "uri", "path"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .filter(|s| !s.is_empty())
            .map(uri_str_to_path),
        _ => None,
    }
}
