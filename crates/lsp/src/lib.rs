//! Language server exposing the LWC stylesheet helper to editors.
//!
//! Binds the editor surface the core logic needs to LSP: commands arrive
//! as `workspace/executeCommand`, focus changes as `didOpen`/`didClose` or
//! the custom `lwcCss/didChangeActiveEditor`, stylesheet creation and
//! deletion through a dynamically registered file watcher. The availability
//! flag leaves as the custom `lwcCss/setContext` notification. Connects to
//! editors via the `lwc-css lsp` CLI subcommand over stdio.

pub mod document;
pub mod host;
pub mod protocol;
pub mod server;
pub mod uri;

pub use server::{serve, ServeOptions};

/// Run the LSP server over stdio. This is the public entry point
/// called by `lwc-css lsp`.
pub fn run(options: ServeOptions) -> Result<(), Box<dyn std::error::Error>> {
    server::run(options)
}
