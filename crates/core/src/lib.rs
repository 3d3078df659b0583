//! lwc-css-core: Lightning Web Component stylesheet helper.
//!
//! Decides whether a path belongs to an LWC component folder, derives the
//! component's stylesheet path, creates the stylesheet on request, and
//! keeps a "can add CSS" flag in sync with the filesystem.
//!
//! # Public API
//!
//! - [`classify()`] -- recognise `lwc/<component>` folders
//! - [`AvailabilityTracker`] -- publish the UI flag on change only
//! - [`create_stylesheet()`] / [`run_command()`] -- the creation command
//! - [`Debouncer`] -- cancellable timer for editor-switch coalescing
//! - [`Host`] -- the editor surface everything above talks to

/// Command bound to the explorer context action.
pub const COMMAND_ADD_CSS_FILE: &str = "lwc-css-helper.addCssFile";
/// Command bound to the palette entry gated by the availability flag.
pub const COMMAND_ADD_CSS_FILE_FROM_EDITOR: &str = "lwc-css-helper.addCssFileFromEditor";

/// Both command names; they share one handler.
pub const COMMANDS: [&str; 2] = [COMMAND_ADD_CSS_FILE, COMMAND_ADD_CSS_FILE_FROM_EDITOR];

pub mod availability;
pub mod classify;
pub mod create;
pub mod debounce;
pub mod error;
pub mod host;
pub mod io;
pub mod probe;
pub mod settings;

// ── Convenience re-exports ───────────────────────────────────────────

pub use availability::{availability_at, AvailabilityTracker};
pub use classify::{classify, classify_lexical, stylesheet_path_for, ComponentFolder};
pub use create::{create_stylesheet, run_command, CreateOutcome};
pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};
pub use error::{CreateError, HostError};
pub use host::Host;
pub use probe::{probe, Probe};
pub use settings::Settings;
