//! Stylesheet creation, shared by both command bindings.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::availability::AvailabilityTracker;
use crate::classify::classify;
use crate::error::CreateError;
use crate::host::Host;
use crate::io::atomic_write;
use crate::probe::{probe, Probe};

/// Successful result of a creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "path", rename_all = "snake_case")]
pub enum CreateOutcome {
    /// A new stylesheet was written at this path.
    Created(PathBuf),
    /// The stylesheet was already there; the user was offered to open it.
    AlreadyExists(PathBuf),
}

impl CreateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            CreateOutcome::Created(path) | CreateOutcome::AlreadyExists(path) => path,
        }
    }
}

/// Create the stylesheet for the component containing `path`.
///
/// Without `path` the host's active document is used. Host failures after
/// the decision has been made (prompt, open, info message) are logged and do
/// not change the outcome.
pub fn create_stylesheet<H: Host + ?Sized>(
    host: &mut H,
    tracker: &mut AvailabilityTracker,
    path: Option<&Path>,
    placeholder: &str,
) -> Result<CreateOutcome, CreateError> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => host.active_document().ok_or(CreateError::NoActiveDocument)?,
    };

    let folder = classify(&target).ok_or_else(|| CreateError::NotAComponentFolder {
        path: target.clone(),
    })?;
    let stylesheet = folder.stylesheet_path();

    match probe(&stylesheet) {
        Probe::Present => {
            let message = format!("CSS file already exists for \"{}\". Open it?", folder.name());
            if let Err(e) = host.prompt_open(&message, &stylesheet) {
                tracing::warn!(error = %e, "failed to offer opening existing stylesheet");
            }
            Ok(CreateOutcome::AlreadyExists(stylesheet))
        }
        Probe::Indeterminate(e) => Err(CreateError::WriteFailed {
            path: stylesheet,
            message: e.to_string(),
        }),
        Probe::Absent => {
            atomic_write(&stylesheet, placeholder.as_bytes()).map_err(|e| {
                CreateError::WriteFailed {
                    path: stylesheet.clone(),
                    message: e.to_string(),
                }
            })?;
            tracing::info!(path = %stylesheet.display(), "created stylesheet");

            tracker.recompute(&mut *host, Some(&stylesheet));

            if let Err(e) = host.open_document(&stylesheet) {
                tracing::warn!(error = %e, "failed to open new stylesheet");
            }
            host.show_info(&format!("CSS file created for \"{}\".", folder.name()));
            Ok(CreateOutcome::Created(stylesheet))
        }
    }
}

/// Command boundary: run [`create_stylesheet`] and report any failure to
/// the user as a single error message.
pub fn run_command<H: Host + ?Sized>(
    host: &mut H,
    tracker: &mut AvailabilityTracker,
    path: Option<&Path>,
    placeholder: &str,
) -> Option<CreateOutcome> {
    match create_stylesheet(&mut *host, tracker, path, placeholder) {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            tracing::debug!(kind = e.kind(), error = %e, "stylesheet command failed");
            host.show_error(&e.to_string());
            None
        }
    }
}
