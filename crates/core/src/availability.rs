//! Keeps the "can add CSS" UI flag in step with the filesystem.

use std::path::Path;

use crate::classify::classify;
use crate::host::Host;
use crate::probe::{probe, Probe};

/// Availability of stylesheet creation at `path`.
///
/// `Some(true)` when `path` is in a component folder whose stylesheet is
/// missing, `Some(false)` when it is not a component path or the stylesheet
/// exists, `None` when the stylesheet probe was indeterminate.
pub fn availability_at(path: &Path) -> Option<bool> {
    let Some(folder) = classify(path) else {
        return Some(false);
    };
    match probe(&folder.stylesheet_path()) {
        Probe::Absent => Some(true),
        Probe::Present => Some(false),
        Probe::Indeterminate(e) => {
            tracing::warn!(
                folder = %folder.path().display(),
                error = %e,
                "stylesheet probe failed; leaving availability unchanged"
            );
            None
        }
    }
}

/// Owner of the last value published to the host.
#[derive(Debug)]
pub struct AvailabilityTracker {
    context_key: String,
    last_published: Option<bool>,
}

impl AvailabilityTracker {
    pub fn new(context_key: impl Into<String>) -> Self {
        Self {
            context_key: context_key.into(),
            last_published: None,
        }
    }

    pub fn context_key(&self) -> &str {
        &self.context_key
    }

    /// Value most recently accepted by the host; `None` before the first publish.
    pub fn last_published(&self) -> Option<bool> {
        self.last_published
    }

    /// Re-derive the flag and publish it if it changed.
    ///
    /// Uses `trigger` when given, otherwise the host's active document.
    /// Returns `true` when a publish happened. Never fails: an indeterminate
    /// probe or a rejected publish leaves the stored value untouched.
    pub fn recompute<H: Host + ?Sized>(&mut self, host: &mut H, trigger: Option<&Path>) -> bool {
        let target = match trigger {
            Some(path) => Some(path.to_path_buf()),
            None => host.active_document(),
        };

        let desired = match target.as_deref() {
            None => false,
            Some(path) => match availability_at(path) {
                Some(value) => value,
                None => return false,
            },
        };

        if self.last_published == Some(desired) {
            tracing::debug!(desired, "availability unchanged");
            return false;
        }

        match host.set_context(&self.context_key, desired) {
            Ok(()) => {
                tracing::debug!(
                    key = %self.context_key,
                    desired,
                    path = ?target,
                    "published availability"
                );
                self.last_published = Some(desired);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to publish availability");
                false
            }
        }
    }
}
