//! Stylesheet existence checks.
//!
//! The filesystem is the source of truth, so nothing here caches: every
//! decision re-stats the path.

use std::fs;
use std::io;
use std::path::Path;

/// Outcome of a single existence check.
#[derive(Debug)]
pub enum Probe {
    Present,
    Absent,
    /// The stat failed for a reason other than not-found.
    Indeterminate(io::Error),
}

impl Probe {
    pub fn is_absent(&self) -> bool {
        matches!(self, Probe::Absent)
    }
}

/// Stat `path` once and classify the result.
pub fn probe(path: &Path) -> Probe {
    match fs::metadata(path) {
        Ok(_) => Probe::Present,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Probe::Absent,
        Err(e) => Probe::Indeterminate(e),
    }
}
