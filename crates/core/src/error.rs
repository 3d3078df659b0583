use std::path::PathBuf;

/// Failure of a user-initiated stylesheet creation.
///
/// The `Display` text of each variant is the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum CreateError {
    /// Invoked without a path while no document is active.
    #[error("No file is currently open in the editor.")]
    NoActiveDocument,

    /// The path is not inside `lwc/<component>`.
    #[error("The selected item is not inside an LWC component folder (lwc/<component>).")]
    NotAComponentFolder { path: PathBuf },

    /// The probe or the write failed.
    #[error("Error creating CSS file: {message}")]
    WriteFailed { path: PathBuf, message: String },
}

impl CreateError {
    /// Stable identifier used in machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            CreateError::NoActiveDocument => "no_active_document",
            CreateError::NotAComponentFolder { .. } => "not_a_component_folder",
            CreateError::WriteFailed { .. } => "write_failed",
        }
    }

    pub fn to_json_value(&self) -> serde_json::Value {
        let path = match self {
            CreateError::NoActiveDocument => None,
            CreateError::NotAComponentFolder { path } | CreateError::WriteFailed { path, .. } => {
                Some(path.display().to_string())
            }
        };
        serde_json::json!({
            "kind":    self.kind(),
            "path":    path,
            "message": self.to_string(),
        })
    }
}

/// Failure reported by a [`Host`](crate::host::Host) implementation.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("host connection closed")]
    Disconnected,

    #[error("host rejected the request: {0}")]
    Rejected(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
