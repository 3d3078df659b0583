//! Runtime configuration.
//!
//! Every field has a default, so a partial (or empty) options object from
//! the editor is always valid.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DEBOUNCE_MS: u64 = 75;
pub const DEFAULT_CONTEXT_KEY: &str = "lwc-css-helper.canAddCssFromEditor";
pub const DEFAULT_WATCH_GLOB: &str = "**/lwc/*/*.css";
pub const DEFAULT_PLACEHOLDER: &str = "/* Add your CSS styles here */\n";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Delay before an editor switch triggers a recomputation.
    pub debounce_ms: u64,
    /// UI-context key carrying the availability flag.
    pub context_key: String,
    /// Glob registered with the editor's file watcher.
    pub watch_glob: String,
    /// Content written into a new stylesheet.
    pub placeholder: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            context_key: DEFAULT_CONTEXT_KEY.to_owned(),
            watch_glob: DEFAULT_WATCH_GLOB.to_owned(),
            placeholder: DEFAULT_PLACEHOLDER.to_owned(),
        }
    }
}

impl Settings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Parse editor-supplied options, falling back to defaults on any error.
    pub fn from_options(options: Option<&serde_json::Value>) -> Self {
        let Some(options) = options else {
            return Self::default();
        };
        match Settings::deserialize(options) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring malformed initialization options");
                Self::default()
            }
        }
    }
}
