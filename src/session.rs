//! Session metadata input model
//!
//! Parses the JSON blob the host application pipes to stdin on each
//! statusline tick. Every field is optional; the host may omit any of
//! them, and unknown fields are ignored for forward-compatibility.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Session metadata supplied by the host application
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct SessionInfo {
    /// Active model
    #[serde(default)]
    pub model: Option<ModelInfo>,
    /// Active output style
    #[serde(default)]
    pub output_style: Option<StyleInfo>,
    /// Workspace the session is running in
    #[serde(default)]
    pub workspace: Option<WorkspaceInfo>,
}

/// Model identity
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ModelInfo {
    /// Human-readable model name, e.g. "Claude Opus 4"
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Output style selection. Hosts have shipped both field names.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct StyleInfo {
    /// Style name
    #[serde(default)]
    pub name: Option<String>,
    /// Legacy field carrying the same information
    #[serde(default)]
    pub current_style: Option<String>,
}

/// Workspace location
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct WorkspaceInfo {
    /// Absolute path of the session's working directory
    #[serde(default)]
    pub current_dir: Option<String>,
}

impl SessionInfo {
    /// The model name to display: first whitespace-delimited token of
    /// `display_name`, or "Claude" when absent or empty.
    #[must_use]
    pub fn model_token(&self) -> &str {
        self.model
            .as_ref()
            .and_then(|m| m.display_name.as_deref())
            .and_then(|name| name.split_whitespace().next())
            .unwrap_or("Claude")
    }

    /// The output style name: `name`, falling back to `current_style`,
    /// falling back to "default".
    #[must_use]
    pub fn style_name(&self) -> &str {
        self.output_style
            .as_ref()
            .and_then(|s| s.name.as_deref().or(s.current_style.as_deref()))
            .unwrap_or("default")
    }

    /// The session working directory, or "" when absent.
    #[must_use]
    pub fn current_dir(&self) -> &str {
        self.workspace
            .as_ref()
            .and_then(|w| w.current_dir.as_deref())
            .unwrap_or("")
    }
}

/// Parse a session metadata document from raw stdin text.
pub fn parse_input(input: &str) -> Result<SessionInfo> {
    serde_json::from_str(input).context("Failed to parse session JSON")
}
