//! claude-statusline - Two-line terminal status summary
//!
//! Reads session metadata JSON from stdin, queries git branch and
//! working-tree state with timeout-guarded subprocesses, and renders a
//! two-line, optionally ANSI-colored status banner to stdout.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod git;
pub mod render;
pub mod session;
pub mod theme;

// Re-export commonly used types
pub use config::{ColorScheme, ConfigOverrides, RenderConfig};
pub use git::{query_branch, query_dirty_count, GitQueryError, GitState};
pub use render::{fallback_lines, format_line1, format_line2, render};
pub use session::{parse_input, SessionInfo};
pub use theme::Color;
