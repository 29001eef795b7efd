//! claude-statusline - Two-line terminal status summary
//!
//! CLI entry point. The host pipes session metadata JSON to stdin; this
//! binary prints two formatted lines and always exits 0 — a broken
//! status line must never break the host UI.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::AsyncReadExt;

use claude_statusline::config::{ConfigOverrides, RenderConfig};
use claude_statusline::git::GitState;
use claude_statusline::render::{fallback_lines, render};
use claude_statusline::session::parse_input;

/// Two-line terminal status summary for Claude Code sessions
///
/// Reads one session metadata JSON document from stdin and prints model,
/// output style, working directory, and git branch/dirty-state.
#[derive(Parser, Debug)]
#[command(name = "claude-statusline", version, about)]
struct Cli {
    /// Color scheme: "minimal" disables ANSI coloring
    /// (overrides CLAUDE_STATUS_COLOR_SCHEME)
    #[arg(long)]
    color_scheme: Option<String>,

    /// Timeout in seconds for each git subprocess call
    /// (overrides GIT_TIMEOUT_SECONDS)
    #[arg(long)]
    git_timeout_seconds: Option<f64>,
}

impl Cli {
    /// Convert parsed flags into configuration overrides.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            color_scheme: self.color_scheme.clone(),
            git_timeout_seconds: self.git_timeout_seconds,
        }
    }
}

/// Read stdin, query git, and render both status lines.
///
/// Any failure here is absorbed by the caller into the fallback render.
async fn run(config: &RenderConfig) -> Result<(String, String)> {
    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read session metadata from stdin")?;

    let session = parse_input(&input)?;

    let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let git = GitState::query(&dir, config.git_timeout).await;

    Ok(render(&session, &git, config.color_scheme))
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let config = RenderConfig::from_env(&cli.overrides());

    // Nothing escapes: decode failures and any unexpected error collapse
    // to the fixed fallback render, and the exit code stays 0.
    let (line1, line2) = run(&config)
        .await
        .unwrap_or_else(|_| fallback_lines(config.color_scheme));

    println!("{line1}\n{line2}");
}
