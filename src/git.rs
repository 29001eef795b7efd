//! Git state queries
//!
//! Two scoped subprocess invocations per render: the current branch
//! (`git rev-parse --abbrev-ref HEAD`) and the working-tree change count
//! (`git status --porcelain`). Each call is bounded by a wall-clock
//! timeout, and every failure mode maps to a named [`GitQueryError`]
//! variant before degrading to "absent" at the public surface. A failed
//! or timed-out query never aborts the render.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;

/// Version-control state derived for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitState {
    /// Current branch name, if one could be determined
    pub branch: Option<String>,
    /// Number of changed working-tree paths, if the status query succeeded
    /// and reported any changes
    pub dirty_count: Option<usize>,
}

impl GitState {
    /// Query branch and working-tree status for `dir`.
    ///
    /// The two queries are independent and run concurrently, each under
    /// its own `timeout`.
    pub async fn query(dir: &Path, timeout: Duration) -> Self {
        let (branch, dirty_count) =
            tokio::join!(query_branch(dir, timeout), query_dirty_count(dir, timeout));
        Self {
            branch,
            dirty_count,
        }
    }
}

/// A git subprocess query failure
#[derive(Debug, Error)]
pub enum GitQueryError {
    /// The binary could not be spawned (typically: git not installed)
    #[error("failed to spawn process")]
    Spawn(#[source] std::io::Error),
    /// The process exited with a non-zero status (None if killed by signal)
    #[error("process exited with status {0:?}")]
    NonZeroExit(Option<i32>),
    /// The process did not finish within the configured timeout
    #[error("process timed out after {0:?}")]
    Timeout(Duration),
    /// Waiting on the process failed
    #[error("failed waiting for process")]
    Wait(#[source] std::io::Error),
    /// The process produced output that was not valid UTF-8
    #[error("process output was not valid UTF-8")]
    Decode,
    /// The process succeeded but produced no usable output
    #[error("process produced no output")]
    EmptyOutput,
}

/// Query the current branch name for `dir`.
///
/// Returns the trimmed first line of `git rev-parse --abbrev-ref HEAD`
/// output, or `None` on any failure, non-zero exit, or timeout.
pub async fn query_branch(dir: &Path, timeout: Duration) -> Option<String> {
    let output = run_capture("git", &["rev-parse", "--abbrev-ref", "HEAD"], dir, timeout)
        .await
        .ok()?;
    first_line(&output).ok()
}

/// Query the number of changed working-tree paths for `dir`.
///
/// Returns `Some(n)` when `git status --porcelain` succeeds and reports
/// `n > 0` changed paths, `None` on a clean tree or any failure.
pub async fn query_dirty_count(dir: &Path, timeout: Duration) -> Option<usize> {
    let output = run_capture("git", &["status", "--porcelain"], dir, timeout)
        .await
        .ok()?;
    match count_status_lines(&output) {
        0 => None,
        n => Some(n),
    }
}

/// Run a command in `dir`, capturing stdout as UTF-8 text.
///
/// The child is killed if it outlives `timeout`.
async fn run_capture(
    program: &str,
    args: &[&str],
    dir: &Path,
    timeout: Duration,
) -> Result<String, GitQueryError> {
    let child = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(GitQueryError::Spawn)?;

    let output = tokio::time::timeout(timeout, child.wait_with_output())
        .await
        .map_err(|_| GitQueryError::Timeout(timeout))?
        .map_err(GitQueryError::Wait)?;

    if !output.status.success() {
        return Err(GitQueryError::NonZeroExit(output.status.code()));
    }

    String::from_utf8(output.stdout).map_err(|_| GitQueryError::Decode)
}

/// Extract the trimmed first line of captured output.
fn first_line(output: &str) -> Result<String, GitQueryError> {
    let line = output.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(GitQueryError::EmptyOutput);
    }
    Ok(line.to_string())
}

/// Count changed paths in porcelain status output.
///
/// Counts non-empty trimmed lines, so the count is the same whether or
/// not the final line carries a trailing newline.
fn count_status_lines(output: &str) -> usize {
    output.lines().filter(|line| !line.trim().is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short_timeout() -> Duration {
        Duration::from_secs(5)
    }

    #[test]
    fn test_first_line_trims() {
        assert_eq!(first_line("main\n").unwrap(), "main");
        assert_eq!(first_line("  main  \n").unwrap(), "main");
    }

    #[test]
    fn test_first_line_takes_only_first() {
        assert_eq!(first_line("main\nextra\n").unwrap(), "main");
    }

    #[test]
    fn test_first_line_empty_is_error() {
        assert!(matches!(first_line(""), Err(GitQueryError::EmptyOutput)));
        assert!(matches!(first_line("\n\n"), Err(GitQueryError::EmptyOutput)));
    }

    #[test]
    fn test_count_status_lines_basic() {
        assert_eq!(count_status_lines(" M src/main.rs\n?? new.txt\n"), 2);
    }

    #[test]
    fn test_count_status_lines_trailing_newline_agnostic() {
        assert_eq!(count_status_lines(" M a\n M b\n"), 2);
        assert_eq!(count_status_lines(" M a\n M b"), 2);
    }

    #[test]
    fn test_count_status_lines_empty_output() {
        assert_eq!(count_status_lines(""), 0);
        assert_eq!(count_status_lines("\n"), 0);
    }

    // --- run_capture failure taxonomy (real subprocesses) ---

    #[tokio::test]
    async fn test_run_capture_collects_stdout() {
        let out = run_capture("echo", &["hello"], Path::new("."), short_timeout())
            .await
            .unwrap();
        assert_eq!(out, "hello\n");
    }

    #[tokio::test]
    async fn test_run_capture_missing_binary_is_spawn_error() {
        let err = run_capture(
            "definitely-not-a-real-binary",
            &[],
            Path::new("."),
            short_timeout(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GitQueryError::Spawn(_)));
    }

    #[tokio::test]
    async fn test_run_capture_nonzero_exit() {
        let err = run_capture("sh", &["-c", "exit 3"], Path::new("."), short_timeout())
            .await
            .unwrap_err();
        assert!(matches!(err, GitQueryError::NonZeroExit(Some(3))));
    }

    #[tokio::test]
    async fn test_run_capture_times_out() {
        let err = run_capture(
            "sh",
            &["-c", "sleep 5"],
            Path::new("."),
            Duration::from_millis(50),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, GitQueryError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_run_capture_stderr_is_discarded() {
        let out = run_capture(
            "sh",
            &["-c", "echo noise >&2; echo signal"],
            Path::new("."),
            short_timeout(),
        )
        .await
        .unwrap();
        assert_eq!(out, "signal\n");
    }
}
