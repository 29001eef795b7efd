//! Render configuration
//!
//! Built once at program start from environment lookups (optionally
//! overridden by CLI flags) and passed explicitly into the renderer,
//! so formatting stays pure and unit-testable.

use std::time::Duration;

/// Default git subprocess timeout, in seconds.
const DEFAULT_GIT_TIMEOUT_SECS: f64 = 2.0;

/// Color scheme for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Full ANSI coloring (the default)
    #[default]
    Auto,
    /// Plain text, no escape sequences
    Minimal,
}

impl ColorScheme {
    /// Parse a color scheme from a raw setting value.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Any value other than `minimal` (including `None`) selects `Auto`.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("minimal") => Self::Minimal,
            _ => Self::Auto,
        }
    }

    /// Returns true if ANSI escape sequences should be emitted.
    #[must_use]
    pub const fn is_colored(self) -> bool {
        matches!(self, Self::Auto)
    }
}

/// Process-wide render configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Selected color scheme
    pub color_scheme: ColorScheme,
    /// Wall-clock timeout applied to each git subprocess call
    pub git_timeout: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Auto,
            git_timeout: parse_timeout(None),
        }
    }
}

impl RenderConfig {
    /// Build configuration from the process environment.
    ///
    /// Reads `CLAUDE_STATUS_COLOR_SCHEME` and `GIT_TIMEOUT_SECONDS`.
    /// `overrides` (typically from CLI flags) take precedence over the
    /// environment when present.
    #[must_use]
    pub fn from_env(overrides: &ConfigOverrides) -> Self {
        let scheme_var = std::env::var("CLAUDE_STATUS_COLOR_SCHEME").ok();
        let timeout_var = std::env::var("GIT_TIMEOUT_SECONDS").ok();

        Self::resolve(
            overrides
                .color_scheme
                .as_deref()
                .or(scheme_var.as_deref()),
            overrides.git_timeout_seconds.or_else(|| {
                timeout_var.as_deref().and_then(|v| v.trim().parse().ok())
            }),
        )
    }

    /// Resolve configuration from already-extracted raw values.
    #[must_use]
    pub fn resolve(color_scheme: Option<&str>, timeout_secs: Option<f64>) -> Self {
        Self {
            color_scheme: ColorScheme::parse(color_scheme),
            git_timeout: parse_timeout(timeout_secs),
        }
    }
}

/// Optional overrides applied on top of the environment.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Color scheme value, same grammar as `CLAUDE_STATUS_COLOR_SCHEME`
    pub color_scheme: Option<String>,
    /// Git timeout in seconds, same meaning as `GIT_TIMEOUT_SECONDS`
    pub git_timeout_seconds: Option<f64>,
}

/// Convert a raw timeout value to a `Duration`.
///
/// Non-finite or non-positive values fall back to the 2-second default
/// rather than disabling the timeout.
fn parse_timeout(secs: Option<f64>) -> Duration {
    let secs = match secs {
        Some(s) if s.is_finite() && s > 0.0 => s,
        _ => DEFAULT_GIT_TIMEOUT_SECS,
    };
    Duration::from_secs_f64(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_default_is_auto() {
        assert_eq!(ColorScheme::parse(None), ColorScheme::Auto);
    }

    #[test]
    fn test_scheme_minimal() {
        assert_eq!(ColorScheme::parse(Some("minimal")), ColorScheme::Minimal);
    }

    #[test]
    fn test_scheme_minimal_case_insensitive_and_trimmed() {
        assert_eq!(
            ColorScheme::parse(Some("  MiNiMaL\n")),
            ColorScheme::Minimal
        );
    }

    #[test]
    fn test_scheme_unrecognized_values_are_auto() {
        assert_eq!(ColorScheme::parse(Some("auto")), ColorScheme::Auto);
        assert_eq!(ColorScheme::parse(Some("dark")), ColorScheme::Auto);
        assert_eq!(ColorScheme::parse(Some("")), ColorScheme::Auto);
    }

    #[test]
    fn test_is_colored() {
        assert!(ColorScheme::Auto.is_colored());
        assert!(!ColorScheme::Minimal.is_colored());
    }

    #[test]
    fn test_default_timeout_is_two_seconds() {
        let config = RenderConfig::resolve(None, None);
        assert_eq!(config.git_timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_timeout_fractional_seconds() {
        let config = RenderConfig::resolve(None, Some(0.5));
        assert_eq!(config.git_timeout, Duration::from_millis(500));
    }

    #[test]
    fn test_timeout_rejects_zero_and_negative() {
        assert_eq!(
            RenderConfig::resolve(None, Some(0.0)).git_timeout,
            Duration::from_secs(2)
        );
        assert_eq!(
            RenderConfig::resolve(None, Some(-1.5)).git_timeout,
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_timeout_rejects_nan_and_infinity() {
        assert_eq!(
            RenderConfig::resolve(None, Some(f64::NAN)).git_timeout,
            Duration::from_secs(2)
        );
        assert_eq!(
            RenderConfig::resolve(None, Some(f64::INFINITY)).git_timeout,
            Duration::from_secs(2)
        );
    }

    #[test]
    fn test_resolve_combines_both_settings() {
        let config = RenderConfig::resolve(Some("minimal"), Some(5.0));
        assert_eq!(config.color_scheme, ColorScheme::Minimal);
        assert_eq!(config.git_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.color_scheme, ColorScheme::Auto);
        assert_eq!(config.git_timeout, Duration::from_secs(2));
    }
}
