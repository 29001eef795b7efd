//! Status line rendering
//!
//! Pure formatting of the two status lines from parsed session metadata
//! and derived git state. Line 1 carries model and output style, line 2
//! carries directory and branch/dirty-state. No I/O happens here.

use crate::config::ColorScheme;
use crate::git::GitState;
use crate::session::SessionInfo;
use crate::theme::{paint, Color};

/// Separator between the two segments of each line
const SEGMENT_SEPARATOR: &str = " | ";

/// Render line 1: model identity and output style.
#[must_use]
pub fn format_line1(session: &SessionInfo, scheme: ColorScheme) -> String {
    let model = paint(
        scheme,
        Color::SkyBlue,
        &format!("🧠 {}", session.model_token()),
    );
    let style = paint(scheme, Color::Mauve, &format!("⚡ {}", session.style_name()));
    format!("{model}{SEGMENT_SEPARATOR}{style}")
}

/// Render line 2: working directory and git state.
#[must_use]
pub fn format_line2(session: &SessionInfo, git: &GitState, scheme: ColorScheme) -> String {
    let dir = paint(
        scheme,
        Color::LightBlue,
        &format!("📁 {}", dir_label(session.current_dir())),
    );

    let git_segment = git.branch.as_ref().map_or_else(
        || paint(scheme, Color::Gray, "no git"),
        |branch| {
            let text = match git.dirty_count {
                Some(n) if n > 0 => format!("🌿 {branch} ±{n}"),
                _ => format!("🌿 {branch}"),
            };
            paint(scheme, Color::Green, &text)
        },
    );

    format!("{dir}{SEGMENT_SEPARATOR}{git_segment}")
}

/// Render both status lines.
#[must_use]
pub fn render(session: &SessionInfo, git: &GitState, scheme: ColorScheme) -> (String, String) {
    (
        format_line1(session, scheme),
        format_line2(session, git, scheme),
    )
}

/// The fixed render used when input cannot be decoded or rendering
/// fails unexpectedly. A status line must always produce output.
#[must_use]
pub fn fallback_lines(scheme: ColorScheme) -> (String, String) {
    if scheme.is_colored() {
        render(&SessionInfo::default(), &GitState::default(), scheme)
    } else {
        (
            "Claude | default".to_string(),
            "📁 unknown | no git".to_string(),
        )
    }
}

/// Derive the directory label: the last two path segments joined by `/`,
/// the single segment when fewer than two exist, or "unknown" for an
/// empty path. Trailing slashes are ignored, so a bare "/" has no
/// segments and labels as "unknown" rather than an empty string.
fn dir_label(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        [] => "unknown".to_string(),
        [only] => (*only).to_string(),
        [.., parent, last] => format!("{parent}/{last}"),
    }
}
