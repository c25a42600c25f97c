//! Traceback cleanup for failure output.
//!
//! The host runner renders exception text and may append captured logging
//! after a fixed marker line; only the part of the traceback after the
//! raising frame is worth posting.

/// Delimiter the runner injects between the traceback and captured logging.
const CAPTURED_LOGGING_MARKER: &str = "-------------------- >> begin captured logging";

const RAISE_PREFIX: &str = "    raise";

/// Which slice of the pre-marker text is kept. Two deployments of the
/// aggregator historically disagreed here; the choice stays explicit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracebackStyle {
    /// Everything after the last line beginning with `    raise`.
    #[default]
    AfterLastRaise,
    /// Only the last line of the pre-marker text.
    LastLine,
}

/// Cut the relevant traceback out of fully rendered exception text.
///
/// Never fails: with no marker the whole text is considered, and with no
/// raise line the whole pre-marker text is returned.
pub fn extract(rendered: &str, style: TracebackStyle) -> String {
    let before_marker = rendered
        .split(CAPTURED_LOGGING_MARKER)
        .next()
        .unwrap_or(rendered)
        .trim();
    let lines: Vec<&str> = before_marker.split('\n').collect();

    match style {
        TracebackStyle::LastLine => lines.last().copied().unwrap_or("").to_string(),
        TracebackStyle::AfterLastRaise => {
            let start = lines
                .iter()
                .rposition(|line| line.starts_with(RAISE_PREFIX))
                .map(|index| index + 1)
                .unwrap_or(0);
            lines[start..].join("\n")
        }
    }
}
