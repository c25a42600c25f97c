//! Long-description cleanup.

use tracing::warn;

/// Normalize a test method's documentation text into the long description
/// posted with a result.
///
/// The first line is the short summary and is discarded; the body keeps its
/// relative indentation but is shifted left to its minimal common indent.
/// Returns an empty string whenever there is nothing usable.
pub fn normalize(doc: Option<&str>) -> String {
    let Some(doc) = doc else {
        return String::new();
    };
    if doc.is_empty() {
        return String::new();
    }

    let Some((_summary, body)) = doc.split_once('\n') else {
        warn!("documentation has no body after the summary line");
        return String::new();
    };

    strip_common_indent(body)
}

/// Shift every line left by the minimal leading-space count across non-empty
/// lines. Applying this twice is the same as applying it once.
pub fn strip_common_indent(body: &str) -> String {
    let lines: Vec<&str> = body.split('\n').collect();
    let min_indent = lines
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    if min_indent == 0 {
        return body.to_string();
    }

    lines
        .iter()
        .map(|line| line.get(min_indent..).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::{normalize, strip_common_indent};

    #[test]
    fn drops_summary_and_reindents_body() {
        let doc = "Log in with a valid password.\n\n        Steps:\n            1. Open the login page.\n            2. Submit valid credentials.\n";
        assert_eq!(
            normalize(Some(doc)),
            "\nSteps:\n    1. Open the login page.\n    2. Submit valid credentials.\n"
        );
    }

    #[test]
    fn absent_or_empty_doc_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
    }

    #[test]
    fn summary_only_doc_is_empty() {
        assert_eq!(normalize(Some("Just a one-liner.")), "");
    }

    #[test]
    fn blank_lines_survive_reindent() {
        let doc = "Summary.\n    first\n\n    second";
        assert_eq!(normalize(Some(doc)), "first\n\nsecond");
    }

    #[test]
    fn reindent_is_idempotent() {
        let body = "already\n    at minimal\nindent";
        let once = strip_common_indent(body);
        assert_eq!(strip_common_indent(&once), once);
        assert_eq!(once, body);

        let indented = "    shifted\n        nested";
        let once = strip_common_indent(indented);
        assert_eq!(strip_common_indent(&once), once);
        assert_eq!(once, "shifted\n    nested");
    }
}
