use serde::{Deserialize, Serialize};

/// Outcome of one completed test, as reported by the host runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestOutcome {
    Passed,
    Failed,
    Error,
}

impl TestOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            TestOutcome::Passed => "passed",
            TestOutcome::Failed => "failed",
            TestOutcome::Error => "error",
        }
    }
}

/// One normalized result, buffered per test until the end-of-run submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub component: String,
    /// Second-from-last dotted segment of the test address.
    pub suite: String,
    /// Resolved id; empty when unresolvable.
    pub test_id: String,
    pub title: String,
    pub description: String,
    pub result: TestOutcome,
    /// Cleaned traceback text, present only for failed/error outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Ordered (name, value) pairs pulled off the test method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<(String, String)>>,
    /// Fixed per-session annotation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Failure payload the host runner hands over with a failed/error outcome.
#[derive(Debug, Clone)]
pub struct FailureInfo {
    /// Fully rendered exception text, possibly with a captured-logging
    /// section appended by the runner.
    pub rendered: String,
    /// The runner marked this as its skip signal.
    pub skip: bool,
}

impl FailureInfo {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            skip: false,
        }
    }

    pub fn skip(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            skip: true,
        }
    }
}
