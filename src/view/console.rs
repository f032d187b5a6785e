//! Console panel: verdict badge and per-case results

use std::fmt::Write;

use crate::evaluation::{ExecutionResult, ExecutionStatus, TestResult};
use crate::model::ConsoleState;

pub const PLACEHOLDER: &str = "Run your code to see results...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleBadge {
    Accepted,
    WrongAnswer,
    Error,
}

impl ConsoleBadge {
    pub fn for_status(status: ExecutionStatus) -> Self {
        match status {
            ExecutionStatus::Pass => ConsoleBadge::Accepted,
            ExecutionStatus::Fail => ConsoleBadge::WrongAnswer,
            ExecutionStatus::Error => ConsoleBadge::Error,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConsoleBadge::Accepted => "Accepted",
            ConsoleBadge::WrongAnswer => "Wrong Answer",
            ConsoleBadge::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleBody {
    /// Nothing has run yet (or a run is in flight)
    Placeholder,
    /// The result carries an error message; per-case rows are not shown
    ErrorPanel(String),
    Results {
        runtime_ms: f64,
        cases: Vec<TestResult>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleView {
    pub badge: Option<ConsoleBadge>,
    pub body: ConsoleBody,
}

impl ConsoleView {
    pub fn from_result(result: Option<&ExecutionResult>) -> Self {
        let Some(result) = result else {
            return Self {
                badge: None,
                body: ConsoleBody::Placeholder,
            };
        };
        let body = match result.error_text() {
            Some(message) => ConsoleBody::ErrorPanel(message.to_string()),
            None => ConsoleBody::Results {
                runtime_ms: result.execution_time,
                cases: result.results.clone(),
            },
        };
        Self {
            badge: Some(ConsoleBadge::for_status(result.status)),
            body,
        }
    }

    /// None while the panel is closed
    pub fn from_state(state: &ConsoleState) -> Option<Self> {
        state
            .open
            .then(|| Self::from_result(state.result.as_ref()))
    }
}

pub fn render_console(view: &ConsoleView) -> String {
    let mut out = String::from("Console");
    if let Some(badge) = view.badge {
        let _ = write!(out, "  [{}]", badge.label());
    }
    out.push('\n');

    match &view.body {
        ConsoleBody::Placeholder => {
            let _ = writeln!(out, "{}", PLACEHOLDER);
        }
        ConsoleBody::ErrorPanel(message) => {
            let _ = writeln!(out, "{}", message);
        }
        ConsoleBody::Results { runtime_ms, cases } => {
            let _ = writeln!(out, "Runtime: {}ms", runtime_ms);
            for (i, case) in cases.iter().enumerate() {
                let mark = if case.passed { "✓" } else { "✗" };
                let _ = writeln!(out);
                let _ = writeln!(out, "{} Test Case {}", mark, i + 1);
                let _ = writeln!(out, "  Input: {}", case.input);
                let _ = writeln!(out, "  Expected Output: {}", case.expected);
                let _ = writeln!(out, "  Actual Output: {}", case.actual);
            }
        }
    }
    out
}
