//! Run and console panel state

use crate::evaluation::ExecutionResult;

/// State of the console panel and the latest run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    /// Whether the panel is visible
    pub open: bool,
    /// A run has been issued and its result has not arrived yet
    pub running: bool,
    /// Latest result to arrive, cleared on reset and navigation
    pub result: Option<ExecutionResult>,
    /// Id handed to the most recent run
    pub last_run_id: u64,
}

impl ConsoleState {
    /// Mark a new run in flight and return its id
    pub fn start_run(&mut self) -> u64 {
        self.last_run_id += 1;
        self.running = true;
        self.open = true;
        self.result = None;
        self.last_run_id
    }

    /// Store a result; the last one to arrive wins
    pub fn finish_run(&mut self, run_id: u64, result: ExecutionResult) {
        if run_id != self.last_run_id {
            tracing::debug!(
                run_id,
                latest = self.last_run_id,
                "Result arrived for an earlier run"
            );
        }
        self.running = false;
        self.result = Some(result);
    }

    /// Drop the result and hide the panel
    pub fn clear(&mut self) {
        self.result = None;
        self.open = false;
    }

    /// The floating "open console" affordance is shown when the panel is
    /// closed but there is something to look at
    pub fn shows_open_affordance(&self) -> bool {
        !self.open && self.result.is_some()
    }
}
