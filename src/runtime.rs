//! Runtime - executes commands and feeds their results back as messages
//!
//! Evaluations and timers run on their own threads and report back over an
//! mpsc channel; the model is only ever touched from the thread that owns
//! the runtime.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::clipboard::Clipboard;
use crate::commands::Cmd;
use crate::evaluation::{evaluate_at_boundary, Evaluator};
use crate::messages::{CodeMsg, ConsoleMsg, Msg};
use crate::model::AppModel;
use crate::update::update;

pub struct Runtime {
    evaluator: Arc<dyn Evaluator>,
    clipboard: Box<dyn Clipboard>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    pub fn new(evaluator: Arc<dyn Evaluator>, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            evaluator,
            clipboard,
            msg_tx,
            msg_rx,
        }
    }

    /// Update the model with `msg` and run whatever command comes back
    pub fn dispatch(&mut self, model: &mut AppModel, msg: Msg) {
        if let Some(cmd) = update(model, msg) {
            self.process_cmd(cmd);
        }
    }

    /// Apply every message that has already arrived. Returns how many there were.
    pub fn process_pending(&mut self, model: &mut AppModel) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.dispatch(model, msg);
            count += 1;
        }
        count
    }

    /// Wait up to `timeout` for the next message and apply it.
    /// Returns false when nothing arrived.
    pub fn process_next(&mut self, model: &mut AppModel, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(model, msg);
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Block until no run is in flight, or `timeout` passes between messages
    pub fn wait_for_run(&mut self, model: &mut AppModel, timeout: Duration) -> bool {
        while model.console.running {
            if !self.process_next(model, timeout) {
                tracing::warn!("Timed out waiting for evaluation");
                return false;
            }
        }
        true
    }

    pub fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::Evaluate { run_id, request } => {
                let tx = self.msg_tx.clone();
                let evaluator = Arc::clone(&self.evaluator);
                std::thread::spawn(move || {
                    let result = evaluate_at_boundary(evaluator.as_ref(), &request);
                    let _ = tx.send(Msg::Console(ConsoleMsg::EvaluationFinished {
                        run_id,
                        result,
                    }));
                });
            }
            Cmd::CopyToClipboard(text) => {
                let result = self.clipboard.set_text(&text);
                let _ = self.msg_tx.send(Msg::Code(CodeMsg::CopyFinished(result)));
            }
            Cmd::SetClipboard(text) => {
                if let Err(e) = self.clipboard.set_text(&text) {
                    tracing::warn!("Failed to write clipboard: {}", e);
                }
            }
            Cmd::ClearCopiedAfter(delay) => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    let _ = tx.send(Msg::Code(CodeMsg::CopyConfirmationExpired));
                });
            }
        }
    }
}
