//! Running code and the console panel

use crate::commands::Cmd;
use crate::evaluation::EvaluationRequest;
use crate::messages::ConsoleMsg;
use crate::model::AppModel;

pub fn update_console(model: &mut AppModel, msg: ConsoleMsg) -> Option<Cmd> {
    match msg {
        ConsoleMsg::Run => {
            let request =
                EvaluationRequest::new(model.code(), model.language(), model.problem());
            let run_id = model.console.start_run();
            tracing::info!(
                run_id,
                day = model.day(),
                language = %model.language(),
                "Running code"
            );
            Some(Cmd::Evaluate { run_id, request })
        }
        ConsoleMsg::EvaluationFinished { run_id, result } => {
            tracing::info!(run_id, status = ?result.status, "Run finished");
            model.console.finish_run(run_id, result);
            None
        }
        ConsoleMsg::Open => {
            model.console.open = true;
            None
        }
        ConsoleMsg::Close => {
            model.console.open = false;
            None
        }
    }
}
