//! Reset, load and copy

use crate::commands::{Cmd, COPY_CONFIRMATION};
use crate::messages::CodeMsg;
use crate::model::AppModel;

pub fn update_code(model: &mut AppModel, msg: CodeMsg) -> Option<Cmd> {
    match msg {
        CodeMsg::Reset => {
            if model.console.running {
                tracing::debug!("Reset ignored while a run is in flight");
                return None;
            }
            let starter = model.starter_code().to_string();
            model.replace_code_externally(starter);
            model.console.clear();
            None
        }
        CodeMsg::Load(text) => {
            model.replace_code_externally(text);
            None
        }
        CodeMsg::Copy => Some(Cmd::CopyToClipboard(model.code().to_string())),
        CodeMsg::CopyFinished(Ok(())) => {
            model.copied = true;
            Some(Cmd::ClearCopiedAfter(COPY_CONFIRMATION))
        }
        CodeMsg::CopyFinished(Err(e)) => {
            tracing::warn!("Failed to copy: {}", e);
            None
        }
        CodeMsg::CopyConfirmationExpired => {
            model.copied = false;
            None
        }
    }
}
